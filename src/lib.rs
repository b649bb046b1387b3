//! Window functions for spectral analysis.
//!
//! A [`WindowShape`] evaluates one family of tapering functions and can
//! multiply a buffer in place. A [`Window`] caches the coefficients of a shape
//! for one length, for callers that window many buffers of the same size.
//!
//! ```
//! use fftwindow::{HANN_WINDOW, Window, WindowShape};
//!
//! let mut frame = vec![1.0; 512];
//! HANN_WINDOW.apply(&mut frame);
//!
//! let window = Window::new(512, &HANN_WINDOW).unwrap();
//! let mut next = vec![1.0; 512];
//! window.apply(&mut next);
//! assert_eq!(frame, next);
//! ```

pub mod constants;
pub mod error;
pub mod kind;
pub mod shape;
pub mod window;

pub use error::WindowError;
pub use kind::WindowKind;
pub use shape::{
    BLACKMAN_HARRIS_WINDOW, BLACKMAN_WINDOW, Blackman, BlackmanHarris, HAMMING_WINDOW,
    HANN_WINDOW, Hamming, Hann, KAISER_WINDOW, Kaiser, RECTANGULAR_WINDOW, Rectangular,
    TRIANGULAR_WINDOW, Triangular, WindowShape,
};
pub use window::Window;
