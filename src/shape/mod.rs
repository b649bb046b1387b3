//! Window shapes and the operations shared by all of them.

use crate::{constants::DEFAULT_KAISER_ALPHA, error::WindowError};

pub use self::{
    cosine::{Blackman, BlackmanHarris, Hamming, Hann},
    kaiser::{Kaiser, bessel_i0},
    linear::{Rectangular, Triangular},
};

mod cosine;
mod kaiser;
mod linear;

pub static RECTANGULAR_WINDOW: Rectangular = Rectangular;
pub static TRIANGULAR_WINDOW: Triangular = Triangular;
pub static HANN_WINDOW: Hann = Hann;
pub static HAMMING_WINDOW: Hamming = Hamming;
pub static BLACKMAN_WINDOW: Blackman = Blackman;
pub static BLACKMAN_HARRIS_WINDOW: BlackmanHarris = BlackmanHarris;
/// Kaiser window with `alpha = 3`
pub static KAISER_WINDOW: Kaiser = Kaiser::new(DEFAULT_KAISER_ALPHA);

/// A window function of one mathematical family.
///
/// Only [`WindowShape::value`] has to be provided; the buffer operations are
/// built on top of it. The length `N` of the window is always the length of the
/// buffer passed in.
pub trait WindowShape: Send + Sync {
    /// Coefficient at position `i` of a window of length `n`.
    ///
    /// `0 <= i < n` is expected and not checked. Every shape returns `1.0`
    /// when `n <= 1`.
    fn value(&self, i: f64, n: usize) -> f64;

    /// Multiply `x` by the window in place.
    fn apply(&self, x: &mut [f64]) {
        let n = x.len();
        for (i, x) in x.iter_mut().enumerate() {
            *x *= self.value(i as f64, n);
        }
    }

    /// Overwrite `x` with the window coefficients.
    fn fill(&self, x: &mut [f64]) {
        let n = x.len();
        for (i, x) in x.iter_mut().enumerate() {
            *x = self.value(i as f64, n);
        }
    }

    /// Allocate a new buffer of length `n` holding the window coefficients.
    fn make(&self, n: usize) -> Result<Vec<f64>, WindowError> {
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(n)?;
        buffer.resize(n, 0.0);
        self.fill(&mut buffer);
        Ok(buffer)
    }
}

/// `i / (n - 1)`, the position normalized to `[0, 1]`.
/// `None` for `n <= 1`, where the window degenerates to a single `1.0`.
#[inline]
pub(crate) fn normalized(i: f64, n: usize) -> Option<f64> {
    (n > 1).then(|| i / (n - 1) as f64)
}

#[cfg(test)]
pub(crate) const STOCK: [&dyn WindowShape; 7] = [
    &RECTANGULAR_WINDOW,
    &TRIANGULAR_WINDOW,
    &HANN_WINDOW,
    &HAMMING_WINDOW,
    &BLACKMAN_WINDOW,
    &BLACKMAN_HARRIS_WINDOW,
    &KAISER_WINDOW,
];
