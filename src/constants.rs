/// Shape parameter of [`crate::shape::KAISER_WINDOW`]
pub const DEFAULT_KAISER_ALPHA: f64 = 3.0;

/// Cosine-sum coefficients `a0, a1` of the Hann window
pub const HANN: [f64; 2] = [0.5, 0.5];
/// Cosine-sum coefficients `a0, a1` of the Hamming window
pub const HAMMING: [f64; 2] = [0.54, 0.46];
/// Cosine-sum coefficients `a0, a1, a2` of the Blackman window
pub const BLACKMAN: [f64; 3] = [0.42, 0.5, 0.08];
/// Cosine-sum coefficients `a0..a3` of the four-term Blackman-Harris window
pub const BLACKMAN_HARRIS: [f64; 4] = [0.35875, 0.48829, 0.14128, 0.01168];

/// The series for I0 stops once a term drops below this fraction of the sum.
pub const BESSEL_EPSILON: f64 = 1.0e-16;
pub const BESSEL_MAX_TERMS: usize = 500;
/// Above this argument I0 is evaluated by its asymptotic expansion.
pub const BESSEL_ASYMPTOTIC_THRESHOLD: f64 = 30.0;
