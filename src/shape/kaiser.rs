use std::f64::consts::PI;

use crate::constants::{
    BESSEL_ASYMPTOTIC_THRESHOLD, BESSEL_EPSILON, BESSEL_MAX_TERMS, DEFAULT_KAISER_ALPHA,
};

use super::{WindowShape, normalized};

/// Kaiser window
///
/// `I0(πα sqrt(1 - (2i/(N-1) - 1)²)) / I0(πα)`
///
/// Larger `alpha` narrows the window, trading main-lobe width for side-lobe
/// suppression. `alpha = 0` is the rectangular window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kaiser {
    alpha: f64,
}

impl Kaiser {
    pub const fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for Kaiser {
    fn default() -> Self {
        Self::new(DEFAULT_KAISER_ALPHA)
    }
}

impl WindowShape for Kaiser {
    fn value(&self, i: f64, n: usize) -> f64 {
        let Some(x) = normalized(i, n) else {
            return 1.0;
        };
        let beta = PI * self.alpha;
        let r = 2.0 * x - 1.0;
        let arg = beta * (1.0 - r * r).max(0.0).sqrt();
        // I0(arg) / I0(beta) in scaled form, finite for any alpha
        bessel_i0e(arg) / bessel_i0e(beta) * (arg.abs() - beta.abs()).exp()
    }
}

/// Zeroth-order modified Bessel function of the first kind.
///
/// Overflows to `inf` for `|x|` above about 713; use [`bessel_i0e`] there.
pub fn bessel_i0(x: f64) -> f64 {
    let x = x.abs();
    if x > BESSEL_ASYMPTOTIC_THRESHOLD {
        bessel_i0e(x) * x.exp()
    } else {
        i0_series(x)
    }
}

/// Exponentially scaled `I0`: `exp(-|x|) I0(x)`.
pub fn bessel_i0e(x: f64) -> f64 {
    let x = x.abs();
    if x > BESSEL_ASYMPTOTIC_THRESHOLD {
        i0e_asymptotic(x)
    } else {
        i0_series(x) * (-x).exp()
    }
}

/// Power series `Σ ((x/2)^k / k!)²`, every term is positive so the sum is
/// stopped on the relative size of the next term.
fn i0_series(x: f64) -> f64 {
    let y = x * x / 4.0;
    let mut term = 1.0;
    let mut sum = 1.0;
    for k in 1..BESSEL_MAX_TERMS {
        term *= y / (k * k) as f64;
        sum += term;
        if term <= sum * BESSEL_EPSILON {
            break;
        }
    }
    sum
}

/// `Σ ((2k-1)!!)² / (k! (8x)^k) / sqrt(2πx)`, x > 30 so the terms shrink
/// far below the precision of `f64` before the expansion diverges.
fn i0e_asymptotic(x: f64) -> f64 {
    let mut term = 1.0;
    let mut sum = 1.0;
    for k in 1..BESSEL_MAX_TERMS {
        let odd = (2 * k - 1) as f64;
        term *= odd * odd / (8.0 * x * k as f64);
        sum += term;
        if term <= sum * BESSEL_EPSILON {
            break;
        }
    }
    sum / (2.0 * PI * x).sqrt()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::{Kaiser, bessel_i0, bessel_i0e};
    use crate::shape::{KAISER_WINDOW, WindowShape};

    #[rstest::rstest]
    #[case(1.0, 0.0)]
    #[case(1.266_065_877_752_008_4, 1.0)]
    #[case(1.266_065_877_752_008_4, -1.0)]
    #[case(27.239_871_823_604_442, 5.0)]
    #[case(2_815.716_628_466_254, 10.0)]
    fn i0(#[case] expected: f64, #[case] x: f64) {
        approx::assert_relative_eq!(bessel_i0(x), expected, max_relative = 1.0e-12);
    }

    #[rstest::rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(10.0)]
    #[case(29.9)]
    #[case(30.1)]
    #[case(50.0)]
    #[case(300.0)]
    fn i0e_matches_i0(#[case] x: f64) {
        approx::assert_relative_eq!(
            bessel_i0e(x),
            bessel_i0(x) * (-x).exp(),
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn i0e_large_argument() {
        // exp(-x) I0(x) ~ (1 + 1/(8x) + 9/(2(8x)²)) / sqrt(2πx)
        let x = 1.0e4;
        let t = 1.0 / (8.0 * x);
        let expected = (1.0 + t + 4.5 * t * t) / (2.0 * PI * x).sqrt();
        approx::assert_relative_eq!(bessel_i0e(x), expected, max_relative = 1.0e-9);
        assert!(bessel_i0(1.0e3).is_infinite());
    }

    #[test]
    fn large_alpha_stays_finite() {
        let kaiser = Kaiser::new(300.0);
        assert_eq!(kaiser.value(4.0, 9), 1.0);
        for i in 0..9 {
            let coef = kaiser.value(i as f64, 9);
            assert!(coef.is_finite());
            assert!((0.0..=1.0).contains(&coef));
        }
        assert!(kaiser.value(3.0, 9) > kaiser.value(2.0, 9));
    }

    #[test]
    fn default_alpha() {
        assert_eq!(KAISER_WINDOW.alpha(), 3.0);
        assert_eq!(Kaiser::default(), KAISER_WINDOW);
    }

    #[test]
    fn alpha_zero_is_rectangular() {
        let kaiser = Kaiser::new(0.0);
        for n in [2, 5, 64] {
            for i in 0..n {
                assert_eq!(kaiser.value(i as f64, n), 1.0);
            }
        }
    }

    #[test]
    fn peak_and_edges() {
        approx::assert_abs_diff_eq!(KAISER_WINDOW.value(4.0, 9), 1.0, epsilon = 1.0e-15);
        let edge = 1.0 / bessel_i0(3.0 * PI);
        approx::assert_relative_eq!(KAISER_WINDOW.value(0.0, 9), edge, max_relative = 1.0e-12);
        approx::assert_relative_eq!(KAISER_WINDOW.value(8.0, 9), edge, max_relative = 1.0e-12);
    }

    #[test]
    fn symmetric() {
        for n in [2, 8, 17, 256] {
            for i in 0..n {
                approx::assert_abs_diff_eq!(
                    KAISER_WINDOW.value(i as f64, n),
                    KAISER_WINDOW.value((n - 1 - i) as f64, n),
                    epsilon = 1.0e-12
                );
            }
        }
    }

    #[test]
    fn reference_taps() {
        // MATLAB kaiser(38, 5.653); beta = π·alpha
        let expected = [
            0.020392806629217,
            0.041484435695145,
            0.070067692203354,
            0.106749242190360,
            0.151823492501156,
            0.205218380642171,
            0.266458522450125,
            0.334649288647039,
            0.408484172820245,
            0.486276388059038,
            0.566014081873242,
            0.645436995269608,
            0.722130922112194,
            0.793635055125124,
            0.857556328958361,
            0.911684263160396,
            0.954099618076827,
            0.983270424870408,
            0.998129626296050,
        ];
        let kaiser = Kaiser::new(5.653 / PI);
        let table = kaiser.make(38).unwrap();
        for (i, expected) in expected.iter().enumerate() {
            approx::assert_abs_diff_eq!(table[i], *expected, epsilon = 1.0e-9);
            approx::assert_abs_diff_eq!(table[37 - i], *expected, epsilon = 1.0e-9);
        }
    }
}
