use std::f64::consts::PI;

use crate::constants::{BLACKMAN, BLACKMAN_HARRIS, HAMMING, HANN};

use super::{WindowShape, normalized};

/// `a[0] - a[1] cos(2πx) + a[2] cos(4πx) - a[3] cos(6πx) + ...`
#[inline]
fn cosine_sum(a: &[f64], x: f64) -> f64 {
    a.iter()
        .enumerate()
        .map(|(k, a)| {
            let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
            sign * a * (2.0 * PI * k as f64 * x).cos()
        })
        .sum()
}

macro_rules! cosine_window {
    ($(#[$meta:meta])* $name:ident, $a:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl WindowShape for $name {
            fn value(&self, i: f64, n: usize) -> f64 {
                match normalized(i, n) {
                    Some(x) => cosine_sum(&$a, x),
                    None => 1.0,
                }
            }
        }
    };
}

cosine_window!(
    /// `0.5 (1 - cos(2πi/(N-1)))`
    Hann,
    HANN
);
cosine_window!(
    /// `0.54 - 0.46 cos(2πi/(N-1))`
    Hamming,
    HAMMING
);
cosine_window!(
    /// `0.42 - 0.5 cos(2πi/(N-1)) + 0.08 cos(4πi/(N-1))`
    Blackman,
    BLACKMAN
);
cosine_window!(
    /// Four-term Blackman-Harris window (-92 dB side lobes).
    BlackmanHarris,
    BLACKMAN_HARRIS
);
