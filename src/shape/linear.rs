use super::WindowShape;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rectangular;

impl WindowShape for Rectangular {
    #[inline]
    fn value(&self, _i: f64, _n: usize) -> f64 {
        1.0
    }

    /// Multiplying by one is a no-op.
    fn apply(&self, _x: &mut [f64]) {}
}

/// `1 - |i - (N-1)/2| / (N/2)`
///
/// The end points are `1/N` above zero rather than zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Triangular;

impl WindowShape for Triangular {
    fn value(&self, i: f64, n: usize) -> f64 {
        if n <= 1 {
            return 1.0;
        }
        let center = (n - 1) as f64 / 2.0;
        1.0 - (i - center).abs() / (n as f64 / 2.0)
    }
}
