use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::{error::WindowError, shape::WindowShape};

/// Coefficient table of a window of fixed length.
///
/// The coefficients are evaluated once by [`Window::new`] and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    coefficients: Box<[f64]>,
}

impl Window {
    pub fn new<S: WindowShape + ?Sized>(n: usize, shape: &S) -> Result<Self, WindowError> {
        if n <= 1 {
            tracing::debug!(n, "Materializing a degenerate window.");
        }
        let coefficients = shape.make(n)?;
        tracing::trace!(n, "Materialized window coefficient table.");
        Ok(Self {
            coefficients: coefficients.into_boxed_slice(),
        })
    }

    /// `i < self.size()`
    #[inline]
    pub fn value(&self, i: usize) -> f64 {
        self.coefficients[i]
    }
    #[inline]
    pub fn size(&self) -> usize {
        self.coefficients.len()
    }

    pub fn iter(&self) -> impl '_ + Iterator<Item = f64> {
        self.coefficients.iter().copied()
    }

    /// Multiply `x` by the cached coefficients.
    ///
    /// # Panics
    ///
    /// Panics if `x.len() != self.size()`.
    pub fn apply(&self, x: &mut [f64]) {
        assert_eq!(
            x.len(),
            self.size(),
            "The buffer length must match the window length."
        );
        for (x, coef) in x.iter_mut().zip(&self.coefficients) {
            *x *= coef;
        }
    }
}

impl Deref for Window {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.coefficients
    }
}
