//! Fitted power-law coefficients

use crate::error::{CurveError, Result};
use serde::{Deserialize, Serialize};

/// Coefficients of the model `y = a * x^b`
///
/// `a` is always positive and finite when produced by a fitter. It is
/// recovered as the exponential of the log-space intercept, and a fit whose
/// intercept leaves the `f64` range is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Scale factor
    pub a: f64,
    /// Exponent
    pub b: f64,
}

impl FitResult {
    /// Create coefficients for `y = a * x^b`
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Evaluate the curve at `x`
    ///
    /// Negative `x` is not special-cased; callers are expected to pass a
    /// non-negative load. `x = 0` with a negative exponent has no finite
    /// value and returns [`CurveError::Domain`].
    pub fn at(&self, x: f64) -> Result<f64> {
        if x == 0.0 && self.b < 0.0 {
            return Err(CurveError::Domain {
                x,
                exponent: self.b,
            });
        }
        Ok(self.a * x.powf(self.b))
    }
}

/// A fit together with how many samples the positivity mask kept
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    pub result: FitResult,
    /// Samples that entered the regression
    pub used: usize,
    /// Samples dropped because x or y was not strictly positive and finite
    pub excluded: usize,
}
