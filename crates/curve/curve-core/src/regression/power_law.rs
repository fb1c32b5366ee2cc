//! Power-law fitting via log-linearization
//!
//! Fits `y = a * x^b` by taking logarithms of both variables,
//! `ln(y) = ln(a) + b * ln(x)`, and solving the resulting straight line with
//! ordinary least squares.
//!
//! ## When to Use
//!
//! - A metric grows (or decays) multiplicatively with load
//! - The relationship looks straight on a log-log plot

use tracing::debug;

use super::ols::ordinary_least_squares;
use crate::{CurveError, CurveFitter, FitReport, FitResult, Result};

/// Least-squares power-law fitter
///
/// Samples where either coordinate is zero, negative or not finite are
/// excluded before the log transform; they never cause an error on their own.
///
/// # Example
///
/// ```rust
/// use curve_core::prelude::*;
///
/// let x = vec![1.0, 2.0, 4.0, 8.0];
/// let y: Vec<f64> = x.iter().map(|v: &f64| 3.0 * v.powf(1.5)).collect();
///
/// let fit = PowerLawFitter::new().fit(&x, &y).unwrap();
/// assert!((fit.a - 3.0).abs() < 1e-9);
/// assert!((fit.b - 1.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerLawFitter;

impl PowerLawFitter {
    pub fn new() -> Self {
        Self
    }
}

/// Whether a sample can enter the log-space regression
fn is_loggable(v: f64) -> bool {
    v > 0.0 && v.is_finite()
}

impl CurveFitter for PowerLawFitter {
    fn fit_report(&self, x: &[f64], y: &[f64]) -> Result<FitReport> {
        if x.len() != y.len() {
            return Err(CurveError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        let (log_x, log_y): (Vec<f64>, Vec<f64>) = x
            .iter()
            .zip(y.iter())
            .filter(|&(&xi, &yi)| is_loggable(xi) && is_loggable(yi))
            .map(|(&xi, &yi)| (xi.ln(), yi.ln()))
            .unzip();

        let used = log_x.len();
        let excluded = x.len() - used;
        if used < 2 {
            return Err(CurveError::InsufficientData {
                required: 2,
                actual: used,
            });
        }

        let line = ordinary_least_squares(&log_x, &log_y)?;
        let a = line.intercept.exp();
        if !(a > 0.0 && a.is_finite()) {
            return Err(CurveError::ScaleOutOfRange {
                intercept: line.intercept,
            });
        }
        let result = FitResult::new(a, line.slope);
        debug!(
            a = result.a,
            b = result.b,
            used,
            excluded,
            "fitted power law"
        );

        Ok(FitReport {
            result,
            used,
            excluded,
        })
    }
}

/// Fit `y = a * x^b` with the default fitter
pub fn power_law_fit(x: &[f64], y: &[f64]) -> Result<FitResult> {
    PowerLawFitter.fit(x, y)
}
