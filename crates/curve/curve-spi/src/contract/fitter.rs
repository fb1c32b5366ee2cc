//! Fitter trait for curve models
//!
//! Defines the interface every curve fitter implements.

use crate::error::Result;
use crate::model::{FitReport, FitResult};

/// Fits curve coefficients from paired samples
///
/// `x[i]` corresponds to `y[i]`. Implementations are pure functions of their
/// inputs and may drop samples their model cannot use, reporting how many
/// were dropped in the [`FitReport`].
///
/// # Example
///
/// ```rust,ignore
/// use curve_spi::CurveFitter;
///
/// fn scale<F: CurveFitter>(fitter: &F, load: &[f64], metric: &[f64]) -> curve_spi::Result<f64> {
///     Ok(fitter.fit(load, metric)?.a)
/// }
/// ```
pub trait CurveFitter {
    /// Fit coefficients and report how many samples were used
    fn fit_report(&self, x: &[f64], y: &[f64]) -> Result<FitReport>;

    /// Fit coefficients
    fn fit(&self, x: &[f64], y: &[f64]) -> Result<FitResult> {
        self.fit_report(x, y).map(|report| report.result)
    }
}
