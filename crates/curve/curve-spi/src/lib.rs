//! Curve Service Provider Interface
//!
//! Defines the traits, model types and error type shared by the power-law
//! fitter and the prediction engine:
//!
//! - [`CurveFitter`]: the fitting contract
//! - [`FitResult`], [`FitReport`], [`CoefficientTable`]: model types
//! - [`CurveError`]: standardized error type
//! - [`Result`]: convenient result type alias

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::CurveFitter;
pub use error::{CurveError, Result};
pub use model::{metric_key, CoefficientTable, FitReport, FitResult};
