//! Curve Core Implementations
//!
//! This crate provides the power-law fitter and the prediction engine built
//! on top of it:
//!
//! - [`regression`]: Ordinary least squares, power-law fitting
//! - [`engine`]: Coefficient table construction and evaluation
//!
//! ## Example
//!
//! ```rust
//! use curve_core::prelude::*;
//! use std::collections::HashMap;
//!
//! let load = vec![1.0, 2.0, 4.0, 8.0];
//! let cpu: Vec<f64> = load.iter().map(|x: &f64| 2.0 * x.powf(0.5)).collect();
//! let columns = HashMap::from([
//!     ("load".to_string(), load),
//!     ("CPU".to_string(), cpu),
//! ]);
//!
//! let (engine, _) = PredictionEngine::build(&columns, "load", &["CPU"]).unwrap();
//! let predicted = engine.evaluate("cpu", 16.0).unwrap();
//! assert!((predicted - 8.0).abs() < 1e-9);
//! ```

pub mod engine;
pub mod regression;

// Re-export from SPI
pub use curve_spi::{
    metric_key, CoefficientTable, CurveError, CurveFitter, FitReport, FitResult, Result,
};

// Re-export implementations for convenience
pub use engine::{evaluate, evaluate_all, BuildReport, PredictionEngine};
pub use regression::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use curve_spi::CurveFitter;
    // Regression
    pub use crate::regression::{power_law_fit, PowerLawFitter};
    // Engine
    pub use crate::engine::{BuildReport, PredictionEngine};
    // Model and error types
    pub use curve_spi::{CoefficientTable, CurveError, FitResult, Result};
}
