//! Curve Consumer API
//!
//! This crate provides consumer-facing configuration for the prediction
//! engine and re-exports the SPI traits and types.
//!
//! # Re-exports
//!
//! All types from [`curve_spi`] are re-exported for convenience:
//!
//! - [`CurveFitter`]: Fitting contract
//! - [`FitResult`], [`FitReport`], [`CoefficientTable`]: Model types
//! - [`CurveError`]: Error type
//! - [`Result`]: Result type alias

pub mod config;

pub use config::{ConfigError, EngineConfig, EngineConfigBuilder};

// Re-export all SPI types
pub use curve_spi::{
    metric_key, CoefficientTable, CurveError, CurveFitter, FitReport, FitResult, Result,
};
