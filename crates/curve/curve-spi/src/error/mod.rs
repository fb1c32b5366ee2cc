//! Error types for curve operations
//!
//! This module provides the [`CurveError`] enum and [`Result`] type alias
//! shared by the fitter and the prediction engine.

mod curve_error;

pub use curve_error::{CurveError, Result};
