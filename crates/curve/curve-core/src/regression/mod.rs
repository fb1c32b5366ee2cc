//! Regression models for load curves
//!
//! This module contains the algorithms that fit curve coefficients to data.
//!
//! ## Algorithms
//!
//! - **Ordinary Least Squares**: degree-1 line fit
//! - **Power Law**: `y = a * x^b` via log-linearization

pub mod ols;
pub mod power_law;

pub use ols::{ordinary_least_squares, LineFit};
pub use power_law::{power_law_fit, PowerLawFitter};
