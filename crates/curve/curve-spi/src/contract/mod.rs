//! Contract traits for curve implementations
//!
//! - [`CurveFitter`]: fits curve coefficients from paired samples

mod fitter;

pub use fitter::CurveFitter;
