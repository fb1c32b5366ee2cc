//! Curve error types
//!
//! Defines the standardized error type for fitting and prediction.

use thiserror::Error;

/// Result type alias for curve operations
pub type Result<T> = std::result::Result<T, CurveError>;

/// Errors that can occur while fitting or evaluating power-law curves
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Too few samples survived the positivity mask
    #[error("Insufficient data: need at least {required} positive samples, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// All surviving x values are equal, the slope is undefined
    #[error("Singular fit: x has zero variance across {points} positive samples")]
    SingularFit { points: usize },

    /// The fitted scale `exp(intercept)` is zero or infinite in `f64`
    #[error("Scale out of range: exp({intercept}) is not a positive finite number")]
    ScaleOutOfRange { intercept: f64 },

    /// `x` and `y` must have the same number of elements
    #[error("Length mismatch: x has {x_len} points, y has {y_len}")]
    MismatchedInputs { x_len: usize, y_len: usize },

    /// No coefficients were fitted for the requested metric
    #[error("Unknown metric '{0}'")]
    UnknownMetric(String),

    /// The independent-variable column is absent from the source data
    #[error("Missing column '{0}'")]
    MissingColumn(String),

    /// None of the target metrics could be fitted
    #[error("No metric could be fitted, coefficient table is empty")]
    EmptyTable,

    /// The curve is undefined at the requested point
    #[error("Domain error: x = {x} is undefined for exponent {exponent}")]
    Domain { x: f64, exponent: f64 },
}
