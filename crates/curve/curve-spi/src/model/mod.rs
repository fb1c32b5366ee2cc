//! Model types shared across the curve crates
//!
//! - [`FitResult`]: coefficients of a single power-law curve
//! - [`FitReport`]: a fit plus positivity-mask bookkeeping
//! - [`CoefficientTable`]: build-once mapping from metric name to coefficients

mod coefficient_table;
mod fit_result;

pub use coefficient_table::{metric_key, CoefficientTable};
pub use fit_result::{FitReport, FitResult};
