//! Curve Facade
//!
//! High-level API for power-law load curves. Re-exports all public types
//! from the curve stack for convenient usage.
//!
//! # Example
//!
//! ```rust
//! use curve_facade::prelude::*;
//!
//! let load = vec![1.0, 2.0, 3.0, 4.0];
//! let rx = vec![2.0, 8.0, 18.0, 32.0];
//!
//! let fit = power_law_fit(&load, &rx).unwrap();
//! assert!((fit.at(5.0).unwrap() - 50.0).abs() < 1e-9);
//! ```

// Re-export everything from core (includes implementations)
pub use curve_core::*;

// Configuration lives in the API crate
pub use curve_api::config;
pub use curve_api::{ConfigError, EngineConfig, EngineConfigBuilder};

/// Prelude module for convenient imports
pub mod prelude {
    pub use curve_api::{EngineConfig, EngineConfigBuilder};
    pub use curve_core::prelude::*;
}
