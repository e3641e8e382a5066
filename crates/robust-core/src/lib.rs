//! Core traits and types for robust skewness analysis
//!
//! This crate provides the foundation shared by the quantile, location,
//! spread and skewness crates:
//!
//! - [`Numeric`]: the floating point types every estimator is generic over
//! - [`Error`] / [`Result`]: the unified error type
//! - [`utils`]: reducers that ignore missing (NaN) values
//! - [`math`]: grids, ranks and numerical integration
//! - [`CentralTendencyEstimator`]: the trait implemented by location estimators
//!
//! # Missing values
//!
//! A missing value is a NaN. Every reducer in this crate discards NaNs before
//! computing, so `nan_mean(&[1.0, f64::NAN, 3.0])` is `2.0`. Reducing nothing
//! yields NaN rather than an error.
//!
//! # Example
//!
//! ```rust
//! use robust_core::utils::{nan_mean, sorted_non_missing};
//! use robust_core::math::trapezoid;
//!
//! let data = vec![3.0, f64::NAN, 1.0, 2.0];
//! assert_eq!(nan_mean(&data), 2.0);
//! assert_eq!(sorted_non_missing(&data), vec![1.0, 2.0, 3.0]);
//!
//! let area = trapezoid(&[0.0, 1.0, 2.0], 0.5).unwrap();
//! assert_eq!(area, 1.0);
//! ```

pub mod error;
pub mod math;
pub mod numeric;
pub mod traits;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};
pub use numeric::Numeric;
pub use traits::CentralTendencyEstimator;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::math::{linspace, rank_min, sign, trapezoid};
    pub use crate::utils::{nan_max, nan_mean, nan_min, nan_sum, non_missing, sorted_non_missing};
    pub use crate::{CentralTendencyEstimator, Numeric, Result};
}
