//! Sample quantile estimation
//!
//! This crate provides the quantile collaborators used by the location and
//! skewness crates.
//!
//! # Features
//!
//! - **Linear interpolation** ([`Linear`]): the Hyndman-Fan type 7 sample
//!   quantile, the default convention of numeric array libraries
//! - **Harrell-Davis** ([`HarrellDavis`]): smooth quantiles from Beta-weighted
//!   order statistics
//! - **Missing values**: NaNs are discarded before any quantile is computed
//!
//! # Example
//!
//! ```rust
//! use robust_quantile::{estimators::linear, QuantileEstimator};
//!
//! let data = vec![1.0, 2.0, f64::NAN, 3.0, 4.0, 10.0];
//! let est = linear();
//!
//! let quartiles = est.quantiles(&data, &[0.25, 0.5, 0.75]).unwrap();
//! assert_eq!(quartiles, vec![2.0, 3.0, 4.0]);
//! ```

pub mod error;
pub mod estimators;
pub mod traits;

// Re-export main types
pub use error::{Error, Result};
pub use estimators::{harrell_davis, linear, HarrellDavis, Linear};
pub use traits::QuantileEstimator;

/// The estimator used when none is specified
pub type DefaultQuantileEstimator = Linear;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Error, HarrellDavis, Linear, QuantileEstimator, Result};
}
