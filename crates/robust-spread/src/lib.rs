//! Spread estimators for normalising skewness coefficients
//!
//! Moment based skewness coefficients divide a difference of two centres
//! by a spread. This crate provides the two spreads they use:
//!
//! | Estimator | Breakdown Point | Efficiency | Used by |
//! |-----------|----------------|------------|---------|
//! | [`StdDev`] (population) | 0% | 100% | Pearson coefficients |
//! | [`MeanAbsoluteDeviation`] about the median | 0% | 88% | Medeen, Hossain-Adnan |
//!
//! Neither estimator is robust; the robust skewness coefficients rely on
//! quantile differences instead.
//!
//! # Example
//!
//! ```rust
//! use robust_spread::{std_dev, MeanAbsoluteDeviation, SpreadEstimator};
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 10.0];
//! assert!((std_dev(&data) - 10.0_f64.sqrt()).abs() < 1e-12);
//!
//! let mad = MeanAbsoluteDeviation::about_median().estimate(&data);
//! assert!((mad - 2.2).abs() < 1e-12);
//! ```

mod mean_abs_dev;
mod std_dev;
mod traits;

pub use mean_abs_dev::{mean_absolute_deviation, Centre, MeanAbsoluteDeviation};
pub use std_dev::{std_dev, StdDev};
pub use traits::{SpreadEstimator, SpreadEstimatorProperties};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        mean_absolute_deviation, std_dev, MeanAbsoluteDeviation, SpreadEstimator,
        SpreadEstimatorProperties, StdDev,
    };
}
