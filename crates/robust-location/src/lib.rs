//! Location estimators
//!
//! The centres that moment and mode based skewness coefficients measure
//! against:
//!
//! - [`Mean`]: arithmetic mean
//! - [`Median`]: the linear-interpolation sample median
//! - [`FrequencyMode`]: most frequent value
//! - [`HalfSampleMode`]: Bickel-Frühwirth half-sample mode
//! - [`midrange`], [`midhinge`], [`trimean`]: order statistic summaries
//!
//! Every estimator ignores missing (NaN) values and yields NaN for a sample
//! with nothing left in it.
//!
//! # Example
//!
//! ```rust
//! use robust_location::{half_sample_mode, mean, median, mode};
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 10.0];
//! assert_eq!(mean(&data), 4.0);
//! assert_eq!(median(&data), 3.0);
//! assert_eq!(mode(&data), 1.0);
//! assert_eq!(half_sample_mode(&data), 2.0);
//! ```

mod mean;
mod midpoints;
mod mode;

pub use mean::{mean, Mean};
pub use midpoints::{midhinge, midrange, trimean};
pub use mode::{half_sample_mode, mode, FrequencyMode, HalfSampleMode};

/// The sample median is the 0.5 linear-interpolation quantile
pub use robust_quantile::Linear as Median;

use robust_core::{CentralTendencyEstimator, Numeric};

/// Median of the non-missing values of `data`, NaN when there are none
pub fn median<T: Numeric>(data: &[T]) -> T {
    Median.estimate(data)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        half_sample_mode, mean, median, midhinge, midrange, mode, trimean, FrequencyMode,
        HalfSampleMode, Mean, Median,
    };
}
