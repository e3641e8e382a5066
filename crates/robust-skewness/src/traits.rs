//! Core traits for skewness estimation

use crate::Result;
use robust_core::Numeric;
use tracing::trace;

/// Intrinsic properties of a skewness estimator that don't depend on the data
pub trait SkewnessEstimatorProperties {
    /// Name of the catalogue function this estimator implements
    fn name(&self) -> &str;

    /// Check if this estimator is insensitive to outliers in the tails
    fn is_robust(&self) -> bool;

    /// Closed range every finite estimate falls in, if the coefficient is bounded
    fn bounds(&self) -> Option<(f64, f64)>;
}

/// Skewness estimator over a one-dimensional sample
///
/// Missing values are ignored by every reduction the estimator performs.
/// Degenerate samples (constant, empty, all missing) yield NaN or ±inf
/// rather than an error; `Err` means a parameter of the estimator is
/// invalid.
pub trait SkewnessEstimator<T: Numeric = f64>: SkewnessEstimatorProperties {
    /// Estimate the skewness of raw (unsorted, possibly NaN-bearing) data
    fn estimate(&self, data: &[T]) -> Result<T>;
}

/// Divide, noting a zero denominator so NaN/inf results can be traced back
pub(crate) fn ratio<T: Numeric>(numerator: T, denominator: T, estimator: &str) -> T {
    if denominator == T::zero() {
        trace!(estimator, "zero denominator, result is not finite");
    }
    numerator / denominator
}
