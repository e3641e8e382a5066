//! Core traits for spread estimation

use robust_core::Numeric;

/// Intrinsic properties of a spread estimator that don't depend on the data
pub trait SpreadEstimatorProperties {
    /// Get the name of this spread estimator
    fn name(&self) -> &str;

    /// Check if this estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// Get the asymptotic breakdown point (0.0 to 0.5)
    fn breakdown_point(&self) -> f64;

    /// Get the efficiency of this estimator relative to the standard deviation
    /// for normal distributions (0.0 to 1.0)
    fn gaussian_efficiency(&self) -> f64;
}

/// Spread/scale estimator
///
/// Missing values are ignored. A sample with nothing left in it, or too
/// little for the estimator, yields NaN; a constant sample yields zero.
/// Neither is an error, so callers dividing by a spread see NaN or ±inf.
pub trait SpreadEstimator<T: Numeric = f64>: SpreadEstimatorProperties {
    /// Estimate the spread of raw data
    fn estimate(&self, data: &[T]) -> T;
}
