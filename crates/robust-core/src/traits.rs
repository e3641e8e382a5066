//! Core traits for robust statistical estimation
//!
//! Algorithm-specific traits (like `QuantileEstimator`, `SpreadEstimator` or
//! `SkewnessEstimator`) are defined in their respective crates.

use crate::utils::sorted_non_missing;
use crate::Numeric;

/// Base trait for all central tendency estimators
///
/// Implementations include the mean, the median and mode estimators.
///
/// # API Convention
///
/// - [`estimate`](Self::estimate) accepts raw data, discards missing values
///   and sorts a private copy
/// - [`estimate_sorted`](Self::estimate_sorted) requires data that is already
///   sorted and free of missing values
///
/// An empty sample yields NaN.
///
/// # Example
///
/// ```rust
/// use robust_core::{CentralTendencyEstimator, Numeric};
///
/// #[derive(Clone)]
/// struct Midpoint;
///
/// impl<T: Numeric> CentralTendencyEstimator<T> for Midpoint {
///     fn estimate_sorted(&self, sorted_data: &[T]) -> T {
///         match (sorted_data.first(), sorted_data.last()) {
///             (Some(&lo), Some(&hi)) => (lo + hi) / T::from_usize(2),
///             _ => T::nan(),
///         }
///     }
///
///     fn name(&self) -> &str { "Midpoint" }
///     fn is_robust(&self) -> bool { false }
///     fn breakdown_point(&self) -> f64 { 0.0 }
/// }
///
/// assert_eq!(Midpoint.estimate(&[3.0, f64::NAN, 1.0]), 2.0);
/// ```
pub trait CentralTendencyEstimator<T: Numeric = f64>: Send + Sync + Clone {
    /// Estimate the central tendency of a sample, ignoring missing values
    fn estimate(&self, data: &[T]) -> T {
        let sorted = sorted_non_missing(data);
        self.estimate_sorted(&sorted)
    }

    /// Estimate the central tendency from sorted, NaN-free data
    fn estimate_sorted(&self, sorted_data: &[T]) -> T;

    /// Human-readable name of the estimator
    fn name(&self) -> &str;

    /// Whether this estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// The breakdown point (fraction of contamination the estimator can handle)
    /// - 0.0 for non-robust estimators (e.g., mean)
    /// - 0.5 for maximally robust estimators (e.g., median)
    fn breakdown_point(&self) -> f64;
}
