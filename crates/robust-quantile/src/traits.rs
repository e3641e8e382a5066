//! Core traits for quantile estimation

use crate::Result;
use robust_core::utils::sorted_non_missing;
use robust_core::{CentralTendencyEstimator, Numeric};

/// Main trait for quantile estimation
///
/// This extends `CentralTendencyEstimator` since median (p=0.5) is a
/// measure of central tendency.
///
/// Missing values (NaN) never take part in a quantile: the unsorted entry
/// points drop them before sorting, and the `_sorted` entry points expect
/// data that has already been cleaned. Empty data yields NaN.
pub trait QuantileEstimator<T: Numeric = f64>: CentralTendencyEstimator<T> {
    /// Estimate a single quantile of raw (unsorted, possibly NaN-bearing) data
    ///
    /// # Arguments
    /// * `data` - The data sample; it is copied, not reordered
    /// * `p` - The probability (0.0 to 1.0)
    fn quantile(&self, data: &[T], p: f64) -> Result<T> {
        let sorted = sorted_non_missing(data);
        self.quantile_sorted(&sorted, p)
    }

    /// Estimate a single quantile from sorted, NaN-free data
    fn quantile_sorted(&self, sorted_data: &[T], p: f64) -> Result<T>;

    /// Estimate multiple quantiles of raw data with a single sort
    fn quantiles(&self, data: &[T], ps: &[f64]) -> Result<Vec<T>> {
        let sorted = sorted_non_missing(data);
        self.quantiles_sorted(&sorted, ps)
    }

    /// Estimate multiple quantiles from sorted, NaN-free data
    fn quantiles_sorted(&self, sorted_data: &[T], ps: &[f64]) -> Result<Vec<T>> {
        ps.iter()
            .map(|&p| self.quantile_sorted(sorted_data, p))
            .collect()
    }
}
