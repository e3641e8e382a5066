//! Standard deviation
//!
//! The population convention (divisor `n`) is the default, matching the
//! moment-based skewness literature. The sample convention (divisor `n - 1`)
//! is available through [`StdDev::sample`].

use crate::traits::{SpreadEstimator, SpreadEstimatorProperties};
use robust_core::utils::{nan_mean, non_missing};
use robust_core::Numeric;

/// Standard deviation with a configurable delta degrees of freedom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StdDev {
    ddof: usize,
}

impl StdDev {
    /// Population standard deviation (divisor `n`)
    pub fn population() -> Self {
        Self { ddof: 0 }
    }

    /// Sample standard deviation (divisor `n - 1`)
    pub fn sample() -> Self {
        Self { ddof: 1 }
    }

    /// Delta degrees of freedom subtracted from `n` in the divisor
    pub fn ddof(&self) -> usize {
        self.ddof
    }
}

impl Default for StdDev {
    fn default() -> Self {
        Self::population()
    }
}

impl SpreadEstimatorProperties for StdDev {
    fn name(&self) -> &str {
        if self.ddof == 0 {
            "Population Std Dev"
        } else {
            "Sample Std Dev"
        }
    }

    fn is_robust(&self) -> bool {
        false
    }

    fn breakdown_point(&self) -> f64 {
        0.0
    }

    fn gaussian_efficiency(&self) -> f64 {
        1.0
    }
}

impl<T: Numeric> SpreadEstimator<T> for StdDev {
    fn estimate(&self, data: &[T]) -> T {
        let values = non_missing(data);
        if values.len() <= self.ddof {
            return T::nan();
        }

        let mean = nan_mean(&values);
        let sum_sq: T = values.iter().map(|&x| (x - mean) * (x - mean)).sum();
        (sum_sq / T::from_usize(values.len() - self.ddof)).sqrt()
    }
}

/// Population standard deviation of the non-missing values of `data`
pub fn std_dev<T: Numeric>(data: &[T]) -> T {
    StdDev::population().estimate(data)
}
