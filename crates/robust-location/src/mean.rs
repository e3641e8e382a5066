//! Arithmetic mean

use robust_core::utils::nan_mean;
use robust_core::{CentralTendencyEstimator, Numeric};

/// Arithmetic mean of the non-missing values
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl<T: Numeric> CentralTendencyEstimator<T> for Mean {
    // the mean does not need sorted data
    fn estimate(&self, data: &[T]) -> T {
        nan_mean(data)
    }

    fn estimate_sorted(&self, sorted_data: &[T]) -> T {
        nan_mean(sorted_data)
    }

    fn name(&self) -> &str {
        "Mean"
    }

    fn is_robust(&self) -> bool {
        false
    }

    fn breakdown_point(&self) -> f64 {
        0.0
    }
}

/// Mean of the non-missing values of `data`, NaN when there are none
pub fn mean<T: Numeric>(data: &[T]) -> T {
    Mean.estimate(data)
}
