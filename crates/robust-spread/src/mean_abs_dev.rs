//! Mean absolute deviation
//!
//! The average distance of the sample from a centre: `mean(|x - c|)`.
//! About the median it is the spread term of the Medeen and Hossain-Adnan
//! skewness coefficients.

use crate::traits::{SpreadEstimator, SpreadEstimatorProperties};
use robust_core::utils::nan_mean;
use robust_core::{CentralTendencyEstimator, Numeric};
use robust_location::{Mean, Median};

/// Centre the deviations are measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Centre {
    #[default]
    Median,
    Mean,
}

/// Mean absolute deviation about the sample median or mean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeanAbsoluteDeviation {
    centre: Centre,
}

impl MeanAbsoluteDeviation {
    pub fn about_median() -> Self {
        Self { centre: Centre::Median }
    }

    pub fn about_mean() -> Self {
        Self { centre: Centre::Mean }
    }

    pub fn centre(&self) -> Centre {
        self.centre
    }
}

impl SpreadEstimatorProperties for MeanAbsoluteDeviation {
    fn name(&self) -> &str {
        match self.centre {
            Centre::Median => "Mean Absolute Deviation (median)",
            Centre::Mean => "Mean Absolute Deviation (mean)",
        }
    }

    fn is_robust(&self) -> bool {
        false
    }

    fn breakdown_point(&self) -> f64 {
        0.0
    }

    fn gaussian_efficiency(&self) -> f64 {
        // relative to the standard deviation under normality, 1 / (pi - 2)
        0.876
    }
}

impl<T: Numeric> SpreadEstimator<T> for MeanAbsoluteDeviation {
    fn estimate(&self, data: &[T]) -> T {
        let centre = match self.centre {
            Centre::Median => Median.estimate(data),
            Centre::Mean => Mean.estimate(data),
        };
        mean_absolute_deviation(data, centre)
    }
}

/// Mean of `|x - centre|` over the non-missing values of `data`
pub fn mean_absolute_deviation<T: Numeric>(data: &[T], centre: T) -> T {
    let deviations: Vec<T> = data.iter().map(|&x| (x - centre).abs()).collect();
    nan_mean(&deviations)
}
