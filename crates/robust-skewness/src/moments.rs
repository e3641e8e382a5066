//! Moment and mode based skewness coefficients
//!
//! Each coefficient is a difference of two centres divided by a spread:
//!
//! | Estimator | Formula |
//! |-----------|---------|
//! | [`PearsonMode`] | `(mean - mode) / std` |
//! | [`PearsonHalfMode`] | `(mean - hsm) / std` |
//! | [`BickelMode`] | `mean(sign(x - hsm))` |
//! | [`PearsonMedian`] | `3 (mean - median) / std` |
//! | [`Medeen`] | `(mean - median) / mean(abs(x - median))` |
//!
//! `std` is the population standard deviation and `hsm` the half-sample
//! mode. Every reduction ignores missing values on its own.

use crate::traits::{ratio, SkewnessEstimator, SkewnessEstimatorProperties};
use crate::Result;
use robust_core::math::sign;
use robust_core::utils::nan_mean;
use robust_core::{CentralTendencyEstimator, Numeric};
use robust_location::{FrequencyMode, HalfSampleMode, Mean, Median};
use robust_spread::{mean_absolute_deviation, SpreadEstimator, StdDev};

/// Pearson's first coefficient, `(mean - mode) / std`
///
/// The mode is the most frequent value. On continuous data without repeated
/// values that is the sample minimum, so prefer [`PearsonHalfMode`] there.
#[derive(Debug, Clone, Copy, Default)]
pub struct PearsonMode;

impl SkewnessEstimatorProperties for PearsonMode {
    fn name(&self) -> &str {
        "pearson_mode_skew"
    }

    fn is_robust(&self) -> bool {
        false
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        None
    }
}

impl<T: Numeric> SkewnessEstimator<T> for PearsonMode {
    fn estimate(&self, data: &[T]) -> Result<T> {
        let mean = Mean.estimate(data);
        let mode = FrequencyMode.estimate(data);
        let std = StdDev::population().estimate(data);
        Ok(ratio(mean - mode, std, "pearson_mode_skew"))
    }
}

/// Pearson's first coefficient with the half-sample mode, `(mean - hsm) / std`
#[derive(Debug, Clone, Copy, Default)]
pub struct PearsonHalfMode;

impl SkewnessEstimatorProperties for PearsonHalfMode {
    fn name(&self) -> &str {
        "pearson_halfmode_skew"
    }

    fn is_robust(&self) -> bool {
        false
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        None
    }
}

impl<T: Numeric> SkewnessEstimator<T> for PearsonHalfMode {
    fn estimate(&self, data: &[T]) -> Result<T> {
        let mean = Mean.estimate(data);
        let hsm = HalfSampleMode.estimate(data);
        let std = StdDev::population().estimate(data);
        Ok(ratio(mean - hsm, std, "pearson_halfmode_skew"))
    }
}

/// Bickel's mode skewness, the mean sign of `x - hsm`
///
/// Values equal to the half-sample mode contribute zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct BickelMode;

impl SkewnessEstimatorProperties for BickelMode {
    fn name(&self) -> &str {
        "bickel_mode_skew"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        Some((-1.0, 1.0))
    }
}

impl<T: Numeric> SkewnessEstimator<T> for BickelMode {
    fn estimate(&self, data: &[T]) -> Result<T> {
        let hsm = HalfSampleMode.estimate(data);
        let signs: Vec<T> = data.iter().map(|&x| sign(x - hsm)).collect();
        Ok(nan_mean(&signs))
    }
}

/// Pearson's second coefficient, `3 (mean - median) / std`
#[derive(Debug, Clone, Copy, Default)]
pub struct PearsonMedian;

impl SkewnessEstimatorProperties for PearsonMedian {
    fn name(&self) -> &str {
        "pearson_median_skew"
    }

    fn is_robust(&self) -> bool {
        false
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        // |mean - median| never exceeds the standard deviation
        Some((-3.0, 3.0))
    }
}

impl<T: Numeric> SkewnessEstimator<T> for PearsonMedian {
    fn estimate(&self, data: &[T]) -> Result<T> {
        let mean = Mean.estimate(data);
        let median = Median.estimate(data);
        let std = StdDev::population().estimate(data);
        Ok(ratio(T::from_usize(3) * (mean - median), std, "pearson_median_skew"))
    }
}

/// Medeen's coefficient, `(mean - median) / mean(abs(x - median))`
#[derive(Debug, Clone, Copy, Default)]
pub struct Medeen;

impl SkewnessEstimatorProperties for Medeen {
    fn name(&self) -> &str {
        "medeen_skew"
    }

    fn is_robust(&self) -> bool {
        false
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        Some((-1.0, 1.0))
    }
}

impl<T: Numeric> SkewnessEstimator<T> for Medeen {
    fn estimate(&self, data: &[T]) -> Result<T> {
        let mean = Mean.estimate(data);
        let median = Median.estimate(data);
        let spread = mean_absolute_deviation(data, median);
        Ok(ratio(mean - median, spread, "medeen_skew"))
    }
}

/// `(mean - mode) / std` with the most frequent value as the mode
pub fn pearson_mode_skew<T: Numeric>(data: &[T]) -> Result<T> {
    PearsonMode.estimate(data)
}

/// `(mean - hsm) / std` with the half-sample mode
pub fn pearson_halfmode_skew<T: Numeric>(data: &[T]) -> Result<T> {
    PearsonHalfMode.estimate(data)
}

/// Mean sign of the deviations from the half-sample mode, in `[-1, 1]`
pub fn bickel_mode_skew<T: Numeric>(data: &[T]) -> Result<T> {
    BickelMode.estimate(data)
}

/// `3 (mean - median) / std`
pub fn pearson_median_skew<T: Numeric>(data: &[T]) -> Result<T> {
    PearsonMedian.estimate(data)
}

/// `(mean - median) / mean(abs(x - median))`
pub fn medeen_skew<T: Numeric>(data: &[T]) -> Result<T> {
    Medeen.estimate(data)
}
