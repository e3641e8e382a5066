//! Quantile based skewness coefficients
//!
//! These compare the distances from the median to a pair of symmetric
//! quantiles, so they ignore everything beyond the outer quantile pair.
//!
//! - [`Bowley`]: quartile skewness `(Q3 + Q1 - 2 Q2) / (Q3 - Q1)`
//! - [`Groeneveld`]: the same numerator over the larger of the two half ranges
//! - [`Kelly`]: decile skewness `(D9 + D1 - 2 D5) / (D9 - D1)`
//! - [`HossainAdnan`]: `mean(x - median) / mean(abs(x - median))`
//!
//! The estimators are generic over the quantile estimator; the free
//! functions use linear interpolation.

use crate::traits::{ratio, SkewnessEstimator, SkewnessEstimatorProperties};
use crate::Result;
use robust_core::utils::nan_mean;
use robust_core::Numeric;
use robust_quantile::{Linear, QuantileEstimator};

/// `(high + low - 2 mid) / (high - low)`
fn quantile_skewness<T: Numeric>(low: T, mid: T, high: T, estimator: &str) -> T {
    ratio(high + low - T::from_usize(2) * mid, high - low, estimator)
}

/// Bowley's quartile skewness
#[derive(Debug, Clone, Copy, Default)]
pub struct Bowley<Q = Linear> {
    estimator: Q,
}

impl<Q> Bowley<Q> {
    pub fn new(estimator: Q) -> Self {
        Self { estimator }
    }
}

impl<Q> SkewnessEstimatorProperties for Bowley<Q> {
    fn name(&self) -> &str {
        "bowley_skew"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        Some((-1.0, 1.0))
    }
}

impl<T: Numeric, Q: QuantileEstimator<T>> SkewnessEstimator<T> for Bowley<Q> {
    fn estimate(&self, data: &[T]) -> Result<T> {
        let q = self.estimator.quantiles(data, &[0.25, 0.5, 0.75])?;
        Ok(quantile_skewness(q[0], q[1], q[2], "bowley_skew"))
    }
}

/// Groeneveld's quartile skewness
///
/// Divides the quartile numerator by each half range in turn and keeps the
/// ratio of larger magnitude, the right-hand one on ties. The result is not
/// bounded above and its sign can differ from the other coefficients.
#[derive(Debug, Clone, Copy, Default)]
pub struct Groeneveld<Q = Linear> {
    estimator: Q,
}

impl<Q> Groeneveld<Q> {
    pub fn new(estimator: Q) -> Self {
        Self { estimator }
    }
}

impl<Q> SkewnessEstimatorProperties for Groeneveld<Q> {
    fn name(&self) -> &str {
        "groeneveld_skew"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        None
    }
}

impl<T: Numeric, Q: QuantileEstimator<T>> SkewnessEstimator<T> for Groeneveld<Q> {
    fn estimate(&self, data: &[T]) -> Result<T> {
        let q = self.estimator.quantiles(data, &[0.25, 0.5, 0.75])?;
        Ok(groeneveld_from_quartiles(q[0], q[1], q[2]))
    }
}

pub(crate) fn groeneveld_from_quartiles<T: Numeric>(q1: T, q2: T, q3: T) -> T {
    let numerator = q3 + q1 - T::from_usize(2) * q2;
    let right = ratio(numerator, q2 - q1, "groeneveld_skew");
    let left = ratio(numerator, q3 - q2, "groeneveld_skew");
    if right.abs() >= left.abs() {
        right
    } else {
        left
    }
}

/// Kelly's decile skewness
#[derive(Debug, Clone, Copy, Default)]
pub struct Kelly<Q = Linear> {
    estimator: Q,
}

impl<Q> Kelly<Q> {
    pub fn new(estimator: Q) -> Self {
        Self { estimator }
    }
}

impl<Q> SkewnessEstimatorProperties for Kelly<Q> {
    fn name(&self) -> &str {
        "kelly_skew"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        Some((-1.0, 1.0))
    }
}

impl<T: Numeric, Q: QuantileEstimator<T>> SkewnessEstimator<T> for Kelly<Q> {
    fn estimate(&self, data: &[T]) -> Result<T> {
        let d = self.estimator.quantiles(data, &[0.1, 0.5, 0.9])?;
        Ok(quantile_skewness(d[0], d[1], d[2], "kelly_skew"))
    }
}

/// Hossain and Adnan's median skewness
///
/// The mean signed deviation from the median over the mean absolute
/// deviation from the median.
#[derive(Debug, Clone, Copy, Default)]
pub struct HossainAdnan<Q = Linear> {
    estimator: Q,
}

impl<Q> HossainAdnan<Q> {
    pub fn new(estimator: Q) -> Self {
        Self { estimator }
    }
}

impl<Q> SkewnessEstimatorProperties for HossainAdnan<Q> {
    fn name(&self) -> &str {
        "hossain_adnan_skew"
    }

    fn is_robust(&self) -> bool {
        false
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        Some((-1.0, 1.0))
    }
}

impl<T: Numeric, Q: QuantileEstimator<T>> SkewnessEstimator<T> for HossainAdnan<Q> {
    fn estimate(&self, data: &[T]) -> Result<T> {
        let median = self.estimator.quantile(data, 0.5)?;
        let signed: Vec<T> = data.iter().map(|&x| x - median).collect();
        let absolute: Vec<T> = signed.iter().map(|d| d.abs()).collect();
        Ok(ratio(nan_mean(&signed), nan_mean(&absolute), "hossain_adnan_skew"))
    }
}

/// Bowley's quartile skewness with linearly interpolated quartiles
pub fn bowley_skew<T: Numeric>(data: &[T]) -> Result<T> {
    Bowley::<Linear>::default().estimate(data)
}

/// Groeneveld's quartile skewness with linearly interpolated quartiles
pub fn groeneveld_skew<T: Numeric>(data: &[T]) -> Result<T> {
    Groeneveld::<Linear>::default().estimate(data)
}

/// Kelly's decile skewness with linearly interpolated deciles
pub fn kelly_skew<T: Numeric>(data: &[T]) -> Result<T> {
    Kelly::<Linear>::default().estimate(data)
}

/// Hossain-Adnan skewness about the linearly interpolated median
pub fn hossain_adnan_skew<T: Numeric>(data: &[T]) -> Result<T> {
    HossainAdnan::<Linear>::default().estimate(data)
}
