//! Location summaries built from a few order statistics
//!
//! - [`midrange`]: average of the extremes
//! - [`midhinge`]: average of the quartiles
//! - [`trimean`]: Tukey's weighted average of the quartiles and the median
//!
//! The quartile based summaries take the quantile estimator as a parameter;
//! [`Linear`](robust_quantile::Linear) gives the usual textbook values.

use robust_core::utils::{nan_max, nan_min};
use robust_core::Numeric;
use robust_quantile::{QuantileEstimator, Result};

/// Average of the smallest and largest non-missing values
pub fn midrange<T: Numeric>(data: &[T]) -> T {
    (nan_min(data) + nan_max(data)) / T::from_usize(2)
}

/// Average of the lower and upper quartiles
pub fn midhinge<T, Q>(data: &[T], estimator: &Q) -> Result<T>
where
    T: Numeric,
    Q: QuantileEstimator<T>,
{
    let q = estimator.quantiles(data, &[0.25, 0.75])?;
    Ok((q[0] + q[1]) / T::from_usize(2))
}

/// Tukey's trimean, `(Q1 + 2 Q2 + Q3) / 4`
pub fn trimean<T, Q>(data: &[T], estimator: &Q) -> Result<T>
where
    T: Numeric,
    Q: QuantileEstimator<T>,
{
    let q = estimator.quantiles(data, &[0.25, 0.5, 0.75])?;
    Ok((q[0] + T::from_usize(2) * q[1] + q[2]) / T::from_usize(4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use robust_quantile::{HarrellDavis, Linear};

    const SAMPLE: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 10.0];

    #[test]
    fn test_midrange() {
        assert_eq!(midrange(&SAMPLE), 5.5);
        assert_eq!(midrange(&[f64::NAN, -1.0, 3.0]), 1.0);
        assert!(midrange::<f64>(&[]).is_nan());
    }

    #[test]
    fn test_midhinge_and_trimean() {
        // quartiles 2, 3, 4
        assert_eq!(midhinge(&SAMPLE, &Linear).unwrap(), 3.0);
        assert_eq!(trimean(&SAMPLE, &Linear).unwrap(), 3.0);

        let data = [1.0, 2.0, 3.0, 10.0, 11.0];
        // quartiles 2, 3, 10
        assert_eq!(midhinge(&data, &Linear).unwrap(), 6.0);
        assert_eq!(trimean(&data, &Linear).unwrap(), 4.5);
    }

    #[test]
    fn test_symmetric_sample_centres_agree() {
        let data: Vec<f64> = (-10..=10).map(f64::from).collect();
        assert_eq!(midrange(&data), 0.0);
        assert_eq!(midhinge(&data, &Linear).unwrap(), 0.0);
        assert!(trimean(&data, &HarrellDavis).unwrap().abs() < 1e-9);
    }

    #[test]
    fn test_empty_is_nan() {
        let empty: Vec<f64> = vec![];
        assert!(midhinge(&empty, &Linear).unwrap().is_nan());
        assert!(trimean(&empty, &Linear).unwrap().is_nan());
    }
}
