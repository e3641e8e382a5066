//! Harrell-Davis quantile estimator
//!
//! The estimate is a weighted sum of all order statistics, with weights
//! given by increments of the Beta((n+1)p, (n+1)(1-p)) CDF over the grid
//! `j / n`. It is smooth in `p` and less sensitive to individual order
//! statistics than linear interpolation.

use crate::{Error, QuantileEstimator, Result};
use robust_core::{CentralTendencyEstimator, Numeric};
use statrs::distribution::{Beta, ContinuousCDF};
use tracing::trace;

/// Harrell-Davis quantile estimator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarrellDavis;

/// Convenience constructor for the Harrell-Davis estimator
pub fn harrell_davis() -> HarrellDavis {
    HarrellDavis
}

impl<T: Numeric> QuantileEstimator<T> for HarrellDavis {
    fn quantile_sorted(&self, sorted_data: &[T], p: f64) -> Result<T> {
        Error::check_probability(p)?;

        let n = sorted_data.len();
        match n {
            0 => return Ok(T::nan()),
            1 => return Ok(sorted_data[0]),
            _ => {}
        }
        if p == 0.0 {
            return Ok(sorted_data[0]);
        }
        if p == 1.0 {
            return Ok(sorted_data[n - 1]);
        }

        let n_f = n as f64;
        let alpha = (n_f + 1.0) * p;
        let beta = (n_f + 1.0) * (1.0 - p);
        let dist = Beta::new(alpha, beta)
            .map_err(|e| Error::Numerical(format!("Beta({alpha}, {beta}): {e}")))?;
        trace!(n, p, alpha, beta, "harrell-davis weights");

        let mut estimate = 0.0;
        let mut cdf_right = 0.0;
        for (j, &x) in sorted_data.iter().enumerate() {
            let cdf_left = cdf_right;
            cdf_right = dist.cdf((j + 1) as f64 / n_f);
            estimate += (cdf_right - cdf_left) * x.as_f64();
        }

        Ok(T::from_f64(estimate))
    }
}

impl<T: Numeric> CentralTendencyEstimator<T> for HarrellDavis {
    fn estimate_sorted(&self, sorted_data: &[T]) -> T {
        self.quantile_sorted(sorted_data, 0.5)
            .unwrap_or_else(|_| T::nan())
    }

    fn name(&self) -> &str {
        "Harrell-Davis Median"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        // every order statistic carries some weight
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_harrell_davis_median() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let median = HarrellDavis.quantile_sorted(&data, 0.5).unwrap();
        assert_relative_eq!(median, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_harrell_davis_quartiles() {
        let data: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let quartiles = HarrellDavis
            .quantiles_sorted(&data, &[0.25, 0.5, 0.75])
            .unwrap();

        assert_eq!(quartiles.len(), 3);
        assert!(quartiles[0] < quartiles[1]);
        assert!(quartiles[1] < quartiles[2]);
        // symmetric data, symmetric quartiles
        assert_relative_eq!(quartiles[0] + quartiles[2], 2.0 * quartiles[1], epsilon = 1e-9);
    }

    #[test]
    fn test_extremes_and_degenerate() {
        let data = vec![2.0, 4.0, 9.0];
        assert_eq!(HarrellDavis.quantile_sorted(&data, 0.0).unwrap(), 2.0);
        assert_eq!(HarrellDavis.quantile_sorted(&data, 1.0).unwrap(), 9.0);
        assert_eq!(HarrellDavis.quantile_sorted(&[6.0], 0.3).unwrap(), 6.0);
        let empty: Vec<f64> = vec![];
        assert!(HarrellDavis.quantile_sorted(&empty, 0.3).unwrap().is_nan());
    }

    #[test]
    fn test_constant_sample() {
        let data = vec![4.0; 8];
        assert_relative_eq!(HarrellDavis.quantile_sorted(&data, 0.3).unwrap(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_probability() {
        assert!(HarrellDavis.quantile(&[1.0, 2.0], -0.5).is_err());
    }

    #[test]
    fn test_outlier_pull_is_limited() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 1000.0];
        let median = HarrellDavis.quantile(&data, 0.5).unwrap();
        // the outlier keeps a small Beta weight, far less than its share of the mean
        assert!(median > 3.0 && median < 50.0);
    }
}
