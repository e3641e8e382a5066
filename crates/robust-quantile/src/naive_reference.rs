//! Naive reference implementations of the quantile estimators
//!
//! These implementations are intentionally simple and unoptimized.
//! They serve as a reference for verifying the correctness of the estimators
//! exported by this crate.
//!
//! DO NOT USE IN PRODUCTION - these are for testing and debugging only!

use statrs::distribution::{Beta, ContinuousCDF};

fn sorted_without_nan(data: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = data.iter().copied().filter(|x| !x.is_nan()).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    sorted
}

/// Naive linear interpolation quantile
///
/// Follows the textbook 1-based definition of the type 7 sample quantile:
/// `j = floor(n p + 1 - p)`, `g = n p + 1 - p - j`,
/// `Q = (1 - g) x[j] + g x[j + 1]`.
pub struct NaiveLinear;

impl NaiveLinear {
    pub fn quantile(data: &[f64], p: f64) -> f64 {
        assert!((0.0..=1.0).contains(&p), "Probability must be in [0, 1]");

        let sorted = sorted_without_nan(data);
        let n = sorted.len();
        if n == 0 {
            return f64::NAN;
        }

        let position = n as f64 * p + 1.0 - p;
        let j = position.floor() as usize;
        let g = position - j as f64;

        // 1-based order statistics, clamped at both ends
        let at = |k: usize| sorted[k.clamp(1, n) - 1];
        (1.0 - g) * at(j) + g * at(j + 1)
    }
}

/// Naive Harrell-Davis quantile estimator
///
/// This implementation:
/// - Computes every weight from scratch
/// - Evaluates both CDF bounds for each order statistic independently
pub struct NaiveHarrellDavis;

impl NaiveHarrellDavis {
    pub fn quantile(data: &[f64], p: f64) -> f64 {
        assert!((0.0..=1.0).contains(&p), "Probability must be in [0, 1]");

        let sorted = sorted_without_nan(data);
        let n = sorted.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 || p == 0.0 {
            return sorted[0];
        }
        if p == 1.0 {
            return sorted[n - 1];
        }

        let n_f = n as f64;
        let beta = Beta::new((n_f + 1.0) * p, (n_f + 1.0) * (1.0 - p)).unwrap();

        (0..n)
            .map(|j| {
                let w = beta.cdf((j + 1) as f64 / n_f) - beta.cdf(j as f64 / n_f);
                w * sorted[j]
            })
            .sum()
    }
}
