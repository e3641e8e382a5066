//! Mode estimators
//!
//! Two estimators of the most probable value:
//!
//! - [`FrequencyMode`]: the most frequent value. Exact on discrete data, but
//!   on continuous data with no repeated values every value is "most
//!   frequent" and the smallest one is returned.
//! - [`HalfSampleMode`]: the Bickel-Frühwirth half-sample mode, which
//!   repeatedly shrinks to the densest half of the data and is stable on
//!   continuous data.

use robust_core::utils::sorted_non_missing;
use robust_core::{CentralTendencyEstimator, Numeric};
use tracing::trace;

/// Most frequent value, ties broken toward the smallest value
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyMode;

impl<T: Numeric> CentralTendencyEstimator<T> for FrequencyMode {
    fn estimate_sorted(&self, sorted_data: &[T]) -> T {
        let mut best = match sorted_data.first() {
            Some(&first) => first,
            None => return T::nan(),
        };
        let mut best_count = 0usize;

        let mut run_start = 0usize;
        for i in 1..=sorted_data.len() {
            if i == sorted_data.len() || sorted_data[i] != sorted_data[run_start] {
                let count = i - run_start;
                // strict comparison keeps the earliest (smallest) value on ties
                if count > best_count {
                    best_count = count;
                    best = sorted_data[run_start];
                }
                run_start = i;
            }
        }

        best
    }

    fn name(&self) -> &str {
        "Frequency Mode"
    }

    fn is_robust(&self) -> bool {
        false
    }

    fn breakdown_point(&self) -> f64 {
        0.0
    }
}

/// Half-sample mode (Bickel & Frühwirth, 2006)
///
/// Only finite values take part: missing values and infinities are dropped.
/// While at least four values remain, the window of `ceil(n / 2)`
/// consecutive sorted values with the smallest range is kept (the first such
/// window on ties); a zero-range window ends the search at its first value.
/// Three values resolve to the mean of the closer pair (the middle value if
/// both gaps are equal), one or two values to their mean.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalfSampleMode;

impl<T: Numeric> CentralTendencyEstimator<T> for HalfSampleMode {
    fn estimate(&self, data: &[T]) -> T {
        let sorted = sorted_non_missing(data);
        self.estimate_sorted(&sorted)
    }

    fn estimate_sorted(&self, sorted_data: &[T]) -> T {
        // infinities sit at the ends of sorted data
        let start = sorted_data.partition_point(|x| x.is_infinite() && x.is_sign_negative());
        let end = sorted_data.partition_point(|x| !(x.is_infinite() && x.is_sign_positive()));
        if start >= end {
            return T::nan();
        }
        half_sample_mode_sorted(&sorted_data[start..end])
    }

    fn name(&self) -> &str {
        "Half-Sample Mode"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}

fn half_sample_mode_sorted<T: Numeric>(mut y: &[T]) -> T {
    while y.len() >= 4 {
        let window = (y.len() + 1) / 2;

        let mut best = 0usize;
        let mut best_width = y[window - 1] - y[0];
        for i in 1..=(y.len() - window) {
            let width = y[i + window - 1] - y[i];
            if width < best_width {
                best = i;
                best_width = width;
            }
        }
        trace!(len = y.len(), window, start = best, "half-sample mode window");

        if best_width == T::zero() {
            return y[best];
        }
        y = &y[best..best + window];
    }

    let two = T::from_usize(2);
    match *y {
        [] => T::nan(),
        [a] => a,
        [a, b] => (a + b) / two,
        [a, b, c] => {
            let lower_gap = b - a;
            let upper_gap = c - b;
            if lower_gap < upper_gap {
                (a + b) / two
            } else if lower_gap > upper_gap {
                (b + c) / two
            } else {
                b
            }
        }
        _ => unreachable!("loop leaves at most three values"),
    }
}

/// Most frequent non-missing value of `data`
pub fn mode<T: Numeric>(data: &[T]) -> T {
    FrequencyMode.estimate(data)
}

/// Half-sample mode of the finite values of `data`
///
/// # Examples
///
/// ```rust
/// use robust_location::half_sample_mode;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 10.0];
/// assert_eq!(half_sample_mode(&data), 2.0);
/// ```
pub fn half_sample_mode<T: Numeric>(data: &[T]) -> T {
    HalfSampleMode.estimate(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_mode_basic() {
        assert_eq!(mode(&[3.0, 1.0, 3.0, 2.0, 3.0, 1.0]), 3.0);
    }

    #[test]
    fn test_frequency_mode_ties_pick_smallest() {
        assert_eq!(mode(&[5.0, 2.0, 5.0, 2.0, 9.0]), 2.0);
        // all distinct: every value ties, the minimum wins
        assert_eq!(mode(&[4.0, -1.0, 7.0]), -1.0);
    }

    #[test]
    fn test_frequency_mode_ignores_missing() {
        assert_eq!(mode(&[f64::NAN, f64::NAN, f64::NAN, 1.0, 2.0, 2.0]), 2.0);
        assert!(mode(&[f64::NAN]).is_nan());
        assert!(mode::<f64>(&[]).is_nan());
    }

    #[test]
    fn test_hsm_small_samples() {
        assert!(half_sample_mode::<f64>(&[]).is_nan());
        assert_eq!(half_sample_mode(&[4.0]), 4.0);
        assert_eq!(half_sample_mode(&[1.0, 3.0]), 2.0);
    }

    #[test]
    fn test_hsm_three_values() {
        assert_eq!(half_sample_mode(&[1.0, 2.0, 10.0]), 1.5);
        assert_eq!(half_sample_mode(&[1.0, 9.0, 10.0]), 9.5);
        assert_eq!(half_sample_mode(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn test_hsm_right_skewed() {
        // windows of 3: [1,2,3] and [2,3,4] both span 2, the first is kept
        assert_eq!(half_sample_mode(&[10.0, 1.0, 4.0, 3.0, 2.0]), 2.0);
    }

    #[test]
    fn test_hsm_zero_width_window() {
        assert_eq!(half_sample_mode(&[1.0, 5.0, 5.0, 5.0, 9.0, 20.0]), 5.0);
    }

    #[test]
    fn test_hsm_symmetric_with_centre() {
        assert_eq!(half_sample_mode(&[-2.0, -1.0, 0.0, 0.0, 1.0, 2.0]), 0.0);
    }

    #[test]
    fn test_hsm_dense_cluster() {
        let mut data = vec![0.0, 0.5, 20.0, 30.0, 40.0];
        data.extend([10.0, 10.1, 10.2, 10.3, 10.4]);
        let hsm = half_sample_mode(&data);
        assert!(hsm >= 10.0 && hsm <= 10.4);
    }

    #[test]
    fn test_hsm_drops_non_finite() {
        let data = [f64::NEG_INFINITY, 1.0, f64::NAN, 2.0, 10.0, f64::INFINITY];
        assert_eq!(half_sample_mode(&data), 1.5);
        assert!(half_sample_mode(&[f64::INFINITY, f64::NAN]).is_nan());
    }

    #[test]
    fn test_estimator_properties() {
        assert!(CentralTendencyEstimator::<f64>::is_robust(&HalfSampleMode));
        assert_eq!(CentralTendencyEstimator::<f64>::name(&FrequencyMode), "Frequency Mode");
    }
}
