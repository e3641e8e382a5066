//! Utility functions for working with samples that may contain missing values
//!
//! A missing value is a NaN. Each reducer discards NaNs independently, so
//! reducing `[1.0, NaN, 3.0]` behaves exactly like reducing `[1.0, 3.0]`.
//! Infinities are ordinary values and propagate through the arithmetic.

use crate::Numeric;
use std::cmp::Ordering;

/// Copy the non-missing values of `data`, preserving order
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::non_missing;
///
/// assert_eq!(non_missing(&[1.0, f64::NAN, 3.0]), vec![1.0, 3.0]);
/// ```
pub fn non_missing<T: Numeric>(data: &[T]) -> Vec<T> {
    data.iter().copied().filter(|x| !x.is_nan()).collect()
}

/// Sort the non-missing values of `data` in ascending order
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::sorted_non_missing;
///
/// let data = vec![3.0, 1.0, f64::NAN, 5.0, 2.0, 4.0];
/// assert_eq!(sorted_non_missing(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted_non_missing<T: Numeric>(data: &[T]) -> Vec<T> {
    let mut sorted = non_missing(data);
    sort_ascending(&mut sorted);
    sorted
}

/// Sort NaN-free data in place
///
/// NaNs compare equal to everything, so callers are expected to filter first.
pub fn sort_ascending<T: Numeric>(data: &mut [T]) {
    data.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
}

/// Sum of the non-missing values; an empty or all-missing slice sums to zero
pub fn nan_sum<T: Numeric>(data: &[T]) -> T {
    data.iter()
        .copied()
        .filter(|x| !x.is_nan())
        .fold(T::zero(), |acc, x| acc + x)
}

/// Mean of the non-missing values
///
/// Returns NaN when nothing is left after discarding missing values.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::nan_mean;
///
/// assert_eq!(nan_mean(&[1.0, 2.0, f64::NAN, 3.0]), 2.0);
/// assert!(nan_mean::<f64>(&[]).is_nan());
/// ```
pub fn nan_mean<T: Numeric>(data: &[T]) -> T {
    let (sum, count) = data
        .iter()
        .copied()
        .filter(|x| !x.is_nan())
        .fold((T::zero(), 0usize), |(sum, count), x| (sum + x, count + 1));
    if count == 0 {
        return T::nan();
    }
    sum / T::from_usize(count)
}

/// Smallest non-missing value, NaN if there is none
pub fn nan_min<T: Numeric>(data: &[T]) -> T {
    data.iter()
        .copied()
        .filter(|x| !x.is_nan())
        .fold(None, |acc: Option<T>, x| Some(acc.map_or(x, |m| m.min(x))))
        .unwrap_or_else(T::nan)
}

/// Largest non-missing value, NaN if there is none
pub fn nan_max<T: Numeric>(data: &[T]) -> T {
    data.iter()
        .copied()
        .filter(|x| !x.is_nan())
        .fold(None, |acc: Option<T>, x| Some(acc.map_or(x, |m| m.max(x))))
        .unwrap_or_else(T::nan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_basic() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        assert_eq!(sorted_non_missing(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_sorted_empty() {
        let data: Vec<f64> = vec![];
        assert_eq!(sorted_non_missing(&data), Vec::<f64>::new());
    }

    #[test]
    fn test_sorted_drops_nan() {
        let data = vec![f64::NAN, 3.0, f64::NAN, 1.0, 2.0];
        assert_eq!(sorted_non_missing(&data), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sorted_with_infinity() {
        let data = vec![3.0, f64::INFINITY, 1.0, f64::NEG_INFINITY, 2.0];
        assert_eq!(
            sorted_non_missing(&data),
            vec![f64::NEG_INFINITY, 1.0, 2.0, 3.0, f64::INFINITY]
        );
    }

    #[test]
    fn test_sorted_preserves_original() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        let original = data.clone();
        let _ = sorted_non_missing(&data);
        assert_eq!(data, original);
    }

    #[test]
    fn test_nan_sum() {
        assert_eq!(nan_sum(&[1.0, f64::NAN, 2.5]), 3.5);
        assert_eq!(nan_sum::<f64>(&[]), 0.0);
        assert_eq!(nan_sum(&[f64::NAN, f64::NAN]), 0.0);
    }

    #[test]
    fn test_nan_mean() {
        assert_eq!(nan_mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(nan_mean(&[f64::NAN, -10.0, 10.0]), 0.0);
        assert!(nan_mean(&[f64::NAN]).is_nan());
        assert_eq!(nan_mean(&[1.0_f32, 2.0, f32::NAN]), 1.5_f32);
    }

    #[test]
    fn test_nan_mean_infinity_propagates() {
        assert_eq!(nan_mean(&[1.0, f64::INFINITY]), f64::INFINITY);
    }

    #[test]
    fn test_nan_min_max() {
        let data = [4.0, f64::NAN, -1.0, 7.5];
        assert_eq!(nan_min(&data), -1.0);
        assert_eq!(nan_max(&data), 7.5);
        assert!(nan_min::<f64>(&[]).is_nan());
        assert!(nan_max(&[f64::NAN]).is_nan());
    }

    #[test]
    fn test_nan_min_leading_nan() {
        // f64::min would otherwise swallow a leading NaN accumulator
        assert_eq!(nan_min(&[f64::NAN, 2.0, 1.0]), 1.0);
        assert_eq!(nan_max(&[f64::NAN, 2.0, 1.0]), 2.0);
    }
}
