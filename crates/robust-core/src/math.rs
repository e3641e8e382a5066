//! Numerical helpers shared by the estimators
//!
//! Evenly spaced grids, "min" tie ranking, the sign function and the
//! trapezoidal rule. All helpers are NaN aware in the same way as the
//! reducers in [`crate::utils`].

use crate::utils::sorted_non_missing;
use crate::{Error, Numeric, Result};

/// `num` evenly spaced points over the closed interval `[start, stop]`
///
/// The last point is exactly `stop`. `num == 0` yields an empty grid and
/// `num == 1` yields `[start]`.
///
/// # Examples
///
/// ```rust
/// use robust_core::math::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
/// assert!(linspace(0.0, 1.0, 0).is_empty());
/// ```
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num)
                .map(|i| if i == num - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Sign of `x`: -1, 0 or +1, NaN for NaN
///
/// Unlike [`f64::signum`], zero maps to zero.
#[inline]
pub fn sign<T: Numeric>(x: T) -> T {
    if x.is_nan() {
        T::nan()
    } else if x > T::zero() {
        T::one()
    } else if x < T::zero() {
        -T::one()
    } else {
        T::zero()
    }
}

/// Rank `data` giving tied values the minimum rank of their group
///
/// Ranks start at 1. Missing values are excluded from consideration and
/// receive a NaN rank, so `[2.0, NaN, 1.0, 2.0]` ranks as `[2, NaN, 1, 2]`.
///
/// # Examples
///
/// ```rust
/// use robust_core::math::rank_min;
///
/// let ranks = rank_min(&[10.0, 20.0, 10.0, 5.0]);
/// assert_eq!(ranks, vec![2.0, 4.0, 2.0, 1.0]);
/// ```
pub fn rank_min<T: Numeric>(data: &[T]) -> Vec<T> {
    let sorted = sorted_non_missing(data);
    data.iter()
        .map(|&x| {
            if x.is_nan() {
                T::nan()
            } else {
                let below = sorted.partition_point(|&v| v < x);
                T::from_usize(below + 1)
            }
        })
        .collect()
}

/// Integrate samples taken at uniform spacing `dx` with the trapezoidal rule
///
/// Fewer than two samples integrate to zero. NaN samples propagate into the
/// result.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] when `dx` is negative or not finite.
pub fn trapezoid<T: Numeric>(y: &[T], dx: f64) -> Result<T> {
    if !dx.is_finite() || dx < 0.0 {
        return Err(Error::invalid_step(dx));
    }
    if y.len() < 2 {
        return Ok(T::zero());
    }

    let two = T::from_usize(2);
    let area = y
        .windows(2)
        .map(|pair| (pair[0] + pair[1]) / two)
        .fold(T::zero(), |acc, v| acc + v);
    Ok(area * T::from_f64(dx))
}
