//! Linear interpolation sample quantile (Hyndman-Fan type 7)
//!
//! For `n` sorted values the quantile at `p` sits at fractional position
//! `h = (n - 1) p` and is interpolated between the two neighbouring order
//! statistics. This is the default convention of most numeric array
//! libraries, so reference values computed elsewhere match exactly.

use crate::{Error, QuantileEstimator, Result};
use robust_core::{CentralTendencyEstimator, Numeric};

/// Linear interpolation quantile estimator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Linear;

/// Convenience constructor for the linear interpolation estimator
pub fn linear() -> Linear {
    Linear
}

/// Interpolate between `a` and `b`, anchoring on the nearer end point
///
/// Anchoring keeps `lerp(a, b, 1) == b` exact, which matters for symmetric
/// quantile pairs.
#[inline]
fn lerp<T: Numeric>(a: T, b: T, t: T) -> T {
    let diff = b - a;
    if t < T::from_f64(0.5) {
        a + diff * t
    } else {
        b - diff * (T::one() - t)
    }
}

impl<T: Numeric> QuantileEstimator<T> for Linear {
    fn quantile_sorted(&self, sorted_data: &[T], p: f64) -> Result<T> {
        Error::check_probability(p)?;

        let n = sorted_data.len();
        if n == 0 {
            return Ok(T::nan());
        }

        let h = (n - 1) as f64 * p;
        let lo = (h.floor() as usize).min(n - 1);
        let hi = (lo + 1).min(n - 1);
        let frac = T::from_f64(h - lo as f64);

        if lo == hi {
            return Ok(sorted_data[lo]);
        }
        Ok(lerp(sorted_data[lo], sorted_data[hi], frac))
    }
}

impl<T: Numeric> CentralTendencyEstimator<T> for Linear {
    fn estimate_sorted(&self, sorted_data: &[T]) -> T {
        self.quantile_sorted(sorted_data, 0.5)
            .unwrap_or_else(|_| T::nan())
    }

    fn name(&self) -> &str {
        "Median"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}
