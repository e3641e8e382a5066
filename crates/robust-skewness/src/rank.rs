//! Rank based skewness coefficient of Forhad and Shorna

use crate::traits::{ratio, SkewnessEstimator, SkewnessEstimatorProperties};
use crate::Result;
use robust_core::math::rank_min;
use robust_core::utils::nan_sum;
use robust_core::Numeric;
use robust_location::midrange;

/// Forhad-Shorna rank skewness
///
/// The midrange is ranked together with the sample, ties sharing the lowest
/// rank of their group. For every observation the rank of the midrange minus
/// the rank of the observation is taken, and the sum of these differences is
/// divided by the sum of their magnitudes. A right-skewed sample puts most
/// observations below the midrange, so the differences are mostly positive.
///
/// When every difference is zero (a constant sample) the result is NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForhadShornaRank;

impl SkewnessEstimatorProperties for ForhadShornaRank {
    fn name(&self) -> &str {
        "forhad_shorna_rank_skew"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        Some((-1.0, 1.0))
    }
}

impl<T: Numeric> SkewnessEstimator<T> for ForhadShornaRank {
    fn estimate(&self, data: &[T]) -> Result<T> {
        let mut augmented = Vec::with_capacity(data.len() + 1);
        augmented.extend_from_slice(data);
        augmented.push(midrange(data));

        let ranks = rank_min(&augmented);
        let (ranks, midrange_rank) = ranks.split_at(data.len());
        let midrange_rank = midrange_rank[0];

        let diffs: Vec<T> = ranks.iter().map(|&r| midrange_rank - r).collect();
        let magnitudes: Vec<T> = diffs.iter().map(|d| d.abs()).collect();
        Ok(ratio(nan_sum(&diffs), nan_sum(&magnitudes), "forhad_shorna_rank_skew"))
    }
}

/// Forhad-Shorna rank skewness of `data`
pub fn forhad_shorna_rank_skew<T: Numeric>(data: &[T]) -> Result<T> {
    ForhadShornaRank.estimate(data)
}
