//! Area under the quantile skewness curve
//!
//! Bowley's coefficient compares the quartiles with the median. Replacing
//! the quartiles by the quantiles at `p` and `1 - p` gives a whole family of
//! coefficients
//!
//! ```text
//! s(p) = (Q(p) + Q(1 - p) - 2 Q(0.5)) / (Q(1 - p) - Q(p))
//! ```
//!
//! one for every `p` below one half. [`AucSkewGamma`] samples `s(p)` on a
//! grid of step `dp` and integrates it with the trapezoidal rule, which
//! summarises the asymmetry of the whole distribution rather than of a single
//! quantile pair. [`AucWeighting::TailWeighted`] scales each coefficient
//! before integrating so that pairs far from the median count the most.
//!
//! # Grid
//!
//! With `n = floor(1 / dp)` the probabilities are `n` evenly spaced points
//! over `[0, 1]` followed by `0.5`, all estimated in one call. The first
//! `half_n = floor(n / 2)` quantiles are paired with their mirror images
//! from the top of the grid, so pair `i` is `(qs[i], qs[n - 1 - i])`; with
//! odd `n` the middle point belongs to neither half.

use crate::traits::{SkewnessEstimator, SkewnessEstimatorProperties};
use crate::{Error, Result};
use robust_core::math::{linspace, trapezoid};
use robust_core::Numeric;
use robust_quantile::{Linear, QuantileEstimator};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Probability step used when none is given
pub const DEFAULT_DP: f64 = 0.01;

/// Largest grid a step may produce, `floor(1 / dp)` points
pub const MAX_GRID_POINTS: usize = 10_000_000;

/// How the quantile skewness coefficients are weighted before integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AucWeighting {
    /// Every coefficient counts fully
    #[default]
    Uniform,
    /// Pair `i` counts `(half_n - 1 - i) / half_n`: close to one for the
    /// outermost pair, zero for the pair next to the median
    TailWeighted,
}

impl AucWeighting {
    fn weights(self, half_n: usize) -> Vec<f64> {
        match self {
            AucWeighting::Uniform => vec![1.0; half_n],
            AucWeighting::TailWeighted => (0..half_n)
                .rev()
                .map(|i| i as f64 / half_n as f64)
                .collect(),
        }
    }
}

/// Probability grid and weights for one step size
#[derive(Debug, Clone, PartialEq)]
pub struct AucGrid {
    dp: f64,
    n: usize,
    half_n: usize,
    probabilities: Vec<f64>,
    weights: Vec<f64>,
}

impl AucGrid {
    /// Build the grid for step `dp`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStep`] when `dp` is not finite or not positive,
    /// or so small that the grid would exceed [`MAX_GRID_POINTS`].
    pub fn new(dp: f64, weighting: AucWeighting) -> Result<Self> {
        Error::check_step(dp)?;

        let points = (1.0 / dp).floor();
        if !points.is_finite() || points > MAX_GRID_POINTS as f64 {
            return Err(Error::InvalidStep { dp });
        }
        let n = points as usize;
        let half_n = n / 2;

        let mut probabilities = linspace(0.0, 1.0, n);
        probabilities.push(0.5);

        debug!(dp, n, half_n, ?weighting, "auc skewness grid");
        Ok(Self {
            dp,
            n,
            half_n,
            probabilities,
            weights: weighting.weights(half_n),
        })
    }

    pub fn dp(&self) -> f64 {
        self.dp
    }

    /// Number of grid points, excluding the appended median
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Number of mirrored quantile pairs
    pub fn pairs(&self) -> usize {
        self.half_n
    }

    /// Grid probabilities followed by 0.5
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Weighted quantile skewness of each mirrored pair
    ///
    /// `quantiles` holds the estimates at [`probabilities`](Self::probabilities),
    /// median last.
    pub(crate) fn coefficients<T: Numeric>(&self, quantiles: &[T]) -> Vec<T> {
        let (qs, median) = quantiles.split_at(self.n);
        let median = median.first().copied().unwrap_or_else(T::nan);
        let two = T::from_usize(2);

        self.weights
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                let low = qs[i];
                let high = qs[self.n - 1 - i];
                (low + high - two * median) / (high - low) * T::from_f64(w)
            })
            .collect()
    }
}

/// Integrated quantile skewness over a probability grid
///
/// # Example
///
/// ```rust
/// use robust_skewness::{AucSkewGamma, SkewnessEstimator};
///
/// let data = [1.0_f64, 2.0, 3.0, 4.0, 10.0];
/// let plain = AucSkewGamma::uniform(0.25).estimate(&data).unwrap();
/// let weighted = AucSkewGamma::tail_weighted(0.25).estimate(&data).unwrap();
/// assert!((plain - 5.0 / 72.0).abs() < 1e-12);
/// assert!((weighted - 5.0 / 144.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AucSkewGamma<Q = Linear> {
    dp: f64,
    weighting: AucWeighting,
    estimator: Q,
}

impl AucSkewGamma<Linear> {
    /// Unweighted area with linearly interpolated quantiles
    pub fn uniform(dp: f64) -> Self {
        Self {
            dp,
            weighting: AucWeighting::Uniform,
            estimator: Linear,
        }
    }

    /// Tail-weighted area with linearly interpolated quantiles
    pub fn tail_weighted(dp: f64) -> Self {
        Self {
            dp,
            weighting: AucWeighting::TailWeighted,
            estimator: Linear,
        }
    }
}

impl Default for AucSkewGamma<Linear> {
    fn default() -> Self {
        Self::uniform(DEFAULT_DP)
    }
}

impl<Q> AucSkewGamma<Q> {
    /// Use a different quantile estimator
    pub fn with_estimator<R>(self, estimator: R) -> AucSkewGamma<R> {
        AucSkewGamma {
            dp: self.dp,
            weighting: self.weighting,
            estimator,
        }
    }

    pub fn dp(&self) -> f64 {
        self.dp
    }

    pub fn weighting(&self) -> AucWeighting {
        self.weighting
    }

    /// Probability grid this estimator integrates over
    pub fn grid(&self) -> Result<AucGrid> {
        AucGrid::new(self.dp, self.weighting)
    }
}

impl<Q> SkewnessEstimatorProperties for AucSkewGamma<Q> {
    fn name(&self) -> &str {
        match self.weighting {
            AucWeighting::Uniform => "auc_skew_gamma",
            AucWeighting::TailWeighted => "wauc_skew_gamma",
        }
    }

    fn is_robust(&self) -> bool {
        // the outermost pair is the sample minimum and maximum
        false
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        Some((-0.5, 0.5))
    }
}

impl<T: Numeric, Q: QuantileEstimator<T>> SkewnessEstimator<T> for AucSkewGamma<Q> {
    fn estimate(&self, data: &[T]) -> Result<T> {
        let grid = self.grid()?;
        if grid.pairs() == 0 {
            return Ok(T::zero());
        }

        let quantiles = self.estimator.quantiles(data, grid.probabilities())?;
        let coefficients = grid.coefficients(&quantiles);
        Ok(trapezoid(&coefficients, grid.dp())?)
    }
}

/// Unweighted area under the quantile skewness curve with step `dp`
///
/// [`DEFAULT_DP`] is the customary step.
pub fn auc_skew_gamma<T: Numeric>(data: &[T], dp: f64) -> Result<T> {
    AucSkewGamma::uniform(dp).estimate(data)
}

/// Tail-weighted area under the quantile skewness curve with step `dp`
pub fn wauc_skew_gamma<T: Numeric>(data: &[T], dp: f64) -> Result<T> {
    AucSkewGamma::tail_weighted(dp).estimate(data)
}
