//! Classical and robust skewness coefficients
//!
//! Every coefficient is a pure function of a one-dimensional sample. Missing
//! values (NaN) are ignored, and a degenerate sample (constant, empty or all
//! missing) yields NaN or ±inf rather than an error.
//!
//! # Catalogue
//!
//! | Function | Estimator | Family |
//! |----------|-----------|--------|
//! | [`pearson_mode_skew`] | [`PearsonMode`] | moment/mode |
//! | [`pearson_halfmode_skew`] | [`PearsonHalfMode`] | moment/mode |
//! | [`bickel_mode_skew`] | [`BickelMode`] | moment/mode |
//! | [`pearson_median_skew`] | [`PearsonMedian`] | moment/mode |
//! | [`medeen_skew`] | [`Medeen`] | moment/mode |
//! | [`bowley_skew`] | [`Bowley`] | quantile |
//! | [`groeneveld_skew`] | [`Groeneveld`] | quantile |
//! | [`kelly_skew`] | [`Kelly`] | quantile |
//! | [`hossain_adnan_skew`] | [`HossainAdnan`] | quantile |
//! | [`forhad_shorna_rank_skew`] | [`ForhadShornaRank`] | rank |
//! | [`auc_skew_gamma`] | [`AucSkewGamma::uniform`] | integrated quantile |
//! | [`wauc_skew_gamma`] | [`AucSkewGamma::tail_weighted`] | integrated quantile |
//!
//! The free functions use linearly interpolated quantiles. The quantile
//! based estimators accept any [`QuantileEstimator`](robust_quantile::QuantileEstimator),
//! e.g. Harrell-Davis.
//!
//! # Example
//!
//! ```rust
//! use robust_skewness::{bowley_skew, kelly_skew, pearson_median_skew};
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 10.0];
//!
//! // the outlier moves the mean but not the quartiles
//! assert!(pearson_median_skew(&data).unwrap() > 0.9);
//! assert_eq!(bowley_skew(&data).unwrap(), 0.0);
//! assert!(kelly_skew(&data).unwrap() > 0.4);
//! ```
//!
//! With a quantile estimator of your choice:
//!
//! ```rust
//! use robust_quantile::HarrellDavis;
//! use robust_skewness::{Bowley, SkewnessEstimator};
//!
//! let data: Vec<f64> = (0..50).map(|i| (i as f64 / 10.0).exp()).collect();
//! let skew = Bowley::new(HarrellDavis).estimate(&data).unwrap();
//! assert!(skew > 0.0);
//! ```

pub mod auc;
pub mod config;
pub mod error;
pub mod moments;
pub mod quantile_based;
pub mod rank;
pub mod traits;

pub use auc::{
    auc_skew_gamma, wauc_skew_gamma, AucGrid, AucSkewGamma, AucWeighting, DEFAULT_DP,
    MAX_GRID_POINTS,
};
pub use config::{estimate_all, QuantileMethod, SkewnessConfig, SkewnessMethod};
pub use error::{Error, Result};
pub use moments::{
    bickel_mode_skew, medeen_skew, pearson_halfmode_skew, pearson_median_skew, pearson_mode_skew,
    BickelMode, Medeen, PearsonHalfMode, PearsonMedian, PearsonMode,
};
pub use quantile_based::{
    bowley_skew, groeneveld_skew, hossain_adnan_skew, kelly_skew, Bowley, Groeneveld,
    HossainAdnan, Kelly,
};
pub use rank::{forhad_shorna_rank_skew, ForhadShornaRank};
pub use traits::{SkewnessEstimator, SkewnessEstimatorProperties};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        auc_skew_gamma, bickel_mode_skew, bowley_skew, forhad_shorna_rank_skew, groeneveld_skew,
        hossain_adnan_skew, kelly_skew, medeen_skew, pearson_halfmode_skew, pearson_median_skew,
        pearson_mode_skew, wauc_skew_gamma, SkewnessConfig, SkewnessEstimator,
        SkewnessEstimatorProperties, SkewnessMethod, DEFAULT_DP,
    };
}
