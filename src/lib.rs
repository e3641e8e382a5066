//! Classical and robust skewness estimators
//!
//! This facade re-exports the workspace crates:
//!
//! - [`robust_core`]: numeric trait, errors, NaN-aware reducers and numerical helpers
//! - [`robust_quantile`]: linear-interpolation and Harrell-Davis quantile estimators
//! - [`robust_location`]: mean, median, frequency mode, half-sample mode
//! - [`robust_spread`]: standard deviation and mean absolute deviation
//! - [`robust_skewness`]: the skewness catalogue
//!
//! # Example
//!
//! ```rust
//! use robust_skew::prelude::*;
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 10.0];
//! let kelly = kelly_skew(&data).unwrap();
//! let auc = auc_skew_gamma(&data, DEFAULT_DP).unwrap();
//! assert!(kelly > 0.0 && auc > 0.0);
//!
//! let config: SkewnessConfig = "wauc_skew_gamma".parse::<SkewnessMethod>().map(SkewnessConfig::new).unwrap();
//! assert!(config.estimate(&data).unwrap() > 0.0);
//! ```

pub use robust_core;
pub use robust_location;
pub use robust_quantile;
pub use robust_skewness;
pub use robust_spread;

pub use robust_skewness::{
    auc_skew_gamma, bickel_mode_skew, bowley_skew, estimate_all, forhad_shorna_rank_skew,
    groeneveld_skew, hossain_adnan_skew, kelly_skew, medeen_skew, pearson_halfmode_skew,
    pearson_median_skew, pearson_mode_skew, wauc_skew_gamma, Error, Result, DEFAULT_DP,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use robust_core::{CentralTendencyEstimator, Numeric};
    pub use robust_location::{half_sample_mode, mean, median, mode};
    pub use robust_quantile::{HarrellDavis, Linear, QuantileEstimator};
    pub use robust_skewness::prelude::*;
    pub use robust_skewness::{estimate_all, QuantileMethod};
    pub use robust_spread::{std_dev, SpreadEstimator};
}
