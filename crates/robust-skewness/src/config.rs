//! Run-time selection of a skewness coefficient
//!
//! [`SkewnessMethod`] names every coefficient in the catalogue by its
//! function name, and [`SkewnessConfig`] pairs it with the quantile
//! estimator used by the quantile based coefficients. Both serialize with
//! serde, so a method can come from a configuration file:
//!
//! ```rust
//! use robust_skewness::{QuantileMethod, SkewnessConfig, SkewnessMethod};
//!
//! let config: SkewnessConfig = serde_json::from_str(
//!     r#"{"method": "auc_skew_gamma", "dp": 0.05, "quantile": "harrell_davis"}"#,
//! ).unwrap();
//! assert_eq!(config.method, SkewnessMethod::AucSkewGamma { dp: 0.05 });
//! assert_eq!(config.quantile, QuantileMethod::HarrellDavis);
//! ```

use crate::auc::{AucSkewGamma, DEFAULT_DP};
use crate::moments::{BickelMode, Medeen, PearsonHalfMode, PearsonMedian, PearsonMode};
use crate::quantile_based::{Bowley, Groeneveld, HossainAdnan, Kelly};
use crate::rank::ForhadShornaRank;
use crate::traits::SkewnessEstimator;
use crate::{Error, Result};
use robust_core::Numeric;
use robust_quantile::{HarrellDavis, Linear, QuantileEstimator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

fn default_dp() -> f64 {
    DEFAULT_DP
}

/// Quantile estimator behind the quantile based coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantileMethod {
    /// Linear interpolation between order statistics
    #[default]
    Linear,
    /// Harrell-Davis weighted order statistics
    HarrellDavis,
}

/// One coefficient of the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum SkewnessMethod {
    #[serde(rename = "pearson_mode_skew")]
    PearsonMode,
    #[serde(rename = "pearson_halfmode_skew")]
    PearsonHalfMode,
    #[serde(rename = "bickel_mode_skew")]
    BickelMode,
    #[serde(rename = "pearson_median_skew")]
    PearsonMedian,
    #[serde(rename = "medeen_skew")]
    Medeen,
    #[serde(rename = "bowley_skew")]
    Bowley,
    #[serde(rename = "groeneveld_skew")]
    Groeneveld,
    #[serde(rename = "kelly_skew")]
    Kelly,
    #[serde(rename = "hossain_adnan_skew")]
    HossainAdnan,
    #[serde(rename = "forhad_shorna_rank_skew")]
    ForhadShornaRank,
    #[serde(rename = "auc_skew_gamma")]
    AucSkewGamma {
        #[serde(default = "default_dp")]
        dp: f64,
    },
    #[serde(rename = "wauc_skew_gamma")]
    WaucSkewGamma {
        #[serde(default = "default_dp")]
        dp: f64,
    },
}

impl SkewnessMethod {
    /// Every method, the AUC family with the default step
    pub fn all() -> Vec<SkewnessMethod> {
        vec![
            SkewnessMethod::PearsonMode,
            SkewnessMethod::PearsonHalfMode,
            SkewnessMethod::BickelMode,
            SkewnessMethod::PearsonMedian,
            SkewnessMethod::Medeen,
            SkewnessMethod::Bowley,
            SkewnessMethod::Groeneveld,
            SkewnessMethod::Kelly,
            SkewnessMethod::HossainAdnan,
            SkewnessMethod::ForhadShornaRank,
            SkewnessMethod::AucSkewGamma { dp: DEFAULT_DP },
            SkewnessMethod::WaucSkewGamma { dp: DEFAULT_DP },
        ]
    }

    /// Function name of the coefficient
    pub fn name(&self) -> &'static str {
        match self {
            SkewnessMethod::PearsonMode => "pearson_mode_skew",
            SkewnessMethod::PearsonHalfMode => "pearson_halfmode_skew",
            SkewnessMethod::BickelMode => "bickel_mode_skew",
            SkewnessMethod::PearsonMedian => "pearson_median_skew",
            SkewnessMethod::Medeen => "medeen_skew",
            SkewnessMethod::Bowley => "bowley_skew",
            SkewnessMethod::Groeneveld => "groeneveld_skew",
            SkewnessMethod::Kelly => "kelly_skew",
            SkewnessMethod::HossainAdnan => "hossain_adnan_skew",
            SkewnessMethod::ForhadShornaRank => "forhad_shorna_rank_skew",
            SkewnessMethod::AucSkewGamma { .. } => "auc_skew_gamma",
            SkewnessMethod::WaucSkewGamma { .. } => "wauc_skew_gamma",
        }
    }

    /// Whether the quantile estimator choice changes this coefficient
    pub fn uses_quantile_estimator(&self) -> bool {
        matches!(
            self,
            SkewnessMethod::Bowley
                | SkewnessMethod::Groeneveld
                | SkewnessMethod::Kelly
                | SkewnessMethod::HossainAdnan
                | SkewnessMethod::AucSkewGamma { .. }
                | SkewnessMethod::WaucSkewGamma { .. }
        )
    }

    /// Estimate this coefficient using `estimator` for quantiles
    pub fn estimate_with<T, Q>(&self, data: &[T], estimator: Q) -> Result<T>
    where
        T: Numeric,
        Q: QuantileEstimator<T>,
    {
        match *self {
            SkewnessMethod::PearsonMode => PearsonMode.estimate(data),
            SkewnessMethod::PearsonHalfMode => PearsonHalfMode.estimate(data),
            SkewnessMethod::BickelMode => BickelMode.estimate(data),
            SkewnessMethod::PearsonMedian => PearsonMedian.estimate(data),
            SkewnessMethod::Medeen => Medeen.estimate(data),
            SkewnessMethod::Bowley => Bowley::new(estimator).estimate(data),
            SkewnessMethod::Groeneveld => Groeneveld::new(estimator).estimate(data),
            SkewnessMethod::Kelly => Kelly::new(estimator).estimate(data),
            SkewnessMethod::HossainAdnan => HossainAdnan::new(estimator).estimate(data),
            SkewnessMethod::ForhadShornaRank => ForhadShornaRank.estimate(data),
            SkewnessMethod::AucSkewGamma { dp } => {
                AucSkewGamma::uniform(dp).with_estimator(estimator).estimate(data)
            }
            SkewnessMethod::WaucSkewGamma { dp } => {
                AucSkewGamma::tail_weighted(dp).with_estimator(estimator).estimate(data)
            }
        }
    }
}

impl fmt::Display for SkewnessMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SkewnessMethod {
    type Err = Error;

    /// Parse a function name; the AUC family gets the default step
    fn from_str(s: &str) -> Result<Self> {
        SkewnessMethod::all()
            .into_iter()
            .find(|method| method.name() == s)
            .ok_or_else(|| Error::UnknownMethod(s.to_string()))
    }
}

/// A skewness method together with its quantile estimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkewnessConfig {
    #[serde(flatten)]
    pub method: SkewnessMethod,
    #[serde(default)]
    pub quantile: QuantileMethod,
}

impl Default for SkewnessConfig {
    fn default() -> Self {
        Self {
            method: SkewnessMethod::Bowley,
            quantile: QuantileMethod::Linear,
        }
    }
}

impl SkewnessConfig {
    pub fn new(method: SkewnessMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn with_quantile(mut self, quantile: QuantileMethod) -> Self {
        self.quantile = quantile;
        self
    }

    /// Estimate the configured coefficient
    #[instrument(skip(self, data), fields(method = %self.method, quantile = ?self.quantile, n = data.len()))]
    pub fn estimate<T: Numeric>(&self, data: &[T]) -> Result<T> {
        match self.quantile {
            QuantileMethod::Linear => self.method.estimate_with(data, Linear),
            QuantileMethod::HarrellDavis => self.method.estimate_with(data, HarrellDavis),
        }
    }
}

/// Evaluate every coefficient of the catalogue with its defaults
pub fn estimate_all<T: Numeric>(data: &[T]) -> Result<Vec<(SkewnessMethod, T)>> {
    SkewnessMethod::all()
        .into_iter()
        .map(|method| Ok((method, SkewnessConfig::new(method).estimate(data)?)))
        .collect()
}
