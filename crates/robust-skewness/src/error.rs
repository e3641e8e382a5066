//! Error types for skewness estimation
//!
//! Degenerate samples are not errors. A constant, empty or all-missing
//! sample produces NaN (or ±inf) from every estimator. Errors are reserved
//! for invalid parameters.

use thiserror::Error;

/// Errors that can occur during skewness estimation
#[derive(Error, Debug)]
pub enum Error {
    /// Probability step of the AUC grid is not a finite positive number, or
    /// is too fine for a grid of bounded size
    #[error("Probability step {dp} must be finite and positive, and no finer than 1e-7")]
    InvalidStep { dp: f64 },

    /// Name that does not match any skewness method
    #[error("Unknown skewness method: {0}")]
    UnknownMethod(String),

    /// Quantile estimation error
    #[error("Quantile estimation error: {0}")]
    Quantile(#[from] robust_quantile::Error),

    /// Core computation error
    #[error("Core computation error: {0}")]
    Core(#[from] robust_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check that `dp` is usable as the spacing of a probability grid
    pub fn check_step(dp: f64) -> Result<()> {
        if !dp.is_finite() || dp <= 0.0 {
            return Err(Error::InvalidStep { dp });
        }
        Ok(())
    }
}
