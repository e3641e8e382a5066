//! Error types for quantile estimation

use thiserror::Error;

/// Errors that can occur during quantile estimation
///
/// Empty data is not an error: estimators return NaN for it.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid quantile probability
    #[error("Quantile probability {p} must be in [0, 1]")]
    InvalidProbability { p: f64 },

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    Numerical(String),

    /// Core computation error
    #[error("Core computation error: {0}")]
    Core(#[from] robust_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Check if probability is valid
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidProbability { p });
        }
        Ok(())
    }
}
