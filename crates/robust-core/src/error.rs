//! Error types for robust statistical analysis
//!
//! Provides a unified error type for all robust-skew crates.
//!
//! Degenerate data (a constant sample, an all-missing sample) is never an
//! error here: it surfaces as NaN or an infinity in the returned value. The
//! variant below is reserved for invalid parameters.

use thiserror::Error;

/// Core error type for robust statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an integration step that is not a finite, non-negative number
    pub fn invalid_step(dx: f64) -> Self {
        Self::InvalidParameter(format!("Step {dx} must be finite and non-negative"))
    }
}
