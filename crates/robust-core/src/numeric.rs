//! Generic numeric trait for type-safe statistical computing
//!
//! Every estimator in the workspace is generic over [`Numeric`], which is
//! implemented for `f32` and `f64`. Missing values are represented by NaN, so
//! the trait is restricted to IEEE floating point types.

use num_traits::Float;
use std::fmt::{Debug, Display};
use std::iter::Sum;

/// Floating point sample type
///
/// Conversions to and from `f64` are infallible: probabilities and grid
/// parameters are always carried as `f64` and converted at the boundary.
pub trait Numeric:
    Float + Sum + Debug + Display + Default + Send + Sync + 'static
{
    /// Convert from `f64`, rounding to the nearest representable value
    fn from_f64(value: f64) -> Self;

    /// Convert a count into this type
    fn from_usize(value: usize) -> Self;

    /// Widen (or keep) this value as `f64`
    fn as_f64(self) -> f64;
}

impl Numeric for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f64
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

impl Numeric for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}
