//! Concrete quantile estimator implementations

mod harrell_davis;
mod linear;

pub use harrell_davis::{harrell_davis, HarrellDavis};
pub use linear::{linear, Linear};
