//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, LogNormal, Normal};
use robust_quantile::Linear;
use robust_skewness::{
    AucSkewGamma, BickelMode, Bowley, ForhadShornaRank, Groeneveld, HossainAdnan, Kelly, Medeen,
    PearsonHalfMode, PearsonMedian, PearsonMode, SkewnessEstimator,
};

pub const EPSILON: f64 = 1e-10;

/// Small right-skewed sample with hand-computed reference values
pub const REFERENCE: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 10.0];

/// Symmetric sample whose centre value is repeated, so that the frequency
/// and half-sample modes both land on the centre
pub const SYMMETRIC_WITH_MODE: [f64; 6] = [-2.0, -1.0, 0.0, 0.0, 1.0, 2.0];

/// Symmetric sample without a value at the midrange
pub const SYMMETRIC_NO_CENTRE: [f64; 4] = [-2.0, -1.0, 1.0, 2.0];

/// Symmetric sample with a single centre value
pub const SYMMETRIC: [f64; 5] = [-2.0, -1.0, 0.0, 1.0, 2.0];

/// Powers of two, skewed at every quantile level
pub fn geometric(n: u32) -> Vec<f64> {
    (0..n).map(|i| 2f64.powi(i as i32)).collect()
}

pub fn generate_normal(n: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std_dev).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

pub fn generate_lognormal(n: usize, sigma: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let lognormal = LogNormal::new(0.0, sigma).unwrap();
    (0..n).map(|_| lognormal.sample(&mut rng)).collect()
}

pub fn negate(data: &[f64]) -> Vec<f64> {
    data.iter().map(|x| -x).collect()
}

/// Every estimator of the catalogue with its default parameters
pub fn catalogue() -> Vec<Box<dyn SkewnessEstimator<f64>>> {
    vec![
        Box::new(PearsonMode),
        Box::new(PearsonHalfMode),
        Box::new(BickelMode),
        Box::new(PearsonMedian),
        Box::new(Medeen),
        Box::new(Bowley::new(Linear)),
        Box::new(Groeneveld::new(Linear)),
        Box::new(Kelly::new(Linear)),
        Box::new(HossainAdnan::new(Linear)),
        Box::new(ForhadShornaRank),
        Box::new(AucSkewGamma::uniform(robust_skewness::DEFAULT_DP)),
        Box::new(AucSkewGamma::tail_weighted(robust_skewness::DEFAULT_DP)),
    ]
}

/// Equal within a relative tolerance, or both NaN
pub fn same_value(a: f64, b: f64, tolerance: f64) -> bool {
    (a.is_nan() && b.is_nan()) || (a - b).abs() <= tolerance * a.abs().max(b.abs()).max(1.0)
}
