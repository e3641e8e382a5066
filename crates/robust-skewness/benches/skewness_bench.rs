use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_distr::LogNormal;
use robust_quantile::HarrellDavis;
use robust_skewness::{
    auc_skew_gamma, bowley_skew, forhad_shorna_rank_skew, pearson_halfmode_skew, AucSkewGamma,
    SkewnessEstimator, SkewnessMethod, SkewnessConfig, DEFAULT_DP,
};

/// Generate right-skewed data
fn generate_lognormal_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let lognormal = LogNormal::new(0.0, 0.75).unwrap();
    (0..size).map(|_| lognormal.sample(&mut rng)).collect()
}

fn bench_catalogue(c: &mut Criterion) {
    let mut group = c.benchmark_group("Catalogue");
    let data = generate_lognormal_data(1000, 42);

    for method in SkewnessMethod::all() {
        let config = SkewnessConfig::new(method);
        group.bench_with_input(BenchmarkId::new(method.name(), 1000), &data, |b, data| {
            b.iter(|| config.estimate(black_box(data)))
        });
    }

    group.finish();
}

fn bench_sample_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("SampleSize");
    let sizes = [100, 1000, 10_000];

    for &size in &sizes {
        let data = generate_lognormal_data(size, 7);

        group.bench_with_input(BenchmarkId::new("bowley", size), &data, |b, data| {
            b.iter(|| bowley_skew(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("halfmode", size), &data, |b, data| {
            b.iter(|| pearson_halfmode_skew(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("forhad_shorna", size), &data, |b, data| {
            b.iter(|| forhad_shorna_rank_skew(black_box(data)))
        });
    }

    group.finish();
}

fn bench_auc_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("AucGrid");
    let data = generate_lognormal_data(1000, 42);

    for dp in [0.05, DEFAULT_DP, 0.001] {
        group.bench_with_input(BenchmarkId::new("linear", dp), &dp, |b, &dp| {
            b.iter(|| auc_skew_gamma(black_box(&data), dp))
        });

        let hd = AucSkewGamma::uniform(dp).with_estimator(HarrellDavis);
        group.bench_with_input(BenchmarkId::new("harrell_davis", dp), &data, |b, data| {
            b.iter(|| hd.estimate(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_catalogue, bench_sample_sizes, bench_auc_grid);
criterion_main!(benches);
