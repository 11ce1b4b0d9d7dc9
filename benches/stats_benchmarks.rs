//! Statistics Engine Benchmarks
//!
//! Measures cached versus uncached reads, quantile interpolation, the
//! five-number summary and the paired statistics over synthetic data.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use datastats::{correlation, covariance, DataStats};
use std::hint::black_box;

/// Deterministic pseudo-random dataset
fn create_dataset(n_samples: usize, seed: u64) -> Vec<f64> {
    // Simple LCG random generator for reproducibility
    let mut rng_state = seed;
    (0..n_samples)
        .map(|_| {
            rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
            (rng_state >> 33) as f64 / (u32::MAX as f64) * 1000.0
        })
        .collect()
}

fn bench_assign_and_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign_and_read");

    for size in [100, 1_000, 10_000] {
        let data = create_dataset(size, 42);

        group.bench_with_input(BenchmarkId::new("uncached", size), &data, |b, data| {
            let mut stats = DataStats::new();
            b.iter(|| {
                stats.assign(black_box(data));
                black_box((stats.mean(), stats.std(), stats.median(), stats.mode()))
            });
        });

        group.bench_with_input(BenchmarkId::new("cached", size), &data, |b, data| {
            let mut stats = DataStats::new();
            stats.assign(data);
            b.iter(|| black_box((stats.mean(), stats.std(), stats.median(), stats.mode())));
        });
    }

    group.finish();
}

fn bench_order_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_statistics");

    for size in [100, 1_000, 10_000] {
        let mut stats = DataStats::new();
        stats.assign(create_dataset(size, 7));

        group.bench_function(BenchmarkId::new("five_number_summary", size), |b| {
            b.iter(|| black_box(stats.five_number_summary()));
        });
        group.bench_function(BenchmarkId::new("deciles", size), |b| {
            b.iter(|| black_box(stats.quantiles(black_box(0.1))));
        });
    }

    group.finish();
}

fn bench_bivariate(c: &mut Criterion) {
    let mut group = c.benchmark_group("bivariate");

    for size in [100, 1_000, 10_000] {
        let x = create_dataset(size, 1);
        let y = create_dataset(size, 2);

        group.bench_function(BenchmarkId::new("covariance", size), |b| {
            b.iter(|| black_box(covariance(black_box(&x), black_box(&y))));
        });
        group.bench_function(BenchmarkId::new("correlation", size), |b| {
            b.iter(|| black_box(correlation(black_box(&x), black_box(&y))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_assign_and_read,
    bench_order_statistics,
    bench_bivariate,
);

criterion_main!(benches);
