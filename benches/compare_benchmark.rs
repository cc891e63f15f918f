#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmarks for the statistical tests and the automatic comparison.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sello_viz::prelude::*;

// Deterministic non-constant sample with a mild periodic shape.
fn wave_sample(size: usize, phase: f64) -> Vec<f64> {
    (0..size)
        .map(|i| {
            let x = i as f64 / size as f64;
            (x * std::f64::consts::TAU + phase).sin() * 5.0 + 50.0 + (i % 13) as f64 * 0.1
        })
        .collect()
}

fn shapiro_wilk_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapiro_wilk");

    for size in [50, 500, 5_000] {
        let data = wave_sample(size, 0.0);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| shapiro_wilk(black_box(&data), 0.05).unwrap());
        });
    }

    group.finish();
}

fn mann_whitney_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("mann_whitney_u");

    for size in [100, 1_000, 10_000] {
        let a = wave_sample(size, 0.0);
        let b = wave_sample(size, 0.7);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| mann_whitney_u(black_box(&a), black_box(&b)).unwrap());
        });
    }

    group.finish();
}

fn compare_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    for size in [100, 1_000, 5_000] {
        let a = wave_sample(size, 0.0);
        let b = wave_sample(size, 0.7);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| compare(black_box(&a), black_box(&b), 0.05).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    shapiro_wilk_benchmark,
    mann_whitney_benchmark,
    compare_benchmark
);
criterion_main!(benches);
