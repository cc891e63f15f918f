#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmarks for SVG chart rendering.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sello_viz::prelude::*;

fn line_chart_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_chart");

    for size in [100, 1_000, 10_000] {
        let x: Vec<f64> = (0..size).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| (v * 0.01).sin() * 40.0 + 50.0).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                LineChart::new()
                    .data(black_box(&x), black_box(&y))
                    .dimensions(800, 600)
                    .build()
                    .unwrap()
                    .to_svg_string()
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn histogram_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");

    for size in [100, 1_000, 10_000] {
        // Bell-curve-like distribution from a deterministic formula
        let data: Vec<f64> = (0..size)
            .map(|i| {
                let x = i as f64 / size as f64;
                (x * std::f64::consts::TAU).sin() * 50.0 + 50.0 + (i % 17) as f64
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                Histogram::new()
                    .data(black_box(&data))
                    .dimensions(800, 600)
                    .build()
                    .unwrap()
                    .to_svg_string()
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn heatmap_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("heatmap");

    for size in [8usize, 32, 64] {
        let values: Vec<f64> = (0..size * size).map(|i| ((i * 31) % 97) as f64).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                Heatmap::new()
                    .data(black_box(&values), size, size)
                    .annotate(size <= 16)
                    .dimensions(800, 800)
                    .build()
                    .unwrap()
                    .to_svg_string()
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    line_chart_benchmark,
    histogram_benchmark,
    heatmap_benchmark
);
criterion_main!(benches);
