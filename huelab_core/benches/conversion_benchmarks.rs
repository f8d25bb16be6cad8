//! Performance benchmarks for the conversion engine and palette scans.
//!
//! Run with: cargo bench --bench conversion_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huelab_core::{
    extract_dominant_colors, quantize_to_palette, Hsl, Lab, Oklab, Rgb, Tables, Xyz,
};

fn sample_colors(count: usize) -> Vec<Rgb> {
    (0..count)
        .map(|i| {
            Rgb::new(
                (i * 37 % 256) as u8,
                (i * 101 % 256) as u8,
                (i * 197 % 256) as u8,
            )
        })
        .collect()
}

/// Benchmark the per-color conversion pipelines.
fn bench_conversions(c: &mut Criterion) {
    // Table construction happens outside the timed sections.
    Tables::shared();
    let colors = sample_colors(256);

    c.bench_function("rgb_to_lab", |b| {
        b.iter(|| {
            for &color in &colors {
                black_box(Lab::from_rgb(color));
            }
        });
    });

    c.bench_function("lab_round_trip", |b| {
        b.iter(|| {
            for &color in &colors {
                black_box(Lab::from_rgb(color).to_rgb());
            }
        });
    });

    c.bench_function("rgb_to_oklab", |b| {
        b.iter(|| {
            for &color in &colors {
                black_box(Oklab::from_rgb(color));
            }
        });
    });

    c.bench_function("rgb_to_xyz", |b| {
        b.iter(|| {
            for &color in &colors {
                black_box(Xyz::from_rgb(color));
            }
        });
    });

    c.bench_function("rgb_to_hsl", |b| {
        b.iter(|| {
            for &color in &colors {
                black_box(Hsl::from_rgb(color));
            }
        });
    });
}

/// Benchmark the palette scans at increasing input sizes.
fn bench_palette(c: &mut Criterion) {
    let palette = sample_colors(16);

    let mut group = c.benchmark_group("quantize");
    for size in [64usize, 256, 1024] {
        let colors = sample_colors(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &colors, |b, colors| {
            b.iter(|| black_box(quantize_to_palette(colors, &palette)));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("dominant");
    for size in [64usize, 256] {
        let colors = sample_colors(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &colors, |b, colors| {
            b.iter(|| black_box(extract_dominant_colors(colors, 8)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_conversions, bench_palette);
criterion_main!(benches);
