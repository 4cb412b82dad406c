//! Criterion benchmarks for the transform implementations
//!
//! Run with: cargo bench -p fourier-core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fourier_core::{Complex64, NaiveDft, Radix2Fft, Signal, Transform};
use std::f64::consts::PI;

/// Generate a test signal with a few harmonics
fn generate_signal(size: usize) -> Vec<Complex64> {
    (0..size)
        .map(|i| {
            let t = i as f64 / size as f64;
            let re = (2.0 * PI * 3.0 * t).sin() + 0.5 * (2.0 * PI * 17.0 * t).cos();
            Complex64::new(re, 0.25 * (2.0 * PI * 40.0 * t).sin())
        })
        .collect()
}

// ============================================================================
// Forward transform benchmarks
// ============================================================================

fn bench_naive_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("Naive_Forward");

    for &size in &[64, 256, 1024] {
        let input = generate_signal(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(NaiveDft.compute_dft(black_box(&input))))
        });
    }

    group.finish();
}

fn bench_fft_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("FFT_Forward");

    for &size in &[64, 256, 1024, 4096, 16384] {
        let input = generate_signal(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(Radix2Fft.compute_dft(black_box(&input))))
        });
    }

    group.finish();
}

fn bench_fft_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("FFT_Inverse");

    for &size in &[256, 1024, 4096] {
        let spectrum = Radix2Fft
            .compute_dft(&generate_signal(size))
            .expect("power-of-two size");
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(Radix2Fft.compute_idft(black_box(&spectrum))))
        });
    }

    group.finish();
}

// ============================================================================
// Signal buffer benchmarks
// ============================================================================

fn bench_interpolate(c: &mut Criterion) {
    let signal = Signal::new(generate_signal(1000));
    c.bench_function("Interpolate_1000_to_1024", |b| {
        b.iter(|| black_box(signal.interpolate(black_box(1024))))
    });
}

criterion_group!(
    benches,
    bench_naive_forward,
    bench_fft_forward,
    bench_fft_inverse,
    bench_interpolate
);
criterion_main!(benches);
