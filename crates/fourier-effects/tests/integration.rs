//! Integration tests for fourier-effects.
//!
//! Check the equalizer against signals with known spectral content: identity
//! and silence scenarios, band isolation, and agreement between algorithms.

use fourier_analysis::max_abs_error;
use fourier_core::{Algorithm, Complex64, Signal, Transform};
use fourier_effects::{BandGains, ChunkPipeline, band_ranges};
use proptest::prelude::*;
use std::f64::consts::PI;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Sine completing `cycles` periods every `period` samples.
fn sine(cycles: f64, period: usize, len: usize, amplitude: f64) -> Vec<f64> {
    (0..len)
        .map(|i| amplitude * (2.0 * PI * cycles * i as f64 / period as f64).sin())
        .collect()
}

fn rms(signal: &[f64]) -> f64 {
    (signal.iter().map(|x| x * x).sum::<f64>() / signal.len() as f64).sqrt()
}

// ===========================================================================
// 1. Identity and silence
// ===========================================================================

#[test]
fn unity_gains_are_identity_for_both_algorithms() {
    let input: Vec<f64> = sine(3.0, 1024, 5000, 0.8)
        .iter()
        .zip(sine(211.0, 1024, 5000, 0.2))
        .map(|(a, b)| a + b)
        .collect();

    for alg in Algorithm::ALL {
        let chunk = if alg == Algorithm::Naive { 100 } else { 1024 };
        let eq = ChunkPipeline::new(chunk, BandGains::unity(), alg).unwrap();
        let output = eq.process(&input).unwrap();
        assert_eq!(output.len(), input.len());
        let err = input
            .iter()
            .zip(&output)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        assert!(err < 1e-9, "{alg}: max error {err}");
    }
}

#[test]
fn zero_gains_silence_everything() {
    let input = sine(7.0, 256, 1000, 1.0);
    let eq = ChunkPipeline::new(256, BandGains::uniform(0.0).unwrap(), Algorithm::Fft).unwrap();
    let output = eq.process(&input).unwrap();
    assert!(output.iter().all(|&x| x.abs() < 1e-15));
}

// ===========================================================================
// 2. Band isolation
// ===========================================================================

#[test]
fn cutting_one_band_removes_its_tone_only() {
    let n = 1024;
    let ranges = band_ranges(n);
    // Bin-centered tones in the low band and the high band
    let low_bin = ranges[0].start + 10;
    let high_bin = ranges[4].start + 10;
    let low = sine(low_bin as f64, n, n, 1.0);
    let high = sine(high_bin as f64, n, n, 1.0);
    let input: Vec<f64> = low.iter().zip(&high).map(|(a, b)| a + b).collect();

    let gains = BandGains::new([1.0, 1.0, 1.0, 1.0, 0.0]).unwrap();
    let eq = ChunkPipeline::new(n, gains, Algorithm::Fft).unwrap();
    let output = eq.process(&input).unwrap();

    for (a, b) in output.iter().zip(&low) {
        assert!((a - b).abs() < 1e-9);
    }
}

#[test]
fn boost_doubles_band_amplitude() {
    let n = 512;
    let mid_bin = band_ranges(n)[2].start + 3;
    let input = sine(mid_bin as f64, n, n, 0.25);

    let gains = BandGains::new([1.0, 1.0, 2.0, 1.0, 1.0]).unwrap();
    let output = ChunkPipeline::new(n, gains, Algorithm::Fft)
        .unwrap()
        .process(&input)
        .unwrap();

    assert!((rms(&output) / rms(&input) - 2.0).abs() < 1e-9);
}

#[test]
fn output_stays_real() {
    let input = sine(5.5, 64, 64, 1.0);
    let gains = BandGains::new([0.3, 1.7, 0.0, 1.2, 0.6]).unwrap();
    let spectrum = Algorithm::Fft
        .compute_dft(Signal::from_real(&input).as_slice())
        .unwrap();
    let mut filtered = spectrum.clone();
    fourier_effects::apply_band_gains(&mut filtered, &gains);
    let restored = Algorithm::Fft.compute_idft(&filtered).unwrap();
    assert!(restored.iter().all(|c| c.im.abs() < 1e-12));
}

// ===========================================================================
// 3. Chunking
// ===========================================================================

#[test]
fn chunks_are_independent() {
    // Filtering the whole signal equals filtering each frame on its own
    let input = sine(13.0, 200, 700, 1.0);
    let gains = BandGains::new([0.2, 0.4, 0.6, 0.8, 1.0]).unwrap();
    let eq = ChunkPipeline::new(256, gains, Algorithm::Fft).unwrap();
    let whole = eq.process(&input).unwrap();

    let mut pieces = Vec::new();
    for chunk in input.chunks(256) {
        pieces.extend(eq.filter().process_chunk(chunk).unwrap());
    }
    assert_eq!(whole, pieces);
}

#[test]
fn non_power_of_two_chunk_fails_with_fft() {
    let eq = ChunkPipeline::new(1000, BandGains::unity(), Algorithm::Fft).unwrap();
    assert!(eq.process(&[0.5; 10]).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Naive and FFT pipelines agree for arbitrary gains and signals.
    #[test]
    fn naive_and_fft_pipelines_agree(
        input in prop::collection::vec(-1.0f64..1.0, 0..300),
        gains in prop::array::uniform5(0.0f64..=2.0),
    ) {
        let gains = BandGains::new(gains).unwrap();
        let naive = ChunkPipeline::new(64, gains, Algorithm::Naive).unwrap().process(&input).unwrap();
        let fast = ChunkPipeline::new(64, gains, Algorithm::Fft).unwrap().process(&input).unwrap();
        let to_complex = |v: &[f64]| v.iter().map(|&x| Complex64::new(x, 0.0)).collect::<Vec<_>>();
        prop_assert!(max_abs_error(&to_complex(&naive), &to_complex(&fast)).unwrap() < 1e-9);
    }
}
