//! Integration tests for fourier-cli.
//!
//! Run the `fourier` binary end to end on small inputs.

use fourier_io::{WavSpec, read_wav, write_wav};
use std::process::Command;
use tempfile::tempdir;

/// Helper to get the path to the `fourier` binary built by cargo.
fn fourier_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fourier"))
}

fn parse_pairs(stdout: &[u8]) -> Vec<[f64; 2]> {
    serde_json::from_slice(stdout).expect("stdout should be a JSON array of pairs")
}

// ---------------------------------------------------------------------------
// `fourier dft`
// ---------------------------------------------------------------------------

#[test]
fn cli_dft_json_matches_known_spectrum() {
    for algorithm in ["naive", "fft"] {
        let output = fourier_bin()
            .args(["dft", "1", "0", "-1", "0", "--json", "--algorithm", algorithm])
            .output()
            .expect("failed to run fourier dft");
        assert!(output.status.success(), "{algorithm}: {output:?}");

        let spectrum = parse_pairs(&output.stdout);
        let expected = [[0.0, 0.0], [2.0, 0.0], [0.0, 0.0], [2.0, 0.0]];
        assert_eq!(spectrum.len(), 4);
        for (got, want) in spectrum.iter().zip(&expected) {
            assert!((got[0] - want[0]).abs() < 1e-9 && (got[1] - want[1]).abs() < 1e-9);
        }
    }
}

#[test]
fn cli_dft_inverse_with_padding() {
    let output = fourier_bin()
        .args(["dft", "4", "--pad", "4", "--inverse", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    // Inverse of [4, 0, 0, 0] is a constant 1
    for pair in parse_pairs(&output.stdout) {
        assert!((pair[0] - 1.0).abs() < 1e-12 && pair[1].abs() < 1e-12);
    }
}

#[test]
fn cli_dft_negative_values_and_table() {
    let output = fourier_bin().args(["dft", "-1.5", "2"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("phase"), "got: {stdout}");
    assert!(stdout.contains("0.500000"), "DC bin should be 0.5, got: {stdout}");
}

#[test]
fn cli_dft_fft_rejects_odd_length() {
    let output = fourier_bin()
        .args(["dft", "1", "2", "3", "--algorithm", "fft"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("power-of-two"), "got: {stderr}");
}

// ---------------------------------------------------------------------------
// `fourier equalize`
// ---------------------------------------------------------------------------

#[test]
fn cli_equalize_mute_all_bands() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");
    let samples: Vec<f64> = (0..3000).map(|i| (i as f64 * 0.1).sin() * 0.5).collect();
    write_wav(&input, &samples, WavSpec::mono(16000, 16)).unwrap();

    let status = fourier_bin()
        .arg("equalize")
        .arg(&input)
        .arg(&output)
        .args(["--gains", "0,0,0,0,0", "--algorithm", "fft", "--chunk-size", "256"])
        .output()
        .unwrap();
    assert!(status.status.success(), "{status:?}");

    let (result, spec) = read_wav(&output).unwrap();
    assert_eq!(result.len(), samples.len());
    assert_eq!(spec.sample_rate, 16000);
    assert_eq!(spec.bits_per_sample, 16);
    assert!(result.iter().all(|&x| x == 0.0));
}

#[test]
fn cli_equalize_factory_preset_float_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");
    let samples: Vec<f64> = (0..2048).map(|i| ((i % 50) as f64 / 50.0) - 0.5).collect();
    write_wav(&input, &samples, WavSpec::mono(8000, 24)).unwrap();

    let status = fourier_bin()
        .arg("equalize")
        .arg(&input)
        .arg(&output)
        .args(["--preset", "flat", "--bit-depth", "32"])
        .output()
        .unwrap();
    assert!(status.status.success(), "{status:?}");

    let (result, spec) = read_wav(&output).unwrap();
    assert_eq!(spec.bits_per_sample, 32);
    for (a, b) in samples.iter().zip(&result) {
        assert!((a - b).abs() < 1e-5);
    }
}

#[test]
fn cli_equalize_rejects_bad_gains() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.wav");
    write_wav(&input, &[0.0; 16], WavSpec::mono(8000, 16)).unwrap();

    for gains in ["1,1,1", "1,1,1,1,5"] {
        let output = fourier_bin()
            .arg("equalize")
            .arg(&input)
            .arg(dir.path().join("out.wav"))
            .args(["--gains", gains])
            .output()
            .unwrap();
        assert!(!output.status.success(), "gains {gains} should fail");
    }
}

// ---------------------------------------------------------------------------
// `fourier epicycles`
// ---------------------------------------------------------------------------

#[test]
fn cli_epicycles_writes_json() {
    let dir = tempdir().unwrap();
    let points = dir.path().join("square.csv");
    let json = dir.path().join("terms.json");
    std::fs::write(&points, "# square\n0,0\n1,0\n1,1\n0,1\n").unwrap();

    let output = fourier_bin()
        .arg("epicycles")
        .arg(&points)
        .args(["--algorithm", "fft", "--step", "2", "--output"])
        .arg(&json)
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("center: (0.500000, 0.500000)"), "got: {stdout}");
    assert!(stdout.contains("tip: (1.000000, 1.000000)"), "got: {stdout}");

    let exported: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(exported["period"], 4);
    assert_eq!(exported["terms"].as_array().unwrap().len(), 4);
}

#[test]
fn cli_epicycles_fft_needs_power_of_two() {
    let dir = tempdir().unwrap();
    let points = dir.path().join("tri.csv");
    std::fs::write(&points, "0,0\n1,0\n0,1\n").unwrap();

    let failed = fourier_bin()
        .arg("epicycles")
        .arg(&points)
        .args(["--algorithm", "fft"])
        .output()
        .unwrap();
    assert!(!failed.status.success());

    let resampled = fourier_bin()
        .arg("epicycles")
        .arg(&points)
        .args(["--algorithm", "fft", "--resample", "8", "--terms", "3"])
        .output()
        .unwrap();
    assert!(resampled.status.success(), "{resampled:?}");
    assert!(String::from_utf8_lossy(&resampled.stdout).contains("3 circles"));
}

// ---------------------------------------------------------------------------
// `fourier presets`
// ---------------------------------------------------------------------------

#[test]
fn cli_presets_lists_factory_curves() {
    let output = fourier_bin().arg("presets").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["flat", "bass_boost", "treble_cut", "voice", "mid_scoop"] {
        assert!(stdout.contains(name), "missing '{name}' in: {stdout}");
    }
}

#[test]
fn cli_presets_show_and_unknown() {
    let output = fourier_bin().args(["presets", "voice"]).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("name = \"Voice\""));

    let missing = fourier_bin().args(["presets", "nope"]).output().unwrap();
    assert!(!missing.status.success());
}
