//! Five-band equalizer over a WAV file.

use clap::Args;
use fourier_config::{ConfigError, EqualizerPreset, get_factory_preset};
use fourier_core::Algorithm;
use fourier_effects::{BAND_LABELS, NUM_BANDS};
use fourier_io::{WavSpec, read_wav, write_wav};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct EqualizeArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Five comma-separated band gains in [0, 2], lowest band first
    #[arg(short, long, value_delimiter = ',', num_args = 1..)]
    gains: Option<Vec<f64>>,

    /// Factory preset name or preset file (TOML)
    #[arg(short, long)]
    preset: Option<String>,

    /// Transform implementation (naive or fft)
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Samples per chunk
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Output bit depth (16, 24, or 32); defaults to the input's
    #[arg(long)]
    bit_depth: Option<u16>,
}

pub fn run(args: EqualizeArgs) -> anyhow::Result<()> {
    let mut preset = match &args.preset {
        Some(name) => load_preset(name)?,
        None => EqualizerPreset::default(),
    };
    if let Some(algorithm) = args.algorithm {
        preset.algorithm = algorithm;
    }
    if let Some(chunk_size) = args.chunk_size {
        preset.chunk_size = chunk_size;
    }
    if let Some(gains) = &args.gains {
        preset.gains = gains.as_slice().try_into().map_err(|_| {
            anyhow::anyhow!("expected {NUM_BANDS} gains, got {}", gains.len())
        })?;
    }
    let pipeline = preset.to_pipeline()?;

    println!("Reading {}...", args.input.display());
    let (samples, spec) = read_wav(&args.input)?;
    println!(
        "  {} samples, {} Hz, {:.2}s",
        samples.len(),
        spec.sample_rate,
        samples.len() as f64 / f64::from(spec.sample_rate.max(1))
    );
    if spec.channels > 1 {
        println!("  mixed {} channels down to mono", spec.channels);
    }

    println!(
        "Equalizing with {} ({}, chunk size {})",
        preset.name, preset.algorithm, preset.chunk_size
    );
    for (label, gain) in BAND_LABELS.iter().zip(&preset.gains) {
        println!("  {label:<9} x{gain:.2}");
    }

    let pb = ProgressBar::new(pipeline.chunk_count(samples.len()) as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} chunks ({eta})")?
            .progress_chars("##-"),
    );
    let output = pipeline.process_with_progress(&samples, |done, _| pb.set_position(done as u64));
    let output = match output {
        Ok(output) => {
            pb.finish_with_message("done");
            output
        }
        Err(err) => {
            pb.abandon();
            return Err(err.into());
        }
    };

    let bits = args.bit_depth.unwrap_or(match spec.bits_per_sample {
        bits @ (16 | 24 | 32) => bits,
        _ => 16,
    });
    println!("Writing {}...", args.output.display());
    write_wav(&args.output, &output, WavSpec::mono(spec.sample_rate, bits))?;
    tracing::info!(samples = output.len(), bits, "equalized output written");
    println!("Done!");

    Ok(())
}

/// A `.toml` path or existing file is loaded from disk; anything else is a
/// factory preset name.
fn load_preset(name: &str) -> Result<EqualizerPreset, ConfigError> {
    let path = Path::new(name);
    if path.extension().is_some_and(|ext| ext == "toml") || path.is_file() {
        return EqualizerPreset::load(path);
    }
    get_factory_preset(name).ok_or_else(|| ConfigError::PresetNotFound(name.to_string()))
}
