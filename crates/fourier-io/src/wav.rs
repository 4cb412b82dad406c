//! WAV file reading and writing.

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// WAV file specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth per sample (16, 24 or 32 for output).
    pub bits_per_sample: u16,
}

impl WavSpec {
    /// Single-channel spec.
    pub fn mono(sample_rate: u32, bits_per_sample: u16) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample,
        }
    }
}

impl Default for WavSpec {
    fn default() -> Self {
        Self::mono(44100, 16)
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: if spec.bits_per_sample == 32 {
                SampleFormat::Float
            } else {
                SampleFormat::Int
            },
        }
    }
}

/// Read a WAV file as mono `f64` samples along with its original spec.
///
/// Integer PCM is normalized by `2^(bits-1)` into `[-1, 1)`. Multi-channel
/// files are mixed down by averaging each frame.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f64>, WavSpec)> {
    let reader = WavReader::open(path)?;
    let spec = WavSpec::from(reader.spec());
    let channels = usize::from(spec.channels.max(1));

    let samples: Vec<f64> = match reader.spec().sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = f64::from(1u32 << (spec.bits_per_sample - 1));
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| f64::from(v) / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let mono = if channels > 1 {
        samples
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f64>() / channels as f64)
            .collect()
    } else {
        samples
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        samples = mono.len(),
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        bits = spec.bits_per_sample,
        "read wav"
    );

    Ok((mono, spec))
}

/// Write samples to a WAV file.
///
/// 32-bit output is IEEE float; 16 and 24-bit output is integer PCM with
/// samples clamped to the representable range. Samples are interleaved
/// according to `spec.channels`, so pass a mono spec for mono data.
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f64], spec: WavSpec) -> Result<()> {
    if !matches!(spec.bits_per_sample, 16 | 24 | 32) {
        return Err(Error::UnsupportedBitDepth(spec.bits_per_sample));
    }

    let mut writer = WavWriter::create(path, hound::WavSpec::from(spec))?;

    if spec.bits_per_sample == 32 {
        for &sample in samples {
            writer.write_sample(sample as f32)?;
        }
    } else {
        let max_val = f64::from(1u32 << (spec.bits_per_sample - 1));
        for &sample in samples {
            let int_sample = (sample * max_val).round().clamp(-max_val, max_val - 1.0) as i32;
            writer.write_sample(int_sample)?;
        }
    }

    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn ramp(len: usize) -> Vec<f64> {
        (0..len).map(|i| i as f64 / len as f64 * 1.6 - 0.8).collect()
    }

    #[test]
    fn float_roundtrip_is_exact_to_f32() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("f.wav");
        let samples = ramp(500);
        write_wav(&path, &samples, WavSpec::mono(48000, 32)).unwrap();

        let (back, spec) = read_wav(&path).unwrap();
        assert_eq!(spec, WavSpec::mono(48000, 32));
        for (a, b) in samples.iter().zip(&back) {
            assert_eq!(*b, f64::from(*a as f32));
        }
    }

    #[test]
    fn pcm_roundtrip_within_quantization() {
        let dir = tempdir().unwrap();
        for bits in [16u16, 24] {
            let path = dir.path().join(format!("p{bits}.wav"));
            let samples = ramp(300);
            write_wav(&path, &samples, WavSpec::mono(22050, bits)).unwrap();
            let (back, spec) = read_wav(&path).unwrap();
            assert_eq!(spec.bits_per_sample, bits);
            let step = 1.0 / f64::from(1u32 << (bits - 1));
            for (a, b) in samples.iter().zip(&back) {
                assert!((a - b).abs() <= step, "bits={bits}");
            }
        }
    }

    #[test]
    fn pcm_clamps_out_of_range() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clip.wav");
        write_wav(&path, &[2.0, -2.0], WavSpec::mono(8000, 16)).unwrap();
        let (back, _) = read_wav(&path).unwrap();
        assert!((back[0] - 32767.0 / 32768.0).abs() < 1e-12);
        assert_eq!(back[1], -1.0);
    }

    #[test]
    fn stereo_is_mixed_to_mono() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        let spec = WavSpec {
            channels: 2,
            sample_rate: 44100,
            bits_per_sample: 32,
        };
        // Interleaved L/R frames
        write_wav(&path, &[0.5, -0.5, 1.0, 0.0, 0.25, 0.75], spec).unwrap();

        let (mono, read_spec) = read_wav(&path).unwrap();
        assert_eq!(read_spec.channels, 2);
        assert_eq!(mono, vec![0.0, 0.5, 0.5]);
    }

    #[test]
    fn rejects_unsupported_bit_depth() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("x.wav");
        assert!(matches!(
            write_wav(&path, &[0.0], WavSpec::mono(8000, 8)),
            Err(Error::UnsupportedBitDepth(8))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn missing_file_is_error() {
        let dir = tempdir().unwrap();
        assert!(read_wav(dir.path().join("absent.wav")).is_err());
    }
}
