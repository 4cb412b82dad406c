//! Fourier Effects - spectral-band equalizer
//!
//! - [`BandFilter`] - Filters one chunk: forward transform, per-band gain,
//!   inverse transform
//! - [`ChunkPipeline`] - Splits a long signal into fixed-size chunks and runs
//!   each through a [`BandFilter`]
//! - [`BandGains`] - Validated table of five band multipliers
//!
//! ## Example
//!
//! ```rust
//! use fourier_core::Algorithm;
//! use fourier_effects::{BandGains, ChunkPipeline};
//!
//! // Cut the two highest bands, leave the rest alone
//! let gains = BandGains::new([1.0, 1.0, 1.0, 0.0, 0.0]).unwrap();
//! let eq = ChunkPipeline::new(256, gains, Algorithm::Fft).unwrap();
//!
//! let input: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.05).sin()).collect();
//! let output = eq.process(&input).unwrap();
//! assert_eq!(output.len(), input.len());
//! ```
//!
//! ## Limitations
//!
//! Chunks are filtered independently with no windowing and no overlap-add,
//! so a strong gain change can leave audible discontinuities at chunk
//! boundaries.

mod error;
pub mod band_filter;
pub mod pipeline;

pub use band_filter::{
    BAND_LABELS, BandFilter, BandGains, MAX_BAND_GAIN, NUM_BANDS, apply_band_gains, band_ranges,
};
pub use error::{Error, Result};
pub use pipeline::{ChunkPipeline, DEFAULT_CHUNK_SIZE};
