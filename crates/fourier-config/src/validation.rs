//! Checks a preset before it is turned into a pipeline.
//!
//! All problems are collected so a user sees every bad field at once.
//!
//! ```rust
//! use fourier_config::{EqualizerPreset, validate_preset, ValidationError};
//! use fourier_core::Algorithm;
//!
//! let mut preset = EqualizerPreset::new("odd");
//! preset.algorithm = Algorithm::Fft;
//! preset.chunk_size = 1000;
//!
//! assert!(matches!(
//!     validate_preset(&preset),
//!     Err(ValidationError::ChunkSizeNotPowerOfTwo { chunk_size: 1000 })
//! ));
//! ```

use crate::EqualizerPreset;
use fourier_core::Algorithm;
use fourier_effects::{BAND_LABELS, MAX_BAND_GAIN};
use thiserror::Error;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the parameter.
        param: String,
        /// The value that was out of range.
        value: f64,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
    },

    /// Chunk size of zero.
    #[error("chunk size must be at least 1")]
    ZeroChunkSize,

    /// The radix-2 FFT was selected with a chunk size it cannot transform.
    #[error("chunk size {chunk_size} is not a power of two (required by the fft algorithm)")]
    ChunkSizeNotPowerOfTwo {
        /// The rejected chunk size.
        chunk_size: usize,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate every field of a preset.
///
/// Returns the single error directly, or [`ValidationError::Multiple`] when
/// more than one field is wrong.
pub fn validate_preset(preset: &EqualizerPreset) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if preset.chunk_size == 0 {
        errors.push(ValidationError::ZeroChunkSize);
    } else if !preset.algorithm.supports_len(preset.chunk_size) {
        debug_assert_eq!(preset.algorithm, Algorithm::Fft);
        errors.push(ValidationError::ChunkSizeNotPowerOfTwo {
            chunk_size: preset.chunk_size,
        });
    }

    for (label, &gain) in BAND_LABELS.iter().zip(&preset.gains) {
        if !gain.is_finite() || !(0.0..=MAX_BAND_GAIN).contains(&gain) {
            errors.push(ValidationError::OutOfRange {
                param: label.to_lowercase(),
                value: gain,
                min: 0.0,
                max: MAX_BAND_GAIN,
            });
        }
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}
