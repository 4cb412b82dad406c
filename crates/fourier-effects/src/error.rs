//! Error types for equalizer operations.

use thiserror::Error;

/// Errors that can occur while filtering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The underlying transform rejected a chunk.
    #[error("transform failed: {0}")]
    Transform(#[from] fourier_core::Error),

    /// Chunk size of zero.
    #[error("chunk size must be at least 1")]
    InvalidChunkSize,

    /// A chunk handed to the band filter is longer than its chunk size.
    #[error("chunk of {len} samples exceeds chunk size {chunk_size}")]
    ChunkTooLong {
        /// Length of the offending chunk.
        len: usize,
        /// Configured chunk size.
        chunk_size: usize,
    },

    /// Band gain outside `[0, MAX_BAND_GAIN]` or not finite.
    #[error("gain {value} for band {band} is outside [0, {max}]")]
    InvalidGain {
        /// Zero-based band index.
        band: usize,
        /// The rejected gain.
        value: f64,
        /// Largest accepted gain.
        max: f64,
    },

    /// Wrong number of band gains.
    #[error("expected {expected} band gains, got {got}")]
    BandCount {
        /// Required number of gains.
        expected: usize,
        /// Number supplied.
        got: usize,
    },
}

/// Convenience result type for equalizer operations.
pub type Result<T> = std::result::Result<T, Error>;
