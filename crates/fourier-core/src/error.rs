//! Error types for transform and buffer operations.

use thiserror::Error;

/// Errors raised by the transform engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The radix-2 FFT was given a length that is not a power of two.
    #[error("radix-2 FFT requires a power-of-two length, got {len}")]
    InvalidLength {
        /// Length of the rejected sequence.
        len: usize,
    },

    /// Linear interpolation needs at least two source samples.
    #[error("interpolation needs at least 2 samples, got {len}")]
    DegenerateInput {
        /// Length of the rejected sequence.
        len: usize,
    },

    /// Two sequences that must share a length do not.
    #[error("sequence lengths differ: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },
}

/// Convenience result type for transform operations.
pub type Result<T> = std::result::Result<T, Error>;
