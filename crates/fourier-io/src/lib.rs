//! File I/O for the fourier tools.
//!
//! - **WAV**: [`read_wav`] loads any PCM or float file as mono `f64` samples,
//!   [`write_wav`] saves them back as 16/24-bit PCM or 32-bit float
//! - **Point lists**: [`read_points`] and [`parse_points`] load `x,y` drawing
//!   paths for the epicycle decomposer
//!
//! ```rust,ignore
//! use fourier_io::{read_wav, write_wav};
//!
//! let (samples, spec) = read_wav("input.wav")?;
//! write_wav("copy.wav", &samples, spec)?;
//! ```

mod points;
mod wav;

pub use points::{parse_points, read_points};
pub use wav::{WavSpec, read_wav, write_wav};

/// Error types for file I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Bit depth other than 16, 24 or 32 requested for output.
    #[error("unsupported output bit depth: {0} (expected 16, 24 or 32)")]
    UnsupportedBitDepth(u16),

    /// A point-list line that is not an `x,y` pair of numbers.
    #[error("line {line}: expected `x,y`, got {content:?}")]
    MalformedPoint {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for file I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
