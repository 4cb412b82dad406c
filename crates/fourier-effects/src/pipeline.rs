//! Chunked equalizer pipeline.
//!
//! Splits a signal of any length into consecutive `chunk_size` frames, runs
//! each frame through a [`BandFilter`], and concatenates the results. The last
//! frame is zero-padded by the filter and truncated back, so the output is
//! always exactly as long as the input.
//!
//! Frames are independent: no overlap, no windowing, no state carried from
//! one frame to the next. If any frame fails, the whole run fails; a partial
//! output is never returned.

use crate::{BandFilter, BandGains, Result};
use fourier_core::{Algorithm, Transform};

/// Default frame length in samples.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Sequential chunk-by-chunk equalizer.
#[derive(Debug, Clone)]
pub struct ChunkPipeline<T = Algorithm> {
    filter: BandFilter<T>,
}

impl ChunkPipeline<Algorithm> {
    /// Create a pipeline that uses one of the built-in algorithms.
    pub fn new(chunk_size: usize, gains: BandGains, algorithm: Algorithm) -> Result<Self> {
        Self::with_transform(chunk_size, gains, algorithm)
    }
}

impl<T: Transform> ChunkPipeline<T> {
    /// Create a pipeline around any [`Transform`] implementation.
    pub fn with_transform(chunk_size: usize, gains: BandGains, transform: T) -> Result<Self> {
        Ok(Self {
            filter: BandFilter::new(chunk_size, gains, transform)?,
        })
    }

    /// Frame length in samples.
    pub fn chunk_size(&self) -> usize {
        self.filter.chunk_size()
    }

    /// Current band gains.
    pub fn gains(&self) -> &BandGains {
        self.filter.gains()
    }

    /// Replace the band gains.
    pub fn set_gains(&mut self, gains: BandGains) {
        self.filter.set_gains(gains);
    }

    /// The per-frame filter.
    pub fn filter(&self) -> &BandFilter<T> {
        &self.filter
    }

    /// Number of frames needed for `len` samples.
    pub fn chunk_count(&self, len: usize) -> usize {
        len.div_ceil(self.chunk_size())
    }

    /// Equalize `input`. The output has the same length.
    pub fn process(&self, input: &[f64]) -> Result<Vec<f64>> {
        self.process_with_progress(input, |_, _| {})
    }

    /// Equalize `input`, calling `on_chunk(done, total)` after every frame.
    pub fn process_with_progress<F>(&self, input: &[f64], mut on_chunk: F) -> Result<Vec<f64>>
    where
        F: FnMut(usize, usize),
    {
        let total = self.chunk_count(input.len());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            samples = input.len(),
            chunks = total,
            chunk_size = self.chunk_size(),
            transform = self.filter.transform().name(),
            "equalizer: start"
        );

        let mut output = Vec::with_capacity(input.len());
        for (index, chunk) in input.chunks(self.chunk_size()).enumerate() {
            let filtered = match self.filter.process_chunk(chunk) {
                Ok(filtered) => filtered,
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(chunk = index, error = %err, "equalizer: chunk failed");
                    return Err(err);
                }
            };
            output.extend_from_slice(&filtered);
            on_chunk(index + 1, total);
        }

        Ok(output)
    }
}
