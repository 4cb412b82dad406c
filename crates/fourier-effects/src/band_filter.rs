//! Five-band spectral gain stage for one chunk.
//!
//! # Band layout
//!
//! The positive-frequency bins `0..=N/2` are split into five equal bands of
//! width `w = (N/2) / 5`. Bands 0..4 cover `[b·w, (b+1)·w)`; the fifth band
//! absorbs the remainder up to and including bin `N/2`.
//!
//! Each positive bin `k` is scaled by its band's gain, and so is its mirror
//! `N − k`, which keeps the spectrum of a real chunk conjugate-symmetric and
//! the resynthesized chunk real. Bin 0 (DC) has no mirror, and for even `N`
//! neither does the Nyquist bin `N/2` (it is its own mirror). Every bin is
//! scaled exactly once.
//!
//! For very short chunks (`N/2 < 5`) the first four bands are empty and the
//! fifth band owns every bin.

use crate::{Error, Result};
use fourier_core::{Complex64, Signal, Transform};
use std::ops::Range;

/// Number of equalizer bands.
pub const NUM_BANDS: usize = 5;

/// Largest accepted band gain (a 2× boost).
pub const MAX_BAND_GAIN: f64 = 2.0;

/// Display names for the bands, lowest first.
pub const BAND_LABELS: [&str; NUM_BANDS] = ["Low", "Low-Mid", "Mid", "High-Mid", "High"];

/// Validated per-band gain multipliers.
///
/// 0.0 silences a band, 1.0 leaves it unchanged, values up to
/// [`MAX_BAND_GAIN`] boost it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandGains([f64; NUM_BANDS]);

impl BandGains {
    /// Validate and wrap five gains.
    pub fn new(gains: [f64; NUM_BANDS]) -> Result<Self> {
        for (band, &value) in gains.iter().enumerate() {
            if !value.is_finite() || !(0.0..=MAX_BAND_GAIN).contains(&value) {
                return Err(Error::InvalidGain {
                    band,
                    value,
                    max: MAX_BAND_GAIN,
                });
            }
        }
        Ok(Self(gains))
    }

    /// The same gain for every band.
    pub fn uniform(gain: f64) -> Result<Self> {
        Self::new([gain; NUM_BANDS])
    }

    /// All bands at 1.0 (identity filter).
    pub const fn unity() -> Self {
        Self([1.0; NUM_BANDS])
    }

    /// Gain of `band` (0 = lowest).
    pub fn get(&self, band: usize) -> f64 {
        self.0[band]
    }

    /// All five gains, lowest band first.
    pub fn as_array(&self) -> [f64; NUM_BANDS] {
        self.0
    }

    /// True if every gain is exactly 1.0.
    pub fn is_unity(&self) -> bool {
        self.0.iter().all(|&g| g == 1.0)
    }
}

impl Default for BandGains {
    fn default() -> Self {
        Self::unity()
    }
}

impl TryFrom<&[f64]> for BandGains {
    type Error = Error;

    fn try_from(gains: &[f64]) -> Result<Self> {
        let array: [f64; NUM_BANDS] = gains.try_into().map_err(|_| Error::BandCount {
            expected: NUM_BANDS,
            got: gains.len(),
        })?;
        Self::new(array)
    }
}

/// Positive-frequency bin ranges of the five bands for a length-`n` spectrum.
///
/// The ranges are contiguous and together cover `0..=n/2`. Empty for `n == 0`.
pub fn band_ranges(n: usize) -> Vec<Range<usize>> {
    if n == 0 {
        return Vec::new();
    }
    let half = n / 2;
    let width = half / NUM_BANDS;
    (0..NUM_BANDS)
        .map(|band| {
            let start = band * width;
            let end = if band == NUM_BANDS - 1 {
                half + 1
            } else {
                start + width
            };
            start..end
        })
        .collect()
}

/// Scale every bin of `spectrum` by its band gain, mirroring onto the
/// negative-frequency bins.
pub fn apply_band_gains(spectrum: &mut [Complex64], gains: &BandGains) {
    let n = spectrum.len();
    for (band, range) in band_ranges(n).into_iter().enumerate() {
        let gain = gains.get(band);
        for k in range {
            spectrum[k] *= gain;
            let mirror = n - k;
            // Skip DC (mirror == n) and the even-N Nyquist bin (mirror == k)
            if k > 0 && mirror != k {
                spectrum[mirror] *= gain;
            }
        }
    }
}

/// Filters a single chunk of real samples.
///
/// The chunk is zero-padded to `chunk_size`, transformed, scaled with
/// [`apply_band_gains`], inverted, and the real part is truncated back to the
/// chunk's original length.
#[derive(Debug, Clone)]
pub struct BandFilter<T> {
    chunk_size: usize,
    gains: BandGains,
    transform: T,
}

impl<T: Transform> BandFilter<T> {
    /// Create a filter for chunks of up to `chunk_size` samples.
    pub fn new(chunk_size: usize, gains: BandGains, transform: T) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::InvalidChunkSize);
        }
        Ok(Self {
            chunk_size,
            gains,
            transform,
        })
    }

    /// Transform length (every chunk is padded to this).
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Current band gains.
    pub fn gains(&self) -> &BandGains {
        &self.gains
    }

    /// Replace the band gains.
    pub fn set_gains(&mut self, gains: BandGains) {
        self.gains = gains;
    }

    /// The transform in use.
    pub fn transform(&self) -> &T {
        &self.transform
    }

    /// Filter one chunk of at most `chunk_size` samples.
    ///
    /// The output has the same length as `chunk`.
    pub fn process_chunk(&self, chunk: &[f64]) -> Result<Vec<f64>> {
        if chunk.len() > self.chunk_size {
            return Err(Error::ChunkTooLong {
                len: chunk.len(),
                chunk_size: self.chunk_size,
            });
        }
        if chunk.is_empty() {
            return Ok(Vec::new());
        }

        let padded = Signal::from_real(chunk).pad(self.chunk_size);
        let mut spectrum = self.transform.compute_dft(padded.as_slice())?;
        apply_band_gains(&mut spectrum, &self.gains);
        let restored = self.transform.compute_idft(&spectrum)?;

        Ok(restored.iter().take(chunk.len()).map(|c| c.re).collect())
    }
}
