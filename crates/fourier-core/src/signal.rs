//! Complex sample buffer with resize operations.
//!
//! A [`Signal`] is an ordered sequence of complex samples. Real-valued inputs
//! carry a zero imaginary part; drawn 2-D points map `x + iy`. Resize
//! operations never mutate in place, they return a new buffer.
//!
//! # Example
//!
//! ```rust
//! use fourier_core::Signal;
//!
//! let signal = Signal::from_real(&[0.0, 1.0, 2.0]);
//!
//! // Zero-pad to the next power of two for the radix-2 FFT
//! let padded = signal.pad_to_power_of_two();
//! assert_eq!(padded.len(), 4);
//!
//! // Or resample the same shape onto 5 points
//! let resampled = signal.interpolate(5).unwrap();
//! assert!((resampled.as_slice()[1].re - 0.5).abs() < 1e-12);
//! ```

use crate::{Complex64, Error, Result};

/// Ordered sequence of complex samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signal {
    data: Vec<Complex64>,
}

impl Signal {
    /// Wrap an existing complex buffer.
    pub fn new(data: Vec<Complex64>) -> Self {
        Self { data }
    }

    /// Build a signal from real samples (imaginary parts are zero).
    pub fn from_real(samples: &[f64]) -> Self {
        samples.iter().map(|&x| Complex64::new(x, 0.0)).collect()
    }

    /// Build a signal from 2-D points, mapping `(x, y)` to `x + iy`.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        points.iter().map(|&(x, y)| Complex64::new(x, y)).collect()
    }

    /// A signal of `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![Complex64::new(0.0, 0.0); len],
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the signal holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the samples.
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Consume the signal, returning its samples.
    pub fn into_inner(self) -> Vec<Complex64> {
        self.data
    }

    /// Real component of every sample.
    pub fn real_parts(&self) -> Vec<f64> {
        self.data.iter().map(|c| c.re).collect()
    }

    /// Zero-pad or truncate to exactly `new_len` samples.
    ///
    /// The leading `min(len, new_len)` samples are copied and the remainder
    /// is zero-filled. Never fails; `new_len == 0` yields an empty signal.
    pub fn pad(&self, new_len: usize) -> Self {
        let keep = self.data.len().min(new_len);
        let mut data = Vec::with_capacity(new_len);
        data.extend_from_slice(&self.data[..keep]);
        data.resize(new_len, Complex64::new(0.0, 0.0));
        Self { data }
    }

    /// Zero-pad to the next power of two (no-op when already a power of two).
    ///
    /// An empty signal pads to a single zero sample.
    pub fn pad_to_power_of_two(&self) -> Self {
        self.pad(self.data.len().next_power_of_two())
    }

    /// Resample to `new_len` points with piecewise-linear interpolation.
    ///
    /// The source index domain `[0, N-1]` is mapped uniformly onto
    /// `[0, new_len-1]`, so the first and last samples are preserved exactly.
    /// Real and imaginary parts are interpolated independently.
    ///
    /// `new_len == 0` yields an empty signal and `new_len == 1` yields the
    /// first sample.
    ///
    /// # Errors
    ///
    /// [`Error::DegenerateInput`] when the source has fewer than two samples.
    pub fn interpolate(&self, new_len: usize) -> Result<Self> {
        let n = self.data.len();
        if n < 2 {
            return Err(Error::DegenerateInput { len: n });
        }
        if new_len == 0 {
            return Ok(Self::default());
        }
        if new_len == 1 {
            return Ok(Self::new(vec![self.data[0]]));
        }

        let step = (n - 1) as f64 / (new_len - 1) as f64;
        let data = (0..new_len)
            .map(|i| {
                let pos = i as f64 * step;
                // Clamp so the final point lands on the last segment
                let idx = (pos.floor() as usize).min(n - 2);
                let frac = pos - idx as f64;
                let a = self.data[idx];
                let b = self.data[idx + 1];
                Complex64::new(a.re + (b.re - a.re) * frac, a.im + (b.im - a.im) * frac)
            })
            .collect();

        Ok(Self { data })
    }
}

impl From<Vec<Complex64>> for Signal {
    fn from(data: Vec<Complex64>) -> Self {
        Self::new(data)
    }
}

impl FromIterator<Complex64> for Signal {
    fn from_iter<I: IntoIterator<Item = Complex64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[Complex64]> for Signal {
    fn as_ref(&self) -> &[Complex64] {
        &self.data
    }
}
