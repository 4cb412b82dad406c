//! The transform capability and the caller-side algorithm selector.

use crate::{Complex64, NaiveDft, Radix2Fft, Result};
use std::fmt;
use std::str::FromStr;

/// A discrete Fourier transform implementation.
///
/// Implementations agree on conventions: `compute_dft` is unnormalized and
/// `compute_idft` divides by `N`, so `compute_idft(compute_dft(x)) == x` up to
/// rounding. Both return sequences of the same length as their input.
pub trait Transform {
    /// Short human-readable name of the algorithm.
    fn name(&self) -> &'static str;

    /// Forward transform: time-domain samples to spectrum.
    fn compute_dft(&self, samples: &[Complex64]) -> Result<Vec<Complex64>>;

    /// Inverse transform: spectrum to time-domain samples.
    fn compute_idft(&self, spectrum: &[Complex64]) -> Result<Vec<Complex64>>;
}

impl<T: Transform + ?Sized> Transform for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn compute_dft(&self, samples: &[Complex64]) -> Result<Vec<Complex64>> {
        (**self).compute_dft(samples)
    }

    fn compute_idft(&self, spectrum: &[Complex64]) -> Result<Vec<Complex64>> {
        (**self).compute_idft(spectrum)
    }
}

/// Selects which [`Transform`] implementation a caller runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Direct O(N²) summation, any length.
    #[default]
    Naive,
    /// Recursive radix-2 FFT, power-of-two lengths only.
    Fft,
}

impl Algorithm {
    /// All selectable algorithms.
    pub const ALL: [Algorithm; 2] = [Algorithm::Naive, Algorithm::Fft];

    /// True if this algorithm accepts a sequence of `len` samples.
    pub fn supports_len(self, len: usize) -> bool {
        match self {
            Algorithm::Naive => true,
            Algorithm::Fft => len == 0 || len.is_power_of_two(),
        }
    }
}

impl Transform for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Algorithm::Naive => NaiveDft.name(),
            Algorithm::Fft => Radix2Fft.name(),
        }
    }

    fn compute_dft(&self, samples: &[Complex64]) -> Result<Vec<Complex64>> {
        match self {
            Algorithm::Naive => NaiveDft.compute_dft(samples),
            Algorithm::Fft => Radix2Fft.compute_dft(samples),
        }
    }

    fn compute_idft(&self, spectrum: &[Complex64]) -> Result<Vec<Complex64>> {
        match self {
            Algorithm::Naive => NaiveDft.compute_idft(spectrum),
            Algorithm::Fft => Radix2Fft.compute_idft(spectrum),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Naive => "naive",
            Algorithm::Fft => "fft",
        })
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "naive" | "dft" => Ok(Algorithm::Naive),
            "fft" | "radix2" | "radix-2" => Ok(Algorithm::Fft),
            other => Err(format!("unknown algorithm '{other}' (expected naive or fft)")),
        }
    }
}
