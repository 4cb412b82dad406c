//! Fourier Core - discrete Fourier transform primitives
//!
//! This crate provides the transform engine shared by the rest of the workspace:
//!
//! - [`Signal`] - Complex sample buffer with zero-pad/truncate and linear resampling
//! - [`Transform`] - Capability trait: sequence → spectrum, spectrum → sequence
//! - [`NaiveDft`] - Direct O(N²) summation, the reference implementation
//! - [`Radix2Fft`] - Recursive Cooley–Tukey FFT for power-of-two lengths
//! - [`Algorithm`] - Caller-side selector between the two implementations
//!
//! # Conventions
//!
//! The forward transform is unnormalized and the inverse carries the `1/N`
//! factor:
//!
//! ```text
//! X[k] = Σ x[n]·exp(−2πi·k·n/N)
//! x[n] = (1/N)·Σ X[k]·exp(+2πi·k·n/N)
//! ```
//!
//! Bin `k` represents `k/N` cycles per sample; bins above `N/2` alias to
//! negative frequencies.
//!
//! # Example
//!
//! ```rust
//! use fourier_core::{Algorithm, Signal, Transform};
//!
//! let signal = Signal::from_real(&[1.0, 2.0, 3.0, 4.0]);
//! let spectrum = Algorithm::Fft.compute_dft(signal.as_slice()).unwrap();
//! assert!((spectrum[0].re - 10.0).abs() < 1e-12);
//!
//! let restored = Algorithm::Fft.compute_idft(&spectrum).unwrap();
//! assert!((restored[3].re - 4.0).abs() < 1e-12);
//! ```
//!
//! The radix-2 FFT never pads silently; non-power-of-two data must go through
//! [`Signal::pad`] or [`Signal::interpolate`] first.

mod error;
pub mod naive;
pub mod radix2;
pub mod signal;
pub mod transform;

pub use error::{Error, Result};
pub use naive::NaiveDft;
pub use radix2::Radix2Fft;
pub use signal::Signal;
pub use transform::{Algorithm, Transform};

/// Complex sample type used throughout the workspace.
pub use rustfft::num_complex::Complex64;
