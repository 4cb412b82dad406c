//! Recursive radix-2 Cooley–Tukey FFT.
//!
//! # Algorithm
//!
//! For a power-of-two length `N`, the sequence splits into even- and
//! odd-indexed halves `E` and `O`, each transformed recursively at length
//! `N/2`, then combined with the butterfly:
//!
//! ```text
//! w      = exp(−2πi·k/N)
//! X[k]       = E[k] + w·O[k]
//! X[k + N/2] = E[k] − w·O[k]        for k in 0..N/2
//! ```
//!
//! The recursion never slices out new arrays. Each level reads the input
//! through an index stride (even half: stride doubled, odd half: offset by one
//! stride) and writes into its own half of a single output buffer, so the
//! whole transform allocates one output vector and one twiddle table. The
//! butterflies then run in place over that buffer. Recursion depth is
//! `log₂ N`.
//!
//! # Inverse
//!
//! The inverse uses the conjugate identity rather than a second recursion:
//!
//! ```text
//! IDFT(X) = conj(DFT(conj(X))) / N
//! ```
//!
//! so it shares the forward path's numerical behaviour exactly.
//!
//! Reference: J. W. Cooley and J. W. Tukey, "An algorithm for the machine
//! calculation of complex Fourier series", Math. Comp. 19 (1965).

use crate::{Complex64, Error, Result, Transform};
use std::f64::consts::PI;

/// Radix-2 decimation-in-time FFT for power-of-two lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Radix2Fft;

impl Radix2Fft {
    /// Reject lengths that are not powers of two (zero is accepted).
    fn check_len(len: usize) -> Result<()> {
        if len > 1 && !len.is_power_of_two() {
            #[cfg(feature = "tracing")]
            tracing::debug!(len, "radix2: rejecting non power-of-two length");
            return Err(Error::InvalidLength { len });
        }
        Ok(())
    }

    fn forward(samples: &[Complex64]) -> Vec<Complex64> {
        let n = samples.len();
        if n <= 1 {
            return samples.to_vec();
        }

        // w_N^j for j in 0..N/2; a level of size m uses every (N/m)-th entry
        let base = -2.0 * PI / n as f64;
        let twiddles: Vec<Complex64> = (0..n / 2)
            .map(|j| Complex64::from_polar(1.0, base * j as f64))
            .collect();

        let mut output = vec![Complex64::new(0.0, 0.0); n];
        transform_strided(samples, 1, &mut output, &twiddles);
        output
    }
}

/// Transform `input[0], input[stride], input[2·stride], …` into `output`.
///
/// `output.len()` is the length of this sub-transform and must be a power of
/// two. `twiddles` is the top-level table of length `N/2`.
fn transform_strided(
    input: &[Complex64],
    stride: usize,
    output: &mut [Complex64],
    twiddles: &[Complex64],
) {
    let n = output.len();
    if n == 1 {
        output[0] = input[0];
        return;
    }

    let half = n / 2;
    let (evens, odds) = output.split_at_mut(half);
    transform_strided(input, stride * 2, evens, twiddles);
    transform_strided(&input[stride..], stride * 2, odds, twiddles);

    // Twiddle for this level: exp(−2πi·k/n) = w_N^(k·N/n), and N/n == stride
    for k in 0..half {
        let t = twiddles[k * stride] * odds[k];
        let e = evens[k];
        evens[k] = e + t;
        odds[k] = e - t;
    }
}

impl Transform for Radix2Fft {
    fn name(&self) -> &'static str {
        "fft"
    }

    fn compute_dft(&self, samples: &[Complex64]) -> Result<Vec<Complex64>> {
        Self::check_len(samples.len())?;
        Ok(Self::forward(samples))
    }

    fn compute_idft(&self, spectrum: &[Complex64]) -> Result<Vec<Complex64>> {
        let n = spectrum.len();
        Self::check_len(n)?;
        if n == 0 {
            return Ok(Vec::new());
        }

        let conjugated: Vec<Complex64> = spectrum.iter().map(|c| c.conj()).collect();
        let scale = 1.0 / n as f64;
        Ok(Self::forward(&conjugated)
            .into_iter()
            .map(|c| c.conj() * scale)
            .collect())
    }
}
