//! Direct O(N²) DFT, the reference implementation.
//!
//! ```text
//! X[k] = Σ_{n=0}^{N-1} x[n]·exp(−2πi·k·n/N)
//! x[n] = (1/N)·Σ_{k=0}^{N-1} X[k]·exp(+2πi·k·n/N)
//! ```
//!
//! Works for any length. The exponent index `k·n` is reduced modulo `N`
//! before the angle is formed, which keeps the twiddle argument in
//! `[0, 2π)` and the rounding error independent of `k·n`.

use crate::{Complex64, Result, Transform};
use std::f64::consts::PI;

/// Naive summation DFT.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaiveDft;

impl NaiveDft {
    /// Shared kernel: `sign` is −1 for the forward transform, +1 for inverse.
    fn sum(input: &[Complex64], sign: f64) -> Vec<Complex64> {
        let n = input.len();
        if n == 0 {
            return Vec::new();
        }

        // Twiddle table exp(sign·2πi·j/N) for j in 0..N
        let base = sign * 2.0 * PI / n as f64;
        let twiddles: Vec<Complex64> = (0..n)
            .map(|j| Complex64::from_polar(1.0, base * j as f64))
            .collect();

        (0..n)
            .map(|k| {
                input
                    .iter()
                    .enumerate()
                    .map(|(i, &x)| x * twiddles[(k * i) % n])
                    .sum()
            })
            .collect()
    }
}

impl Transform for NaiveDft {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn compute_dft(&self, samples: &[Complex64]) -> Result<Vec<Complex64>> {
        Ok(Self::sum(samples, -1.0))
    }

    fn compute_idft(&self, spectrum: &[Complex64]) -> Result<Vec<Complex64>> {
        let scale = 1.0 / spectrum.len().max(1) as f64;
        let mut out = Self::sum(spectrum, 1.0);
        for x in &mut out {
            *x *= scale;
        }
        Ok(out)
    }
}
