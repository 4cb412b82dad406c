//! Error metrics for comparing complex sequences

use fourier_core::{Complex64, Error, Result};

/// Guard added to the reference norm in [`rel_l2_error`].
const EPS: f64 = 1e-12;

fn check_lengths(a: &[Complex64], b: &[Complex64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Largest pointwise distance `max |a[n] − b[n]|`.
///
/// Returns 0.0 for two empty sequences.
pub fn max_abs_error(a: &[Complex64], b: &[Complex64]) -> Result<f64> {
    check_lengths(a, b)?;
    Ok(a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, f64::max))
}

/// Relative L2 error `‖a − b‖₂ / (‖a‖₂ + ε)`, with `a` as the reference.
pub fn rel_l2_error(a: &[Complex64], b: &[Complex64]) -> Result<f64> {
    check_lengths(a, b)?;
    let diff: f64 = a.iter().zip(b).map(|(x, y)| (x - y).norm_sqr()).sum();
    Ok(diff.sqrt() / (energy(a).sqrt() + EPS))
}

/// Signal energy `Σ |x[n]|²`.
///
/// By Parseval, `energy(x) == energy(X) / N` for a spectrum `X` of `x`.
pub fn energy(x: &[Complex64]) -> f64 {
    x.iter().map(|c| c.norm_sqr()).sum()
}
