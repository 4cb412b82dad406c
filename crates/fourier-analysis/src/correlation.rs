//! Circular convolution and cross-correlation.
//!
//! Both operate on equal-length sequences and wrap indices modulo `N`:
//!
//! ```text
//! (x ⊛ h)[n] = Σ_m x[m]·h[(n − m) mod N]
//! r_xy[n]    = Σ_m x[m + n]·conj(y[m])      = IDFT(X·conj(Y))
//! ```
//!
//! The transform-based variants rely on the convolution theorem, so they run
//! in O(N log N) with the radix-2 FFT (power-of-two lengths) or O(N²) with
//! the naive DFT (any length).

use fourier_core::{Complex64, Error, Result, Transform};

fn check_lengths(x: &[Complex64], y: &[Complex64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    Ok(())
}

/// Direct O(N²) circular convolution.
pub fn circular_convolution(x: &[Complex64], h: &[Complex64]) -> Result<Vec<Complex64>> {
    check_lengths(x, h)?;
    let n = x.len();
    Ok((0..n)
        .map(|i| {
            x.iter()
                .enumerate()
                .map(|(m, &xm)| xm * h[(i + n - m) % n])
                .sum()
        })
        .collect())
}

/// Circular convolution through the frequency domain: `IDFT(DFT(x)·DFT(h))`.
pub fn circular_convolution_via<T: Transform + ?Sized>(
    x: &[Complex64],
    h: &[Complex64],
    transform: &T,
) -> Result<Vec<Complex64>> {
    check_lengths(x, h)?;
    let xs = transform.compute_dft(x)?;
    let hs = transform.compute_dft(h)?;
    let product: Vec<Complex64> = xs.iter().zip(&hs).map(|(a, b)| a * b).collect();
    transform.compute_idft(&product)
}

/// Circular cross-correlation `IDFT(X·conj(Y))`.
///
/// Lag `n` of the result measures how well `x` shifted left by `n` matches
/// `y`; the peak lag of `cross_correlation(x, x)` is 0.
pub fn cross_correlation<T: Transform + ?Sized>(
    x: &[Complex64],
    y: &[Complex64],
    transform: &T,
) -> Result<Vec<Complex64>> {
    check_lengths(x, y)?;
    let xs = transform.compute_dft(x)?;
    let ys = transform.compute_dft(y)?;
    let product: Vec<Complex64> = xs.iter().zip(&ys).map(|(a, b)| a * b.conj()).collect();
    transform.compute_idft(&product)
}
