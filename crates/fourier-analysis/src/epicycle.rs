//! Epicycle decomposition for additive (visual) Fourier resynthesis.
//!
//! Every spectrum bin `k` of a length-`N` spectrum becomes a rotating vector:
//!
//! ```text
//! radius = |X[k]| / N
//! phase  = arg(X[k])
//! v_k(t) = radius · exp(i·(2π·k·t/N + phase))
//! ```
//!
//! Summing `v_k(t)` over all bins reproduces sample `t` of the original
//! sequence (this is the inverse DFT written term by term). Terms are sorted
//! by descending radius so an animator draws the most significant circles
//! first; ties keep their original bin order. The DC term (`k = 0`) is a
//! vector that never rotates, so it fixes the center offset of the drawing.
//!
//! The table is derived data: rebuild it whenever the spectrum changes. The
//! animation step is owned by the caller and passed to [`Epicycles::render`].

use fourier_core::{Complex64, Result, Signal, Transform};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// One rotating vector of the decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpicycleTerm {
    /// Spectrum bin index (revolutions per period).
    pub frequency: usize,
    /// Circle radius, `|X[k]| / N`.
    pub radius: f64,
    /// Initial angle in radians, `arg(X[k])`.
    pub phase: f64,
}

impl EpicycleTerm {
    /// Vector contributed by this term at `step` of a `period`-step cycle.
    pub fn position(&self, step: usize, period: usize) -> Complex64 {
        if period == 0 {
            return Complex64::new(0.0, 0.0);
        }
        // Reduce k·t first so the angle stays small for long periods
        let turns = (self.frequency * (step % period)) % period;
        let angle = 2.0 * PI * turns as f64 / period as f64 + self.phase;
        Complex64::from_polar(self.radius, angle)
    }
}

/// Epicycle table sorted by descending radius.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Epicycles {
    /// Length of the spectrum the terms came from (steps per revolution).
    period: usize,
    terms: Vec<EpicycleTerm>,
}

/// Joint positions of the epicycle chain at one animation step.
#[derive(Debug, Clone, PartialEq)]
pub struct EpicycleFrame {
    /// Step the frame was rendered at, already wrapped into `0..period`.
    pub step: usize,
    /// Cumulative partial sums: `joints[0]` is the origin and `joints[i]` is
    /// the center of circle `i` (the end of the first `i` vectors). The last
    /// joint is the pen tip.
    pub joints: Vec<Complex64>,
    /// Radius of each circle, aligned with `joints[..radii.len()]`.
    pub radii: Vec<f64>,
}

impl EpicycleFrame {
    /// Pen position: the end of the last vector.
    pub fn tip(&self) -> Complex64 {
        self.joints
            .last()
            .copied()
            .unwrap_or_else(|| Complex64::new(0.0, 0.0))
    }

    /// `(center, radius)` of every circle, largest first.
    pub fn circles(&self) -> impl Iterator<Item = (Complex64, f64)> + '_ {
        self.joints.iter().copied().zip(self.radii.iter().copied())
    }
}

impl Epicycles {
    /// Decompose a spectrum into epicycle terms.
    pub fn from_spectrum(spectrum: &[Complex64]) -> Self {
        let period = spectrum.len();
        if period == 0 {
            return Self::default();
        }

        let scale = 1.0 / period as f64;
        let mut terms: Vec<EpicycleTerm> = spectrum
            .iter()
            .enumerate()
            .map(|(frequency, x)| EpicycleTerm {
                frequency,
                radius: x.norm() * scale,
                phase: x.arg(),
            })
            .collect();

        // sort_by is stable: equal radii keep bin order
        terms.sort_by(|a, b| b.radius.total_cmp(&a.radius));

        #[cfg(feature = "tracing")]
        tracing::debug!(period, "epicycles: decomposed spectrum");

        Self { period, terms }
    }

    /// Forward-transform `signal` with `transform` and decompose the result.
    pub fn analyze<T: Transform + ?Sized>(signal: &Signal, transform: &T) -> Result<Self> {
        let spectrum = transform.compute_dft(signal.as_slice())?;
        Ok(Self::from_spectrum(&spectrum))
    }

    /// Steps per revolution (the source spectrum length).
    pub fn period(&self) -> usize {
        self.period
    }

    /// Terms in descending radius order.
    pub fn terms(&self) -> &[EpicycleTerm] {
        &self.terms
    }

    /// Number of terms kept.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if there are no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Center offset of the drawing: the DC term `X[0] / N`.
    ///
    /// Zero if the DC term was dropped by [`truncated`](Self::truncated).
    pub fn center(&self) -> Complex64 {
        self.terms
            .iter()
            .find(|t| t.frequency == 0)
            .map_or(Complex64::new(0.0, 0.0), |t| t.position(0, self.period))
    }

    /// Keep only the `count` largest terms (low-order approximation).
    pub fn truncated(&self, count: usize) -> Self {
        Self {
            period: self.period,
            terms: self.terms.iter().take(count).copied().collect(),
        }
    }

    /// Reconstructed point at `step` (wrapped modulo the period).
    pub fn point_at(&self, step: usize) -> Complex64 {
        self.terms
            .iter()
            .map(|t| t.position(step, self.period))
            .sum()
    }

    /// Render the epicycle chain at `step` (wrapped modulo the period).
    pub fn render(&self, step: usize) -> EpicycleFrame {
        let step = if self.period == 0 {
            0
        } else {
            step % self.period
        };

        let mut joints = Vec::with_capacity(self.terms.len() + 1);
        let mut acc = Complex64::new(0.0, 0.0);
        joints.push(acc);
        for term in &self.terms {
            acc += term.position(step, self.period);
            joints.push(acc);
        }

        EpicycleFrame {
            step,
            joints,
            radii: self.terms.iter().map(|t| t.radius).collect(),
        }
    }

    /// The full reconstructed path, one point per step of the period.
    pub fn trace(&self) -> Vec<Complex64> {
        (0..self.period).map(|t| self.point_at(t)).collect()
    }
}
