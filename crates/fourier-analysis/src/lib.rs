//! Fourier Analysis - consumers of the transform engine
//!
//! - [`epicycle`] - Spectrum → rotating-vector table for additive resynthesis
//! - [`compare`] - Error metrics and energy (Parseval checks)
//! - [`correlation`] - Circular convolution and cross-correlation
//!
//! ## Epicycles
//!
//! ```rust
//! use fourier_analysis::Epicycles;
//! use fourier_core::{Algorithm, Signal};
//!
//! // A square traced as four corner points
//! let square = Signal::from_points(&[(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)]);
//! let epicycles = Epicycles::analyze(&square, &Algorithm::Fft).unwrap();
//!
//! // Step 2 reconstructs the third corner
//! let tip = epicycles.point_at(2);
//! assert!((tip.re + 1.0).abs() < 1e-9 && (tip.im + 1.0).abs() < 1e-9);
//! ```

pub mod compare;
pub mod correlation;
pub mod epicycle;

pub use compare::{energy, max_abs_error, rel_l2_error};
pub use correlation::{circular_convolution, circular_convolution_via, cross_correlation};
pub use epicycle::{EpicycleFrame, EpicycleTerm, Epicycles};
