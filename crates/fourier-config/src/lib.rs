//! Configuration and preset management for the fourier equalizer.
//!
//! # Features
//!
//! - **Presets**: Load and save equalizer settings from TOML files
//! - **Validation**: Check gains, chunk size and algorithm compatibility
//! - **Factory Presets**: Built-in gain curves that need no files
//!
//! # Example
//!
//! ```rust,no_run
//! use fourier_config::{EqualizerPreset, get_factory_preset};
//! use fourier_core::Algorithm;
//!
//! // Start from a factory curve and tweak it
//! let mut preset = get_factory_preset("bass_boost").unwrap();
//! preset.algorithm = Algorithm::Fft;
//! preset.chunk_size = 2048;
//!
//! preset.save("my_eq.toml").unwrap();
//!
//! let pipeline = EqualizerPreset::load("my_eq.toml").unwrap().to_pipeline().unwrap();
//! ```

mod error;
mod preset;

/// Preset validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, get_factory_preset,
    is_factory_preset,
};
pub use preset::EqualizerPreset;
pub use validation::{ValidationError, ValidationResult, validate_preset};
