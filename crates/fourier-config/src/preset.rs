//! Equalizer preset file format.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::validation::validate_preset;
use fourier_core::Algorithm;
use fourier_effects::{BandGains, ChunkPipeline, DEFAULT_CHUNK_SIZE, NUM_BANDS};

/// Saved equalizer settings.
///
/// # TOML Format
///
/// ```toml
/// name = "Bass Boost"
/// description = "Lift the lowest band"
/// algorithm = "fft"
/// chunk_size = 1024
/// gains = [1.8, 1.3, 1.0, 1.0, 1.0]
/// ```
///
/// Every field except `name` is optional; missing ones fall back to the
/// naive algorithm, 1024-sample chunks, and unity gains.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EqualizerPreset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Transform used for every chunk.
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Frame length in samples.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Band gains, lowest band first.
    #[serde(default = "default_gains")]
    pub gains: [f64; NUM_BANDS],
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_gains() -> [f64; NUM_BANDS] {
    [1.0; NUM_BANDS]
}

impl EqualizerPreset {
    /// Create a flat preset with default settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            algorithm: Algorithm::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            gains: default_gains(),
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the transform algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the frame length.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the band gains.
    pub fn with_gains(mut self, gains: [f64; NUM_BANDS]) -> Self {
        self.gains = gains;
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every field. See [`validate_preset`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        Ok(validate_preset(self)?)
    }

    /// The gains as a validated [`BandGains`].
    pub fn to_gains(&self) -> Result<BandGains, ConfigError> {
        Ok(BandGains::new(self.gains)?)
    }

    /// Validate the preset and build a ready-to-run pipeline.
    pub fn to_pipeline(&self) -> Result<ChunkPipeline, ConfigError> {
        self.validate()?;
        Ok(ChunkPipeline::new(
            self.chunk_size,
            self.to_gains()?,
            self.algorithm,
        )?)
    }
}

impl Default for EqualizerPreset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
