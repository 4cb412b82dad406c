//! CLI command implementations.

pub mod dft;
pub mod epicycles;
pub mod equalize;
pub mod presets;
