//! Built-in equalizer curves.
//!
//! Embedded at compile time, so they are available without any preset files.
//! All of them use the radix-2 FFT with 1024-sample chunks.

use crate::EqualizerPreset;

/// Internal identifiers of the factory presets.
pub static FACTORY_PRESET_NAMES: &[&str] =
    &["flat", "bass_boost", "treble_cut", "voice", "mid_scoop"];

static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("flat", FLAT_PRESET),
    ("bass_boost", BASS_BOOST_PRESET),
    ("treble_cut", TREBLE_CUT_PRESET),
    ("voice", VOICE_PRESET),
    ("mid_scoop", MID_SCOOP_PRESET),
];

const FLAT_PRESET: &str = r#"
name = "Flat"
description = "Every band at unity, output equals input"
algorithm = "fft"
chunk_size = 1024
gains = [1.0, 1.0, 1.0, 1.0, 1.0]
"#;

const BASS_BOOST_PRESET: &str = r#"
name = "Bass Boost"
description = "Lift the low end, leave the rest alone"
algorithm = "fft"
chunk_size = 1024
gains = [1.8, 1.3, 1.0, 1.0, 1.0]
"#;

const TREBLE_CUT_PRESET: &str = r#"
name = "Treble Cut"
description = "Darken the top two bands"
algorithm = "fft"
chunk_size = 1024
gains = [1.0, 1.0, 1.0, 0.6, 0.2]
"#;

const VOICE_PRESET: &str = r#"
name = "Voice"
description = "Emphasize speech, drop rumble and hiss"
algorithm = "fft"
chunk_size = 1024
gains = [0.4, 1.4, 1.2, 0.8, 0.3]
"#;

const MID_SCOOP_PRESET: &str = r#"
name = "Mid Scoop"
description = "Hollow out the middle band"
algorithm = "fft"
chunk_size = 1024
gains = [1.3, 0.9, 0.4, 0.9, 1.3]
"#;

/// All factory presets, in [`FACTORY_PRESET_NAMES`] order.
///
/// ```rust
/// use fourier_config::factory_presets;
///
/// for preset in factory_presets() {
///     println!("{}: {:?}", preset.name, preset.gains);
/// }
/// ```
pub fn factory_presets() -> Vec<EqualizerPreset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| EqualizerPreset::from_toml(toml).ok())
        .collect()
}

/// Look up a factory preset by identifier or display name, ignoring case.
///
/// ```rust
/// use fourier_config::get_factory_preset;
///
/// assert_eq!(get_factory_preset("bass_boost").unwrap().name, "Bass Boost");
/// assert_eq!(get_factory_preset("bass boost").unwrap().name, "Bass Boost");
/// assert!(get_factory_preset("loudness").is_none());
/// ```
pub fn get_factory_preset(name: &str) -> Option<EqualizerPreset> {
    let name_lower = name.to_lowercase();

    if let Some((_, toml)) = FACTORY_PRESETS_TOML
        .iter()
        .find(|(id, _)| id.to_lowercase() == name_lower)
    {
        return EqualizerPreset::from_toml(toml).ok();
    }

    factory_presets()
        .into_iter()
        .find(|preset| preset.name.to_lowercase() == name_lower)
}

/// Identifiers of all factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESETS_TOML.iter().map(|(name, _)| *name).collect()
}

/// True if `name` matches a factory preset (identifier or display name).
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}
