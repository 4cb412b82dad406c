//! Factory preset listing.

use clap::Args;
use fourier_config::{ConfigError, factory_preset_names, get_factory_preset};

#[derive(Args)]
pub struct PresetsArgs {
    /// Print one preset as TOML instead of listing all of them
    name: Option<String>,
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    if let Some(name) = &args.name {
        let preset = get_factory_preset(name)
            .ok_or_else(|| ConfigError::PresetNotFound(name.clone()))?;
        print!("{}", preset.to_toml()?);
        return Ok(());
    }

    println!("Factory presets:\n");
    for id in factory_preset_names() {
        let Some(preset) = get_factory_preset(id) else {
            continue;
        };
        let gains: Vec<String> = preset.gains.iter().map(|g| format!("{g:.1}")).collect();
        println!("  {:<12} [{}]", id, gains.join(", "));
        if let Some(description) = &preset.description {
            println!("  {:<12} {}", "", description);
        }
    }
    println!("\nUse with: fourier equalize in.wav out.wav --preset <name>");

    Ok(())
}
