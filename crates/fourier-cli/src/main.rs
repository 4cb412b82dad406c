//! fourier CLI - transforms, equalizer and epicycles from the command line.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fourier")]
#[command(author, version, about = "Discrete Fourier transform toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform a list of numbers
    Dft(commands::dft::DftArgs),

    /// Apply the five-band equalizer to a WAV file
    Equalize(commands::equalize::EqualizeArgs),

    /// Decompose a drawing path into rotating circles
    Epicycles(commands::epicycles::EpicyclesArgs),

    /// List or show factory equalizer presets
    Presets(commands::presets::PresetsArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `--json` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Dft(args) => commands::dft::run(args),
        Commands::Equalize(args) => commands::equalize::run(args),
        Commands::Epicycles(args) => commands::epicycles::run(args),
        Commands::Presets(args) => commands::presets::run(args),
    }
}
