//! Epicycle decomposition of a drawing path.

use anyhow::Context;
use clap::Args;
use fourier_analysis::Epicycles;
use fourier_core::{Algorithm, Signal};
use fourier_io::read_points;
use std::path::PathBuf;

#[derive(Args)]
pub struct EpicyclesArgs {
    /// Point list, one `x,y` pair per line
    #[arg(value_name = "POINTS")]
    input: PathBuf,

    /// Transform implementation (naive or fft)
    #[arg(short, long, default_value = "naive")]
    algorithm: Algorithm,

    /// Linearly resample the path to this many points first
    #[arg(short, long, value_name = "N")]
    resample: Option<usize>,

    /// Keep only the largest K circles
    #[arg(short, long, value_name = "K")]
    terms: Option<usize>,

    /// Print the circle chain at this animation step
    #[arg(short, long, value_name = "T")]
    step: Option<usize>,

    /// Write the terms as JSON for an animator
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: EpicyclesArgs) -> anyhow::Result<()> {
    let points = read_points(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let mut signal = Signal::from_points(&points);
    if let Some(len) = args.resample {
        signal = signal.interpolate(len)?;
    }
    if !args.algorithm.supports_len(signal.len()) {
        anyhow::bail!(
            "{} points cannot be transformed with {}; pass --resample with a power of two",
            signal.len(),
            args.algorithm
        );
    }

    let mut epicycles = Epicycles::analyze(&signal, &args.algorithm)?;
    if let Some(count) = args.terms {
        epicycles = epicycles.truncated(count);
    }
    tracing::info!(
        period = epicycles.period(),
        terms = epicycles.len(),
        "decomposed path"
    );

    println!(
        "{} points, {} circles (period {})",
        signal.len(),
        epicycles.len(),
        epicycles.period()
    );
    let center = epicycles.center();
    println!("center: ({:.6}, {:.6})", center.re, center.im);
    println!("{:>6}  {:>12}  {:>9}", "freq", "radius", "phase");
    for term in epicycles.terms().iter().take(10) {
        println!(
            "{:>6}  {:>12.6}  {:>9.4}",
            term.frequency, term.radius, term.phase
        );
    }
    if epicycles.len() > 10 {
        println!("  ... {} more", epicycles.len() - 10);
    }

    if let Some(step) = args.step {
        let frame = epicycles.render(step);
        println!("\nstep {} (t = {})", step, frame.step);
        for (i, (joint, radius)) in frame.circles().enumerate() {
            println!(
                "  circle {i:>3} at ({:.6}, {:.6}) r={radius:.6}",
                joint.re, joint.im
            );
        }
        let tip = frame.tip();
        println!("  tip: ({:.6}, {:.6})", tip.re, tip.im);
    }

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&epicycles)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
