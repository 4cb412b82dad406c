//! Forward or inverse transform of numbers given on the command line.

use clap::Args;
use fourier_core::{Algorithm, Complex64, Signal, Transform};

#[derive(Args)]
pub struct DftArgs {
    /// Real input values
    #[arg(value_name = "VALUES", required = true, allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Transform implementation (naive or fft)
    #[arg(short, long, default_value = "naive")]
    algorithm: Algorithm,

    /// Run the inverse transform instead
    #[arg(long)]
    inverse: bool,

    /// Zero-pad (or truncate) to this many samples first
    #[arg(long, value_name = "N", conflicts_with = "interpolate")]
    pad: Option<usize>,

    /// Linearly resample to this many samples first
    #[arg(long, value_name = "N")]
    interpolate: Option<usize>,

    /// Print a JSON array of [re, im] pairs
    #[arg(long)]
    json: bool,
}

pub fn run(args: DftArgs) -> anyhow::Result<()> {
    let mut signal = Signal::from_real(&args.values);
    if let Some(len) = args.pad {
        signal = signal.pad(len);
    } else if let Some(len) = args.interpolate {
        signal = signal.interpolate(len)?;
    }

    tracing::info!(
        len = signal.len(),
        algorithm = %args.algorithm,
        inverse = args.inverse,
        "transforming"
    );

    let result = if args.inverse {
        args.algorithm.compute_idft(signal.as_slice())?
    } else {
        args.algorithm.compute_dft(signal.as_slice())?
    };

    if args.json {
        let pairs: Vec<[f64; 2]> = result.iter().map(|c| [c.re, c.im]).collect();
        println!("{}", serde_json::to_string(&pairs)?);
    } else {
        print_table(&result);
    }

    Ok(())
}

fn print_table(values: &[Complex64]) {
    println!("{:>5}  {:>14}  {:>14}  {:>12}  {:>8}", "k", "re", "im", "|X|", "phase");
    for (k, c) in values.iter().enumerate() {
        println!(
            "{:>5}  {:>14.6}  {:>14.6}  {:>12.6}  {:>8.4}",
            k,
            c.re,
            c.im,
            c.norm(),
            c.arg()
        );
    }
}
