//! Command-line front end for the classification rule.
//!
//! Reads four positional measurements, prints the category on stdout,
//! and exits 0. Any validation failure goes to stderr with exit code 1.
//! Arguments that do not parse as numbers are handed to the validator
//! as text, so the diagnostic names the offending field instead of
//! surfacing as an argument-parser error.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use u_parcel::classification::classify_raw;
use u_parcel::validation::RawValue;

/// Classify a package into STANDARD, SPECIAL, or REJECTED.
#[derive(Parser)]
#[command(name = "parcel", version, about)]
struct Cli {
    /// Width in centimeters.
    width: String,
    /// Height in centimeters.
    height: String,
    /// Length in centimeters.
    length: String,
    /// Mass in kilograms.
    mass: String,
}

/// Keeps non-numeric input flowing into validation as text.
fn raw(arg: &str) -> RawValue {
    match arg.parse::<f64>() {
        Ok(n) => RawValue::Number(n),
        Err(_) => RawValue::Text(arg.to_owned()),
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let category = classify_raw(
        &raw(&cli.width),
        &raw(&cli.height),
        &raw(&cli.length),
        &raw(&cli.mass),
    )?;
    println!("{category}");
    Ok(())
}
