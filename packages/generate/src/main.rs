#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI tool for generating synthetic carrier populations.
//!
//! Prints the generated records, or their per-region summaries, as JSON
//! on stdout. Logs go to stderr.

use carrier_intel_generate::export::{Dataset, generate_json};
use carrier_intel_generate::{DEFAULT_CARRIER_COUNT, DEFAULT_SEED};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "carrier_intel_generate", about = "Synthetic carrier data generator")]
struct Cli {
    /// Number of carriers to generate
    #[arg(long, default_value_t = DEFAULT_CARRIER_COUNT)]
    count: usize,

    /// Random seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every carrier record
    Carriers,
    /// Print one summary per region
    Summary,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let dataset = match cli.command {
        Commands::Carriers => Dataset::Carriers,
        Commands::Summary => Dataset::Summary,
    };

    let json = generate_json(cli.count, cli.seed, dataset, cli.pretty)?;
    println!("{json}");

    Ok(())
}
