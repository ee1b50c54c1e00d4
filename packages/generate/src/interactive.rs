//! Interactive menu for the generate tool.
//!
//! Lets users pick the output and population parameters without
//! memorizing CLI flags.

use dialoguer::{Confirm, Input, Select};

use crate::export::{Dataset, generate_json};
use crate::{DEFAULT_CARRIER_COUNT, DEFAULT_SEED};

/// Runs the interactive generation menu and prints the result.
///
/// # Errors
///
/// Returns an error if user input, generation, or serialization fails.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let choices = &["Carrier records (JSON)", "Region summaries (JSON)"];

    let selection = Select::new()
        .with_prompt("What would you like to generate?")
        .items(choices)
        .default(0)
        .interact()?;

    let dataset = if selection == 0 {
        Dataset::Carriers
    } else {
        Dataset::Summary
    };

    let count: usize = Input::new()
        .with_prompt("Number of carriers")
        .default(DEFAULT_CARRIER_COUNT)
        .interact_text()?;

    let seed: u64 = Input::new()
        .with_prompt("Random seed")
        .default(DEFAULT_SEED)
        .interact_text()?;

    let pretty = Confirm::new()
        .with_prompt("Pretty-print output?")
        .default(true)
        .interact()?;

    let json = generate_json(count, seed, dataset, pretty)?;
    println!("{json}");

    Ok(())
}
