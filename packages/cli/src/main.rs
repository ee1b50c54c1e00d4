#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Interactive CLI orchestrator for the carrier intelligence toolchain.
//!
//! Lets users pick between generating a dataset and starting the
//! dashboard server, then walks them through that tool's prompts.

use dialoguer::Select;

/// Top-level tool selection.
enum Tool {
    Generate,
    Server,
}

impl Tool {
    const ALL: &[Self] = &[Self::Generate, Self::Server];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Generate => "Generate carrier dataset",
            Self::Server => "Start dashboard server",
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    println!("Carrier Intelligence Toolchain");
    println!();

    let labels: Vec<&str> = Tool::ALL.iter().map(Tool::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Tool::ALL[idx] {
        Tool::Generate => carrier_intel_generate::interactive::run()?,
        Tool::Server => {
            log::debug!("Starting actix system for the server");
            actix_web::rt::System::new().block_on(carrier_intel_server::interactive::run())?;
        }
    }

    Ok(())
}
