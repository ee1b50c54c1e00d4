//! Interactive mode for the server.
//!
//! Prompts for bind address, port, and population parameters before
//! starting the server.

use dialoguer::{Confirm, Input};

use crate::ServerConfig;

/// Runs the server in interactive mode, prompting for configuration.
///
/// Defaults for every prompt come from the environment (see
/// [`ServerConfig::from_env`]).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the underlying server fails to
/// start.
#[allow(clippy::future_not_send)]
pub async fn run() -> std::io::Result<()> {
    println!("Carrier Intelligence Server");
    println!();

    let defaults = ServerConfig::from_env();

    let bind_addr: String = Input::new()
        .with_prompt("Bind address")
        .default(defaults.bind_addr.clone())
        .interact_text()
        .unwrap_or_else(|_| defaults.bind_addr.clone());

    let port: u16 = Input::new()
        .with_prompt("Port")
        .default(defaults.port)
        .interact_text()
        .unwrap_or(defaults.port);

    let seed: u64 = Input::new()
        .with_prompt("Random seed")
        .default(defaults.seed)
        .interact_text()
        .unwrap_or(defaults.seed);

    let carrier_count: usize = Input::new()
        .with_prompt("Number of carriers")
        .default(defaults.carrier_count)
        .interact_text()
        .unwrap_or(defaults.carrier_count);

    if !Confirm::new()
        .with_prompt(format!(
            "Start server on {bind_addr}:{port} with {carrier_count} carriers?"
        ))
        .default(true)
        .interact()
        .unwrap_or(true)
    {
        println!("Cancelled.");
        return Ok(());
    }

    if pretty_env_logger::try_init_custom_env("RUST_LOG").is_err() {
        log::debug!("Logger already initialized");
    }

    super::serve(ServerConfig {
        bind_addr,
        port,
        seed,
        carrier_count,
    })
    .await
}
