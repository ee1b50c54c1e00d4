#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the carrier intelligence dashboard.
//!
//! Generates the synthetic carrier population once at startup and serves
//! region summaries, filtered carrier lists, and the dashboard insight
//! panels as JSON. Every request recomputes its view from the shared,
//! read-only population.

pub mod config;
mod handlers;
pub mod interactive;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use carrier_intel_analytics::summarize;
use carrier_intel_analytics_models::RegionSummary;
use carrier_intel_carrier_models::CarrierRecord;
use carrier_intel_generate::{GenerateError, generate_seeded};

pub use config::ServerConfig;

/// Shared application state.
pub struct AppState {
    /// The generated carrier population, in generation order.
    pub population: Vec<CarrierRecord>,
    /// Region summaries of the whole population.
    pub summaries: Vec<RegionSummary>,
    /// Seed the population was generated from. Also seeds per-request
    /// draws so repeated requests give identical answers.
    pub seed: u64,
}

impl AppState {
    /// Generates a population of `count` carriers from `seed`.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerateError`] if `count` is zero or sampling fails.
    pub fn generate(count: usize, seed: u64) -> Result<Self, GenerateError> {
        Ok(Self::from_population(generate_seeded(count, seed)?, seed))
    }

    /// Wraps an existing population.
    #[must_use]
    pub fn from_population(population: Vec<CarrierRecord>, seed: u64) -> Self {
        let summaries = summarize(&population);
        Self {
            population,
            summaries,
            seed,
        }
    }

    /// Looks up a carrier by identifier, returning its population index.
    #[must_use]
    pub fn find(&self, carrier_id: &str) -> Option<(usize, &CarrierRecord)> {
        self.population
            .iter()
            .enumerate()
            .find(|(_, r)| r.carrier_id == carrier_id)
    }
}

/// Registers the `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/regions", web::get().to(handlers::regions))
            .route("/summary", web::get().to(handlers::summary))
            .route("/insights", web::get().to(handlers::insights))
            .route("/carriers", web::get().to(handlers::carriers))
            .route("/carriers/{id}", web::get().to(handlers::carrier))
            .route("/carriers/{id}/history", web::get().to(handlers::history))
            .route("/dashboard", web::get().to(handlers::dashboard))
            .route("/trends", web::get().to(handlers::trends))
            .route("/correlations", web::get().to(handlers::correlations))
            .route(
                "/fleet-distribution",
                web::get().to(handlers::fleet_distribution),
            )
            .route("/actions/{action}", web::post().to(handlers::action)),
    );
}

/// Starts the API server with configuration read from the environment.
///
/// This is a regular async function; the caller provides the runtime
/// (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if population generation fails or
/// the HTTP server fails to bind.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    if pretty_env_logger::try_init_custom_env("RUST_LOG").is_err() {
        log::debug!("Logger already initialized");
    }

    serve(ServerConfig::from_env()).await
}

/// Generates the population described by `config` and serves it.
///
/// # Errors
///
/// Returns an `std::io::Result` error if population generation fails or
/// the HTTP server fails to bind.
#[allow(clippy::future_not_send)]
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    log::info!(
        "Generating {} carriers (seed {})...",
        config.carrier_count,
        config.seed
    );
    let state = AppState::generate(config.carrier_count, config.seed).map_err(|e| {
        log::error!("Failed to generate carrier population: {e}");
        std::io::Error::other(e)
    })?;
    log::info!(
        "Generated {} carriers across {} regions",
        state.population.len(),
        state.summaries.len()
    );

    let state = web::Data::new(state);

    log::info!("Starting server on {}:{}", config.bind_addr, config.port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((config.bind_addr, config.port))?
    .run()
    .await
}
