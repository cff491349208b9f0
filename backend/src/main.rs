//! Backend entry-point: loads settings, seeds the directory and serves the
//! REST API with OpenAPI docs.

mod server;

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServerSettings, create_server};
use westbook::inbound::http::health::HealthState;
use westbook::outbound::memory::{InMemoryDirectory, load_seed};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::from_args(std::env::args_os())?;

    let directory = match settings.seed_path() {
        Some(path) => {
            let seed = load_seed(path).map_err(std::io::Error::other)?;
            InMemoryDirectory::from_seed(seed)
        }
        None => {
            warn!("no seed configured; serving an empty directory");
            InMemoryDirectory::new()
        }
    };

    let config = ServerConfig::new(settings.bind_addr())
        .with_directory(Arc::new(directory))
        .with_budget_policy(settings.budget_policy());
    info!(bind_addr = %settings.bind_addr(), "starting server");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
