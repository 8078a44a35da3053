//! vitals: answers every GET and POST with a JSON health status.
//!
//! Initializes tracing, reads `PORT` (and the optional body read timeout)
//! once, binds `0.0.0.0:<port>`, and serves until killed. Bad configuration
//! and bind failures exit with status 1.

use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use vitals::{Config, HealthHandler, Server};

const DEFAULT_LOG_FILTER: &str = "vitals=info";

#[tokio::main]
async fn main() -> ExitCode {
    // RUST_LOG wins over the default filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), vitals::Error> {
    let config = Config::from_env()?;
    let server = Server::bind(&config).await?;
    server.serve(HealthHandler::new(&config).router()).await;
    Ok(())
}
