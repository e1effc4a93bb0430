//! PawHaven server binary.
//!
//! Loads configuration, initializes tracing, wires the in-memory
//! stores and the JWT auth provider into the handler bundles, and
//! serves the API.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use pawhaven::adapters::http::{api_router, ApiHandlers, AuthState};
use pawhaven::adapters::JwtAuthProvider;
use pawhaven::application::Store;
use pawhaven::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let store = Store::in_memory();
    let auth: AuthState = Arc::new(JwtAuthProvider::from_config(&config.auth));
    let handlers = ApiHandlers::build(&store, auth.clone());

    let app = api_router(
        handlers,
        auth,
        Duration::from_secs(config.server.request_timeout_secs),
        config.server.cors_origins_list(),
    );

    let addr = config.server.socket_addr();
    tracing::info!(%addr, environment = ?config.server.environment, "starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone()));

    if config.server.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
