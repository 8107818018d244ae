//! MeteorGuard HTTP Server Binary
//!
//! Loads configuration, builds the catalog client and serves the REST API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin meteorguard-server
//!
//! # Point at a different catalog and port
//! SBDB_QUERY_URL=http://localhost:9000/query PORT=9090 \
//!   cargo run --bin meteorguard-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`, `PORT`: Listen address (default: 0.0.0.0:8080)
//! - `SBDB_QUERY_URL`, `SBDB_LOOKUP_URL`: Catalog endpoints
//! - `CATALOG_TIMEOUT_SECS`: Upstream request timeout (default: 20)
//! - `RUST_LOG`: Log filter (default: info)

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use meteorguard::config::ServiceConfig;
use meteorguard::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting MeteorGuard HTTP Server");

    let config = ServiceConfig::load()?;
    info!(
        query_url = %config.catalog.query_url,
        lookup_url = %config.catalog.lookup_url,
        timeout_secs = config.catalog.timeout_secs,
        "Catalog configured"
    );

    let state = AppState::from_settings(&config.catalog)?;
    let app = create_router(state);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
