//! Reduced catalog-only deployment.
//!
//! Serves `/catalogs` and `/catalogs/{code}` with fault injection but
//! no credential gates. Everything else is the same machinery as the
//! full mock backend, configured down to a fault-only pipeline.

use mock_api::config::{Config, PipelineConfig};
use mock_api::routes::{self, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_stub=debug,mock_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting catalog stub");

    // Load configuration
    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!(
        data_dir = %config.data_dir.display(),
        fail_rate = config.fail_rate,
        "Configuration loaded"
    );

    let bind_address = config.bind_address.clone();

    // No auth gates in this deployment, fault injection only
    let state = Arc::new(AppState::new(config, PipelineConfig::fault_only()));

    let app = routes::build_catalog_routes(state);

    let addr: SocketAddr = bind_address.parse().map_err(|e| {
        error!("Invalid bind address: {}", e);
        e
    })?;

    info!("Catalog stub listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
