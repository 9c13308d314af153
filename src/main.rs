use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod domain;
mod metrics;
mod ui;

use config::Config;
use metrics::{AppState, Metrics};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,table_order=debug"))
        )
        .init();

    tracing::info!("🚀 Starting Table Order review service");

    // === 1. Configuration ===
    let config = Config::load()?;
    tracing::info!(
        port = config.port,
        catalog = %config.catalog_path.display(),
        policy = ?config.number_policy,
        "Configuration loaded"
    );

    // === 2. Menu catalog (read-only for the lifetime of the server) ===
    let catalog = ui::load_catalog(&config.catalog_path, config.number_policy)?;
    if catalog.is_empty() {
        tracing::warn!("Catalog is empty; every line will use a placeholder entry");
    }

    // === 3. Prometheus metrics ===
    let metrics = Arc::new(Metrics::new()?);
    tracing::info!("📊 Metrics registry created with {} metrics", metrics.registry().gather().len());

    // === 4. HTTP surface ===
    let state = AppState {
        catalog: Arc::new(catalog),
        metrics,
        policy: config.number_policy,
    };

    metrics::start_server(state, config.port).await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}
