// Receipt Points - Web Server
// REST API with Axum over an in-memory receipt registry

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use receipt_points::api;
use receipt_points::{ReceiptRegistry, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env()?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_line_number(true)
        .init();

    info!("🧾 Receipt Points v{}", receipt_points::VERSION);

    let registry = ReceiptRegistry::new();
    let app = api::router(registry);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    api::log_routes(&config.bind_addr);

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
