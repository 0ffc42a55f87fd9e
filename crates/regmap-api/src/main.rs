//! regmap API server.
//!
//! Configuration comes from the environment: `PORT` (default 8080),
//! `REGMAP_DATASET` (JSON/YAML regulation file; built-in fallback
//! dataset when unset) and `RUST_LOG` (default `info`).

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use regmap_api::{AppConfig, AppState};
use regmap_engine::Dataset;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let dataset = Dataset::load(config.dataset.as_deref()).context("loading regulation dataset")?;
    tracing::info!(
        source = dataset.source(),
        regulations = dataset.len(),
        "regulation dataset ready"
    );

    let app = regmap_api::app(AppState::new(dataset));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("regmap-api listening on {addr}");
    axum::serve(listener, app.into_make_service())
        .await
        .context("server error")?;
    Ok(())
}
