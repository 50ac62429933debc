use std::sync::Arc;

use anyhow::Context;
use evaluator::{InMemoryResultsStore, PistonClient};
use server::config::AppConfig;
use server::state::AppState;
use tracing::{Level, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load().context("Failed to load config")?;
    info!(
        sandbox_url = %config.sandbox.url,
        max_attempts = config.retry.max_attempts,
        base_delay_ms = config.retry.base_delay_ms,
        deadline_ms = config.evaluation.deadline_ms,
        "Configuration loaded"
    );

    let sandbox =
        PistonClient::new(config.sandbox.clone()).context("Failed to create sandbox client")?;
    let store = Arc::new(InMemoryResultsStore::new());
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app = server::build_router(AppState::new(config, Arc::new(sandbox), store));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
