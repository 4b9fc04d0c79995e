// Sortiment - Web Server
// REST API with Axum

use anyhow::{Context, Result};
use sortiment::config::Config;
use sortiment::server::{router, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    sortiment::init_tracing("info");

    let config = Config::load();
    let state = AppState::from_config(&config)?;
    info!(
        products = state.catalog.product_count(),
        keywords = state.catalog.keyword_count(),
        "catalog ready"
    );

    let app = router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to address {addr}"))?;

    info!("🚀 Server running on http://localhost:{}", config.port);

    axum::serve(listener, app).await.context("Failed to start server")?;

    Ok(())
}
