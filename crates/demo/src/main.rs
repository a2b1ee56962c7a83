//! Hang demo page server.
//!
//! Optional env: HOST, PORT, RELAY_HOST, RELAY_ESCAPE_NAMES, WATCH_PAGE

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use demo::{api, config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::Config::from_env().context("config")?;
    let addr = config.bind_addr();
    let relay_host = config.resolver.relay_host.clone();

    let app = api::router(api::AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!(%addr, %relay_host, "Hang demo listening");
    axum::serve(listener, app).await?;

    Ok(())
}
