//! Binary entrypoint for the capitalizer agent

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use capitalizer_agent::{
    config::ServerConfig,
    server::{self, AppState},
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    info!(addr = %config.addr(), "capitalizer agent listening");

    axum::serve(listener, server::router(AppState::default())).await?;
    Ok(())
}
