//! HTTP server for the Settlement Engine.

use std::env;

use settlement_engine::api::{AppState, create_router};
use settlement_engine::config::{ConfigLoader, DEFAULT_CONFIG_DIR};
use tokio::net::TcpListener;
use tracing::info;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_dir =
        env::var("SETTLEMENT_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr =
        env::var("SETTLEMENT_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let loader = ConfigLoader::load(&config_dir)?;
    let router = create_router(AppState::new(loader));

    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, config_dir = %config_dir, "Settlement engine listening");
    axum::serve(listener, router).await?;

    Ok(())
}
