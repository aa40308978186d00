use std::sync::Arc;

use activity_core::Directory;
use activity_server::{
    build_router,
    config::{ServerConfig, DEFAULT_LOG_FILTER},
    errors::ServerError,
    monitoring::{self, MonitoringLayer},
    AppState,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = ServerConfig::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if config.monitoring {
        use colored::*;
        tracing::info!("{}", "🏫 Mergington Activities with Monitoring".bold().cyan());
        tracing::info!("{}", "=======================================".cyan());
        tracing::info!("");
    }

    let monitoring_layer = if config.monitoring {
        let (tx, rx) = tokio::sync::mpsc::channel(1000);
        monitoring::spawn_monitoring_display(rx).await;
        Some(MonitoringLayer::new(tx))
    } else {
        None
    };

    let directory = Directory::new();
    tracing::info!(activities = directory.len(), "Loaded seed activities");

    let app_state = Arc::new(AppState::new(directory, monitoring_layer));
    let app = build_router(app_state, &config);

    if config.enable_reset {
        tracing::warn!("POST /test/reset is enabled");
    }
    if !config.static_dir.is_dir() {
        tracing::warn!(static_dir = %config.static_dir.display(), "Static directory does not exist");
    }

    let addr = config.socket_addr()?;
    tracing::info!("Starting activities server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!(%e, addr = %addr, "Failed to bind");
        e
    })?;
    axum::serve(listener, app).await?;

    Ok(())
}
