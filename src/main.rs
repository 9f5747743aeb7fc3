// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::snapshot_loader::SnapshotLoader;
use crate::infrastructure::config::{load_dashboard_config, load_server_config};
use crate::infrastructure::open_meteo::OpenMeteoSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, health_check, list_locations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("weather_dashboard=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let server_config = load_server_config()?;
    let dashboard_config = load_dashboard_config()?;
    tracing::info!(
        "Loaded {} locations, default '{}'",
        dashboard_config.locations.len(),
        dashboard_config.default_location_id()
    );

    // Create forecast source (infrastructure layer)
    let source = Arc::new(OpenMeteoSource::new(&server_config.forecast)?);

    // Create services (application layer)
    let snapshot_loader = SnapshotLoader::new(source);
    let dashboard_service = DashboardService::new(dashboard_config);

    let state = Arc::new(AppState {
        dashboard_service,
        snapshot_loader,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/locations", get(list_locations))
        .route("/dashboard", get(get_dashboard))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = server_config
        .server
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address {}", server_config.server.bind_address))?;
    tracing::info!("Starting weather-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
