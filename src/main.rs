// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::refresh_service::RefreshService;
use crate::application::scheduler;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::sheets_fetcher::GoogleSheetsSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_dashboard, get_readings, get_state, health_check, refresh, stream_state,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Create sheet source (infrastructure layer)
    let source = Arc::new(GoogleSheetsSource::new(
        config.sheet.base_url,
        config.sheet.sheet_id,
        config.sheet.sheet_name,
        config.sheet.window,
        config.refresh.request_timeout(),
    )?);

    // Create services (application layer)
    let refresh_service = RefreshService::new(source);
    let dashboard_service = DashboardService::new(refresh_service.clone());
    let scheduler_handle = scheduler::start(refresh_service.clone(), config.refresh.interval());

    // Create application state
    let state = Arc::new(AppState {
        refresh_service,
        dashboard_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/state", get(get_state))
        .route("/state/stream", get(stream_state))
        .route("/dashboard", get(get_dashboard))
        .route("/readings", get(get_readings))
        .route("/refresh", post(refresh))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!("Starting plant-telemetry service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    scheduler_handle.shutdown().await;

    Ok(())
}
