//! Vidgate Server - shared infrastructure for the media API

use anyhow::Result;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vidgate_core::toolcheck;
use vidgate_server::{routes, state};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vidgate_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create application state (opens the shared HTTP session)
    let state = state::AppState::new();

    // The service must not come up without a working encoder
    let banner = toolcheck::check_tool(&state.ffmpeg).await?;
    tracing::info!(
        "{} available: {}",
        state.ffmpeg,
        banner.lines().next().unwrap_or("")
    );

    // Build router
    let app = routes::create_router(state.clone());

    // Start server
    let addr = std::env::var("VIDGATE_ADDR")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // Last operation against the session
    state.shutdown().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
