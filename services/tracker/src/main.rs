//! FitTrack tracker service.
//!
//! The tracker owns the leaderboard snapshot and the participant session:
//! it validates inbound producer events, reconciles them into the ranked
//! board, and persists the result to the local snapshot slots.

use anyhow::Result;
use fittrack_tracker::{
    api,
    config::Config,
    state::{AppState, Tracker},
    store::SnapshotStore,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing (prefer RUST_LOG, fallback to FIT_LOG_LEVEL)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting FitTrack tracker");
    info!(
        listen_addr = %config.listen_addr,
        data_dir = %config.data_dir.display(),
        "Configuration loaded"
    );

    // Load persisted snapshots and build the shared state
    let store = SnapshotStore::new(config.data_dir.clone());
    let tracker = Tracker::bootstrap(store);
    let state = AppState::new(tracker);

    // Build and run the server
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!(addr = %config.listen_addr, "Listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Tracker shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received shutdown signal");
    }
}
