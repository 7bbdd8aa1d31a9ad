//! HTTP API server for the vector database.

pub mod routes;

use std::sync::Arc;

use crate::store::Store;

/// Shared application state for the HTTP server.
///
/// The store and its collections are internally synchronized, so handlers
/// never wrap this in an outer lock.
pub struct AppState {
    pub store: Store,
}

/// Start the HTTP server and run it until a shutdown signal arrives.
pub async fn start(addr: &str) -> anyhow::Result<()> {
    let state = Arc::new(AppState { store: Store::new() });

    let app = routes::create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => tracing::error!(%err, "failed to install shutdown handler"),
    }
}
