//! HTTP server for maintd.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::SharedRun;

/// Application state shared across handlers.
pub struct AppState {
    pub run: SharedRun,
    /// Process start, for the info endpoint's uptime. Distinct from the run
    /// start timestamp, which a reset replaces.
    pub started: Instant,
}

impl AppState {
    pub fn new(run: SharedRun) -> Self {
        Self {
            run,
            started: Instant::now(),
        }
    }
}

/// Assemble the full router. Separated from `run` so tests can drive it
/// without a listener.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::maintenance_routes())
        .merge(routes::info_routes())
        .fallback(routes::not_found)
        .with_state(state)
        // The status page polls from the browser; allow any origin to read.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until ctrl-c.
pub async fn run(state: AppState, config: &ServerConfig) -> Result<()> {
    let app = build_router(Arc::new(state));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down gracefully");
    }
}
