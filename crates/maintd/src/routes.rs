//! API routes for maintd.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use maint_common::{ErrorBody, InfoResponse, ResetResponse, StatusResponse};
use tracing::info;

use crate::server::AppState;

type AppStateArc = Arc<AppState>;

pub fn maintenance_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/maintenance/status", get(maintenance_status))
        .route("/api/maintenance/reset", post(maintenance_reset))
}

pub fn info_routes() -> Router<AppStateArc> {
    Router::new().route("/api/info", get(server_info))
}

/// Unknown paths answer with the same error body shape as everything else.
pub async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "not found".to_string(),
        }),
    )
}

/// Pure read: derive a fresh snapshot from elapsed time.
async fn maintenance_status(State(state): State<AppStateArc>) -> Json<StatusResponse> {
    let run = state.run.read().await;
    Json(run.to_status(Utc::now()))
}

/// Restart the elapsed-time clock. Operational/testing affordance, not part
/// of the end-user contract.
async fn maintenance_reset(State(state): State<AppStateArc>) -> Json<ResetResponse> {
    let mut run = state.run.write().await;
    run.reset();
    info!("maintenance run reset, clock restarted at {}", run.started_at);

    let state_now = run.to_status(run.started_at);
    Json(ResetResponse {
        message: "maintenance run reset".to_string(),
        state: state_now,
    })
}

async fn server_info(State(state): State<AppStateArc>) -> Json<InfoResponse> {
    let run = state.run.read().await;
    Json(InfoResponse {
        message: format!("maintd v{}", env!("CARGO_PKG_VERSION")),
        uptime: uptime_secs(state.started),
        start_time: run.started_at.timestamp_millis(),
    })
}

fn uptime_secs(started: Instant) -> u64 {
    started.elapsed().as_secs()
}
