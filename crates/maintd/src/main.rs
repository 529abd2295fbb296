//! maintd - Maintenance status daemon
//!
//! Holds a process-lifetime start timestamp and answers status reads with a
//! snapshot derived from elapsed time. Restarting the process restarts the
//! maintenance clock.

use anyhow::{Context, Result};
use maint_common::PhasePlan;
use maintd::config::ServerConfig;
use maintd::server::{self, AppState};
use maintd::state::create_shared_run;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env();

    let default_filter = if config.production {
        "maintd=info,tower_http=warn"
    } else {
        "maintd=debug,tower_http=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    info!("maintd v{} starting", env!("CARGO_PKG_VERSION"));

    // A malformed phase plan is a configuration error; never start with one.
    let plan = PhasePlan::builtin().context("invalid built-in phase plan")?;
    info!(
        "phase plan: {} phases, {}s total",
        plan.len(),
        plan.total_duration_secs()
    );

    let state = AppState::new(create_shared_run(plan));
    server::run(state, &config).await
}
