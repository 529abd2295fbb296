//! Daemon state management.
//!
//! The entire mutable state of maintd is one start timestamp. Status reads
//! derive a fresh snapshot from it; reset replaces it. The phase plan rides
//! along but never changes after startup.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use maint_common::{PhasePlan, StatusResponse};
use tokio::sync::RwLock;

/// The singleton maintenance run.
pub struct MaintenanceRun {
    pub started_at: DateTime<Utc>,
    pub plan: PhasePlan,
}

impl MaintenanceRun {
    /// Start a run now.
    pub fn new(plan: PhasePlan) -> Self {
        Self {
            started_at: Utc::now(),
            plan,
        }
    }

    /// Restart the elapsed-time clock. Phase configuration is untouched.
    pub fn reset(&mut self) {
        self.started_at = Utc::now();
    }

    /// Derive the status as of `now`. Nothing is cached; each call produces
    /// an independent value.
    pub fn to_status(&self, now: DateTime<Utc>) -> StatusResponse {
        let elapsed_secs = (now - self.started_at).num_milliseconds() as f64 / 1000.0;
        StatusResponse::build(&self.plan, self.started_at, self.plan.snapshot(elapsed_secs))
    }
}

/// Thread-safe shared run handle. A read racing a reset may observe either
/// start timestamp; reset is an operational affordance, not a correctness
/// path.
pub type SharedRun = Arc<RwLock<MaintenanceRun>>;

pub fn create_shared_run(plan: PhasePlan) -> SharedRun {
    Arc::new(RwLock::new(MaintenanceRun::new(plan)))
}
