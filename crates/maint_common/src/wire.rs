//! JSON wire types shared by the daemon and its clients.
//!
//! Field names follow the maintenance page API: camelCase keys on response
//! envelopes, plain `{name, progress, duration}` objects for phases. The
//! status payload is fully self-describing — it carries the phase list so a
//! client needs no configuration of its own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::plan::{Phase, PhasePlan};
use crate::progress::ProgressSnapshot;

/// Phase as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseInfo {
    pub name: String,
    /// Cumulative completion percentage at the end of this phase.
    pub progress: f64,
    /// Phase length in seconds.
    pub duration: f64,
}

impl From<&Phase> for PhaseInfo {
    fn from(phase: &Phase) -> Self {
        Self {
            name: phase.name.clone(),
            progress: phase.progress,
            duration: phase.duration_secs,
        }
    }
}

/// Body of `GET /api/maintenance/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub progress: f64,
    pub phase_index: usize,
    pub current_phase: PhaseInfo,
    pub is_complete: bool,
    pub remaining_time_seconds: f64,
    /// Run start as epoch milliseconds.
    pub start_time: i64,
    pub phases: Vec<PhaseInfo>,
}

impl StatusResponse {
    /// Assemble the self-describing payload for one read.
    pub fn build(plan: &PhasePlan, started_at: DateTime<Utc>, snapshot: ProgressSnapshot) -> Self {
        let phases: Vec<PhaseInfo> = plan.phases().iter().map(PhaseInfo::from).collect();
        // snapshot() never hands out an index past the plan end.
        let current_phase = phases[snapshot.phase_index].clone();
        Self {
            progress: snapshot.progress,
            phase_index: snapshot.phase_index,
            current_phase,
            is_complete: snapshot.is_complete,
            remaining_time_seconds: snapshot.remaining_secs,
            start_time: started_at.timestamp_millis(),
            phases,
        }
    }
}

/// Body of `POST /api/maintenance/reset`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResponse {
    pub message: String,
    /// Status as of the instant the clock restarted.
    pub state: StatusResponse,
}

/// Body of `GET /api/info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub message: String,
    /// Process uptime in seconds.
    pub uptime: u64,
    /// Run start as epoch milliseconds.
    pub start_time: i64,
}

/// Body shape of every non-2xx answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
