//! Shared types and logic for the maintenance status service.
//!
//! The daemon derives every status response from elapsed wall-clock time
//! through the phase plan defined here; clients consume the wire types.
//! Nothing in this crate holds state.

pub mod format;
pub mod plan;
pub mod progress;
pub mod wire;

pub use format::format_remaining;
pub use plan::{Phase, PhasePlan, PlanError};
pub use progress::ProgressSnapshot;
pub use wire::{ErrorBody, InfoResponse, PhaseInfo, ResetResponse, StatusResponse};

/// Base URL clients use when neither `--server` nor the environment says
/// otherwise.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3001";
