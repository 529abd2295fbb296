//! Maintenance phase plan.
//!
//! Phases are compiled-in configuration: an ordered, immutable sequence of
//! named segments, each with a target cumulative completion percentage and a
//! duration. The plan is validated once at daemon startup; a bad plan is a
//! configuration error and fatal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One time-boxed segment of the maintenance window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    /// Cumulative completion percentage reached at the end of this phase.
    pub progress: f64,
    /// Phase length in seconds.
    pub duration_secs: f64,
}

impl Phase {
    pub fn new(name: impl Into<String>, progress: f64, duration_secs: f64) -> Self {
        Self {
            name: name.into(),
            progress,
            duration_secs,
        }
    }
}

/// Phase plan validation failures. All fatal at startup.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("phase plan is empty")]
    Empty,

    #[error("phase {index} ({name:?}) has non-positive duration {duration_secs}s")]
    NonPositiveDuration {
        index: usize,
        name: String,
        duration_secs: f64,
    },

    #[error("phase {index} ({name:?}) progress {progress} is outside (0, 100]")]
    ProgressOutOfRange {
        index: usize,
        name: String,
        progress: f64,
    },

    #[error("phase {index} ({name:?}) progress {progress} does not increase past {previous}")]
    NonIncreasingProgress {
        index: usize,
        name: String,
        progress: f64,
        previous: f64,
    },
}

/// Validated, ordered phase sequence. Immutable after construction.
#[derive(Debug, Clone)]
pub struct PhasePlan {
    phases: Vec<Phase>,
    total_duration_secs: f64,
}

impl PhasePlan {
    /// Validate and seal a phase sequence.
    ///
    /// Requirements: at least one phase, every duration positive, every
    /// cumulative progress in (0, 100] and strictly greater than its
    /// predecessor.
    pub fn new(phases: Vec<Phase>) -> Result<Self, PlanError> {
        if phases.is_empty() {
            return Err(PlanError::Empty);
        }

        let mut previous = 0.0;
        for (index, phase) in phases.iter().enumerate() {
            if !(phase.duration_secs > 0.0) {
                return Err(PlanError::NonPositiveDuration {
                    index,
                    name: phase.name.clone(),
                    duration_secs: phase.duration_secs,
                });
            }
            if !(phase.progress > 0.0 && phase.progress <= 100.0) {
                return Err(PlanError::ProgressOutOfRange {
                    index,
                    name: phase.name.clone(),
                    progress: phase.progress,
                });
            }
            if phase.progress <= previous {
                return Err(PlanError::NonIncreasingProgress {
                    index,
                    name: phase.name.clone(),
                    progress: phase.progress,
                    previous,
                });
            }
            previous = phase.progress;
        }

        let total_duration_secs = phases.iter().map(|p| p.duration_secs).sum();
        Ok(Self {
            phases,
            total_duration_secs,
        })
    }

    /// The compiled-in production plan: 15 minutes end to end.
    pub fn builtin() -> Result<Self, PlanError> {
        Self::new(vec![
            Phase::new("Backing up data", 15.0, 120.0),
            Phase::new("Applying database migrations", 40.0, 240.0),
            Phase::new("Upgrading services", 70.0, 300.0),
            Phase::new("Warming caches", 90.0, 180.0),
            Phase::new("Running final checks", 100.0, 60.0),
        ])
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Sum of all phase durations in seconds.
    pub fn total_duration_secs(&self) -> f64 {
        self.total_duration_secs
    }
}
