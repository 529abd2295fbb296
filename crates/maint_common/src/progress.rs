//! Elapsed-time to progress mapping.
//!
//! This is the whole computation behind the maintenance page: a pure
//! function from elapsed seconds to an overall percentage, an active phase,
//! and a remaining-time figure. Every status read re-derives a snapshot;
//! nothing is cached between calls.

use crate::plan::PhasePlan;

/// Freshly derived status of a maintenance run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSnapshot {
    /// Overall completion in [0, 100].
    pub progress: f64,
    /// Index of the active phase in the plan.
    pub phase_index: usize,
    pub is_complete: bool,
    /// Seconds until the window closes, never negative.
    pub remaining_secs: f64,
}

impl PhasePlan {
    /// Map elapsed wall-clock seconds to overall progress.
    ///
    /// Pure and idempotent: identical inputs produce identical snapshots, so
    /// concurrent reads need no coordination. Negative or non-finite elapsed
    /// values are treated as zero elapsed.
    pub fn snapshot(&self, elapsed_secs: f64) -> ProgressSnapshot {
        let elapsed = if elapsed_secs.is_finite() {
            elapsed_secs.max(0.0)
        } else {
            0.0
        };
        let total = self.total_duration_secs();

        if elapsed >= total {
            return ProgressSnapshot {
                progress: 100.0,
                phase_index: self.len() - 1,
                is_complete: true,
                remaining_secs: 0.0,
            };
        }

        let mut phase_start_secs = 0.0;
        let mut floor = 0.0;
        for (index, phase) in self.phases().iter().enumerate() {
            let phase_end_secs = phase_start_secs + phase.duration_secs;
            // An exact boundary instant belongs to the next phase.
            if elapsed < phase_end_secs {
                let local = (elapsed - phase_start_secs) / phase.duration_secs;
                // Clamp guards float overshoot right at the boundary.
                let progress = (floor + local * (phase.progress - floor)).min(phase.progress);
                return ProgressSnapshot {
                    progress,
                    phase_index: index,
                    is_complete: false,
                    remaining_secs: total - elapsed,
                };
            }
            phase_start_secs = phase_end_secs;
            floor = phase.progress;
        }

        // Unreachable in practice: the loop accumulates durations in the same
        // order total_duration_secs() sums them, so elapsed < total always
        // lands inside a phase. Kept as a graceful tail rather than a panic.
        ProgressSnapshot {
            progress: floor,
            phase_index: self.len() - 1,
            is_complete: false,
            remaining_secs: (total - elapsed).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::Phase;
    use approx::assert_relative_eq;

    /// The three-phase plan from the service acceptance scenario:
    /// targets 10/25/45%, durations 3/8/12 seconds, 23 seconds total.
    fn scenario_plan() -> PhasePlan {
        PhasePlan::new(vec![
            Phase::new("alpha", 10.0, 3.0),
            Phase::new("beta", 25.0, 8.0),
            Phase::new("gamma", 45.0, 12.0),
        ])
        .expect("scenario plan is valid")
    }

    #[test]
    fn at_start() {
        let snap = scenario_plan().snapshot(0.0);
        assert_relative_eq!(snap.progress, 0.0);
        assert_eq!(snap.phase_index, 0);
        assert!(!snap.is_complete);
        assert_relative_eq!(snap.remaining_secs, 23.0);
    }

    #[test]
    fn at_first_phase_boundary() {
        // The boundary instant carries the finished phase's target and has
        // already moved on to the next phase.
        let snap = scenario_plan().snapshot(3.0);
        assert_relative_eq!(snap.progress, 10.0);
        assert_eq!(snap.phase_index, 1);
        assert!(!snap.is_complete);
    }

    #[test]
    fn midway_through_second_phase() {
        // 4 of 8 seconds into phase 1: halfway from 10% to 25%.
        let snap = scenario_plan().snapshot(7.0);
        assert_relative_eq!(snap.progress, 17.5);
        assert_eq!(snap.phase_index, 1);
        assert_relative_eq!(snap.remaining_secs, 16.0);
    }

    #[test]
    fn at_total_duration() {
        let snap = scenario_plan().snapshot(23.0);
        assert_relative_eq!(snap.progress, 100.0);
        assert_eq!(snap.phase_index, 2);
        assert!(snap.is_complete);
        assert_relative_eq!(snap.remaining_secs, 0.0);
    }

    #[test]
    fn far_past_total_duration() {
        let snap = scenario_plan().snapshot(100.0);
        assert_relative_eq!(snap.progress, 100.0);
        assert_eq!(snap.phase_index, 2);
        assert!(snap.is_complete);
        assert_relative_eq!(snap.remaining_secs, 0.0);
    }

    #[test]
    fn negative_elapsed_clamps_to_zero() {
        let snap = scenario_plan().snapshot(-5.0);
        assert_relative_eq!(snap.progress, 0.0);
        assert_eq!(snap.phase_index, 0);
        assert!(!snap.is_complete);
    }

    #[test]
    fn complete_iff_no_time_remains() {
        let plan = scenario_plan();
        for tenths in 0..300 {
            let snap = plan.snapshot(tenths as f64 / 10.0);
            assert_eq!(
                snap.is_complete,
                snap.remaining_secs == 0.0,
                "divergence at elapsed {}s",
                tenths as f64 / 10.0
            );
        }
    }

    #[test]
    fn identical_inputs_identical_outputs() {
        let plan = scenario_plan();
        assert_eq!(plan.snapshot(11.3), plan.snapshot(11.3));
    }

    #[test]
    fn clamp_holds_at_every_phase_target() {
        let plan = PhasePlan::builtin().expect("builtin plan");
        let mut end = 0.0;
        for phase in plan.phases() {
            end += phase.duration_secs;
            // Just shy of the boundary the clamp pins us at or below the
            // phase target.
            let snap = plan.snapshot(end - 1e-9);
            assert!(
                snap.progress <= phase.progress,
                "overshoot at end of {:?}: {} > {}",
                phase.name,
                snap.progress,
                phase.progress
            );
        }
    }
}
