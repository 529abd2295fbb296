//! Property-style tests for the progress calculator.
//!
//! Invariants verified across randomized plans and elapsed-time sweeps,
//! using stdlib-only generation to keep the dependency surface small.
//!
//! - progress is monotonically non-decreasing in elapsed time
//! - progress stays inside [0, 100]
//! - phase_index is monotone and always a valid index
//! - is_complete holds exactly when remaining_secs is zero
//! - remaining_secs never goes negative

use maint_common::{Phase, PhasePlan};

/// Simple pseudo-random number generator for test inputs (xorshift64).
struct TestRng {
    state: u64,
}

impl TestRng {
    fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() as f64) / (u64::MAX as f64)
    }

    fn next_range(&mut self, min: u64, max: u64) -> u64 {
        if max <= min {
            return min;
        }
        min + (self.next_u64() % (max - min))
    }
}

/// Build a random valid plan: 1..=8 phases, strictly increasing targets
/// ending at 100, positive durations.
fn random_plan(rng: &mut TestRng) -> PhasePlan {
    let count = rng.next_range(1, 9) as usize;
    let mut cuts: Vec<f64> = (0..count - 1)
        .map(|_| 1.0 + rng.next_f64() * 98.0)
        .collect();
    cuts.sort_by(|a, b| a.partial_cmp(b).expect("finite"));
    cuts.dedup_by(|a, b| (*a - *b).abs() < 1e-6);
    cuts.push(100.0);

    let phases = cuts
        .iter()
        .enumerate()
        .map(|(i, &target)| {
            Phase::new(
                format!("phase-{i}"),
                target,
                1.0 + rng.next_f64() * 600.0,
            )
        })
        .collect();
    PhasePlan::new(phases).expect("generated plan is valid")
}

#[test]
fn progress_is_monotone_and_bounded() {
    let mut rng = TestRng::new(42);

    for _ in 0..50 {
        let plan = random_plan(&mut rng);
        let total = plan.total_duration_secs();

        let mut previous_progress = -1.0;
        let mut previous_index = 0usize;
        let steps = 500;
        for step in 0..=steps {
            // Sweep a little past the total to cover the complete branch.
            let elapsed = total * 1.1 * (step as f64) / (steps as f64);
            let snap = plan.snapshot(elapsed);

            assert!(
                (0.0..=100.0).contains(&snap.progress),
                "progress {} out of range at elapsed {elapsed}",
                snap.progress
            );
            assert!(
                snap.progress >= previous_progress,
                "progress went backwards: {} -> {} at elapsed {elapsed}",
                previous_progress,
                snap.progress
            );
            assert!(
                snap.phase_index >= previous_index,
                "phase index went backwards at elapsed {elapsed}"
            );
            assert!(snap.phase_index < plan.len());
            assert!(snap.remaining_secs >= 0.0);
            assert_eq!(snap.is_complete, snap.remaining_secs == 0.0);

            previous_progress = snap.progress;
            previous_index = snap.phase_index;
        }
    }
}

#[test]
fn endpoints_pin_zero_and_one_hundred() {
    let mut rng = TestRng::new(7);

    for _ in 0..50 {
        let plan = random_plan(&mut rng);
        let start = plan.snapshot(0.0);
        assert_eq!(start.progress, 0.0);
        assert_eq!(start.phase_index, 0);
        assert!(!start.is_complete);

        let end = plan.snapshot(plan.total_duration_secs());
        assert_eq!(end.progress, 100.0);
        assert_eq!(end.phase_index, plan.len() - 1);
        assert!(end.is_complete);
        assert_eq!(end.remaining_secs, 0.0);
    }
}

#[test]
fn snapshot_is_deterministic() {
    let mut rng = TestRng::new(1234);

    for _ in 0..20 {
        let plan = random_plan(&mut rng);
        let elapsed = rng.next_f64() * plan.total_duration_secs();
        assert_eq!(plan.snapshot(elapsed), plan.snapshot(elapsed));
    }
}
