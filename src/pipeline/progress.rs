//! Progress computation for the stage pipeline simulation
//!
//! Tracks elapsed time against a validated stage plan with mathematical
//! guarantees:
//! - Overall fraction is monotonic non-decreasing and bounded to [0, 1]
//! - Completion latches on the first tick reaching the total and never
//!   reverts
//! - The tick transition is a pure function of (previous state, delta),
//!   so any driver replays identical results for identical inputs

use crate::pipeline::types::StagePlan;
use serde::Serialize;

/// Lifecycle of a single stage at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StageStatus {
    /// Not yet reached
    Pending,

    /// The lowest-index incomplete stage
    Active,

    /// Cumulative elapsed time passed this stage's end
    Complete,
}

/// Read-only snapshot of simulation progress
///
/// Safe to hand to any rendering layer; every fraction is already
/// clamped and the displayed elapsed time never exceeds the plan total.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSnapshot {
    /// Elapsed milliseconds, clamped to the plan total for display
    pub elapsed_ms: u64,

    /// Index of the current stage (fixed at the last stage once complete)
    pub current_stage: usize,

    /// Overall completion in [0, 1]
    pub overall_fraction: f64,

    /// Per-stage completion in [0, 1], one entry per stage
    pub stage_fractions: Vec<f64>,

    /// True once elapsed time reached the sum of stage durations
    pub is_complete: bool,

    /// Whole seconds estimated to remain; 0 once complete
    pub remaining_secs: u64,
}

impl ProgressSnapshot {
    /// Status of stage `index` implied by this snapshot
    pub fn stage_status(&self, index: usize) -> StageStatus {
        if self.is_complete || index < self.current_stage {
            StageStatus::Complete
        } else if index == self.current_stage {
            StageStatus::Active
        } else {
            StageStatus::Pending
        }
    }

    /// Overall completion as a display percentage
    pub fn overall_percent(&self) -> f64 {
        self.overall_fraction * 100.0
    }

    /// Elapsed time formatted as MM:SS
    pub fn format_elapsed(&self) -> String {
        let seconds = self.elapsed_ms / 1000;
        format!("{:02}:{:02}", seconds / 60, seconds % 60)
    }
}

/// Result of applying one tick, with the edges the event layer cares about
#[derive(Debug, Clone)]
pub struct TickOutcome {
    /// State after the tick
    pub snapshot: ProgressSnapshot,

    /// Set when this tick moved the current stage forward
    pub stage_entered: Option<usize>,

    /// Set on the single tick where completion latched
    pub just_completed: bool,
}

/// Progress tracker owning the mutable simulation state
///
/// Internal elapsed time keeps accumulating past the total (the driver
/// may fire a few extra ticks before it is stopped); everything exposed
/// through snapshots clamps.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    plan: StagePlan,
    elapsed_ms: u64,
    completed: bool,
}

impl ProgressTracker {
    /// Create a tracker at the zero state for a validated plan
    pub fn new(plan: StagePlan) -> Self {
        Self {
            plan,
            elapsed_ms: 0,
            completed: false,
        }
    }

    /// The plan this tracker runs against
    pub fn plan(&self) -> &StagePlan {
        &self.plan
    }

    /// Reset to the zero state, keeping the plan
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
        self.completed = false;
    }

    /// Advance elapsed time and recompute all derived state
    ///
    /// Pure arithmetic over validated inputs; a zero delta is a no-op
    /// recomputation. Returns the snapshot plus the transition edges
    /// (stage entered, completion latched) produced by this tick.
    pub fn tick(&mut self, delta_ms: u64) -> TickOutcome {
        let previous_stage = self.current_stage_index();
        let was_complete = self.completed;

        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        if self.elapsed_ms >= self.plan.total_duration_ms() {
            self.completed = true;
        }

        let snapshot = self.snapshot();
        let stage_entered =
            (snapshot.current_stage != previous_stage).then_some(snapshot.current_stage);

        TickOutcome {
            just_completed: self.completed && !was_complete,
            stage_entered,
            snapshot,
        }
    }

    /// Current stage: the first stage whose cumulative end exceeds the
    /// elapsed time, or the last stage once the grand total is reached
    pub fn current_stage_index(&self) -> usize {
        let mut cumulative = 0u64;
        for (index, stage) in self.plan.stages().iter().enumerate() {
            cumulative += stage.duration_ms;
            if self.elapsed_ms < cumulative {
                return index;
            }
        }
        self.plan.len() - 1
    }

    /// Overall completion fraction, clamped to [0, 1]
    pub fn overall_fraction(&self) -> f64 {
        let total = self.plan.total_duration_ms() as f64;
        (self.elapsed_ms as f64 / total).min(1.0)
    }

    /// Completion fraction of stage `index`
    ///
    /// 1 for stages before the active one, 0 for stages after it, and a
    /// clamped linear interpolation for the active stage itself.
    pub fn stage_fraction(&self, index: usize) -> f64 {
        let start = self.plan.cumulative_start_ms(index);
        let end = self.plan.cumulative_end_ms(index);

        if self.elapsed_ms >= end {
            return 1.0;
        }
        if self.elapsed_ms <= start {
            return 0.0;
        }

        let stage_elapsed = (self.elapsed_ms - start) as f64;
        (stage_elapsed / self.plan.stages()[index].duration_ms as f64).min(1.0)
    }

    /// Whole seconds estimated to remain; never negative, 0 once complete
    pub fn remaining_secs(&self) -> u64 {
        self.plan
            .total_duration_ms()
            .saturating_sub(self.elapsed_ms)
            / 1000
    }

    /// True once elapsed time reached the total; never reverts
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Build a read-only snapshot of the current state
    pub fn snapshot(&self) -> ProgressSnapshot {
        let stage_fractions = (0..self.plan.len())
            .map(|i| self.stage_fraction(i))
            .collect();

        ProgressSnapshot {
            elapsed_ms: self.elapsed_ms.min(self.plan.total_duration_ms()),
            current_stage: self.current_stage_index(),
            overall_fraction: self.overall_fraction(),
            stage_fractions,
            is_complete: self.completed,
            remaining_secs: self.remaining_secs(),
        }
    }
}

/// Pure transition function over snapshots
///
/// Convenience for callers that want to replay tick sequences without
/// owning a tracker; builds a throwaway tracker at `elapsed_ms` and
/// applies the delta.
pub fn advance(plan: &StagePlan, elapsed_ms: u64, delta_ms: u64) -> ProgressSnapshot {
    let mut tracker = ProgressTracker::new(plan.clone());
    tracker.elapsed_ms = elapsed_ms;
    tracker.completed = elapsed_ms >= plan.total_duration_ms();
    tracker.tick(delta_ms).snapshot
}
