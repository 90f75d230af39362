//! Stage progress simulator with a timer-driven tick loop
//!
//! Wraps the pure progress tracker in a lifecycle shell: `configure`,
//! `start`, `stop`, and non-blocking snapshots. The driver is a single
//! tokio task firing at a fixed interval; each firing advances simulated
//! time by the nominal interval, so a run is deterministic regardless of
//! scheduler jitter.

use crate::console::events::{DemoEvent, EventBus};
use crate::errors::{DemoError, Result};
use crate::pipeline::progress::{ProgressSnapshot, ProgressTracker, TickOutcome};
use crate::pipeline::types::{Stage, StagePlan};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Nominal tick interval matching the original demo animation (10 FPS)
pub const DEFAULT_TICK_MS: u64 = 100;

/// Timer-driven simulator for a multi-stage processing pipeline
///
/// Owns the progress state and the tick driver. Exactly one driver runs
/// at a time; `start()` refuses to stack a second one, and `stop()`
/// guarantees no tick lands after it returns.
pub struct StageSimulator {
    tracker: Option<Arc<Mutex<ProgressTracker>>>,
    events: EventBus,
    tick_ms: u64,
    driver: Option<JoinHandle<()>>,
}

impl StageSimulator {
    /// Create an unconfigured simulator and the event receiver its
    /// renderer should drain
    pub fn new(tick_ms: u64) -> (Self, mpsc::Receiver<DemoEvent>) {
        let (events, receiver) = EventBus::new();
        (
            Self {
                tracker: None,
                events,
                tick_ms: tick_ms.max(1),
                driver: None,
            },
            receiver,
        )
    }

    /// Install a stage plan, validating it first
    ///
    /// Fails with `InvalidConfiguration` on an empty list or any
    /// non-positive duration, and with `AlreadyRunning` if a driver is
    /// active (stop first, then reconfigure).
    pub fn configure(&mut self, stages: Vec<Stage>) -> Result<()> {
        if self.driver.is_some() {
            return Err(DemoError::AlreadyRunning);
        }
        let plan = StagePlan::new(stages)?;
        self.tracker = Some(Arc::new(Mutex::new(ProgressTracker::new(plan))));
        Ok(())
    }

    /// Install an already-validated plan (e.g. a model preset)
    pub fn configure_plan(&mut self, plan: StagePlan) -> Result<()> {
        if self.driver.is_some() {
            return Err(DemoError::AlreadyRunning);
        }
        self.tracker = Some(Arc::new(Mutex::new(ProgressTracker::new(plan))));
        Ok(())
    }

    /// Reset state and begin the tick driver
    ///
    /// Fails with `NotConfigured` before `configure()`, and with
    /// `AlreadyRunning` until an explicit `stop()`, even if the previous
    /// run already ticked to completion.
    pub fn start(&mut self) -> Result<()> {
        if self.driver.is_some() {
            return Err(DemoError::AlreadyRunning);
        }
        let tracker = self.tracker.as_ref().ok_or(DemoError::NotConfigured)?;

        {
            let mut guard = tracker.lock().unwrap();
            guard.reset();
            let label = guard.plan().stages()[0].label.clone();
            self.events.emit(DemoEvent::StageStarted { index: 0, label });
        }

        let tracker = Arc::clone(tracker);
        let events = self.events.clone();
        let tick_ms = self.tick_ms;

        self.driver = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(tick_ms));
            // The first interval tick completes immediately; consume it so
            // the first simulated delta lands after one full period.
            interval.tick().await;

            loop {
                interval.tick().await;
                let outcome = apply_tick(&tracker, &events, tick_ms);
                if outcome.just_completed {
                    // The one-shot completion signal must reach the
                    // consumer even when the progress queue is saturated.
                    events
                        .emit_reliable(DemoEvent::ProcessingComplete {
                            elapsed_ms: outcome.snapshot.elapsed_ms,
                        })
                        .await;
                }
                if outcome.snapshot.is_complete {
                    break;
                }
            }
        }));

        Ok(())
    }

    /// Advance simulated time manually
    ///
    /// For callers driving the simulator without a timer (tests, replay).
    /// Must not be mixed with a running driver; the progress state is
    /// designed for exactly one logical driver at a time.
    pub fn tick(&self, delta_ms: u64) -> Result<ProgressSnapshot> {
        let tracker = self.tracker.as_ref().ok_or(DemoError::NotConfigured)?;
        let outcome = apply_tick(tracker, &self.events, delta_ms);
        if outcome.just_completed {
            self.events.emit(DemoEvent::ProcessingComplete {
                elapsed_ms: outcome.snapshot.elapsed_ms,
            });
        }
        Ok(outcome.snapshot)
    }

    /// Halt the tick driver
    ///
    /// After this returns no further tick runs: the driver task is
    /// aborted and awaited. The last computed state stays readable.
    pub async fn stop(&mut self) {
        if let Some(handle) = self.driver.take() {
            handle.abort();
            let _ = handle.await;
        }
    }

    /// True while a driver is installed (cleared only by `stop()`)
    pub fn is_running(&self) -> bool {
        self.driver.is_some()
    }

    /// Read-only snapshot of the current progress state
    ///
    /// Never blocks on the driver beyond the tick critical section, and
    /// is valid at any point in the lifecycle; before configuration it
    /// reports the zero state.
    pub fn current_progress(&self) -> ProgressSnapshot {
        match &self.tracker {
            Some(tracker) => tracker.lock().unwrap().snapshot(),
            None => ProgressSnapshot {
                elapsed_ms: 0,
                current_stage: 0,
                overall_fraction: 0.0,
                stage_fractions: Vec::new(),
                is_complete: false,
                remaining_secs: 0,
            },
        }
    }

    /// Clone of the event bus for additional producers
    pub fn event_bus(&self) -> EventBus {
        self.events.clone()
    }
}

/// Apply one tick and publish the per-tick events
///
/// Emits `StageStarted` on stage entry and a `ProgressUpdate` every
/// tick. Completion is emitted by the caller, which knows whether it
/// can afford the reliable (awaiting) send.
fn apply_tick(tracker: &Mutex<ProgressTracker>, events: &EventBus, delta_ms: u64) -> TickOutcome {
    let (outcome, entered_label) = {
        let mut guard = tracker.lock().unwrap();
        let outcome = guard.tick(delta_ms);
        let label = outcome
            .stage_entered
            .map(|i| guard.plan().stages()[i].label.clone());
        (outcome, label)
    };

    if let (Some(index), Some(label)) = (outcome.stage_entered, entered_label) {
        events.emit(DemoEvent::StageStarted { index, label });
    }

    let snap = &outcome.snapshot;
    events.emit(DemoEvent::ProgressUpdate {
        overall_fraction: snap.overall_fraction,
        current_stage: snap.current_stage,
        stage_fraction: snap.stage_fractions[snap.current_stage],
        remaining_secs: snap.remaining_secs,
    });

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::ModelKind;

    fn short_stages() -> Vec<Stage> {
        vec![
            Stage::new("a", "A", "", "", 30),
            Stage::new("b", "B", "", "", 50),
            Stage::new("c", "C", "", "", 20),
        ]
    }

    #[test]
    fn test_configure_rejects_empty() {
        let (mut sim, _rx) = StageSimulator::new(DEFAULT_TICK_MS);
        assert!(matches!(
            sim.configure(Vec::new()),
            Err(DemoError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_configure_rejects_zero_duration() {
        let (mut sim, _rx) = StageSimulator::new(DEFAULT_TICK_MS);
        let stages = vec![Stage::new("a", "A", "", "", 0)];
        assert!(matches!(
            sim.configure(stages),
            Err(DemoError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_progress_before_configure_is_zero_state() {
        let (sim, _rx) = StageSimulator::new(DEFAULT_TICK_MS);
        let snap = sim.current_progress();
        assert_eq!(snap.elapsed_ms, 0);
        assert_eq!(snap.overall_fraction, 0.0);
        assert!(!snap.is_complete);
    }

    #[test]
    fn test_manual_tick_without_configure_fails() {
        let (sim, _rx) = StageSimulator::new(DEFAULT_TICK_MS);
        assert!(matches!(sim.tick(100), Err(DemoError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_start_requires_configuration() {
        let (mut sim, _rx) = StageSimulator::new(DEFAULT_TICK_MS);
        assert!(matches!(sim.start(), Err(DemoError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_start_twice_fails_until_stop() {
        let (mut sim, _rx) = StageSimulator::new(DEFAULT_TICK_MS);
        sim.configure(short_stages()).unwrap();

        sim.start().unwrap();
        assert!(matches!(sim.start(), Err(DemoError::AlreadyRunning)));

        sim.stop().await;
        assert!(sim.start().is_ok());
        sim.stop().await;
    }

    #[tokio::test]
    async fn test_configure_while_running_fails() {
        let (mut sim, _rx) = StageSimulator::new(DEFAULT_TICK_MS);
        sim.configure(short_stages()).unwrap();
        sim.start().unwrap();

        assert!(matches!(
            sim.configure(short_stages()),
            Err(DemoError::AlreadyRunning)
        ));
        sim.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_runs_to_completion() {
        let (mut sim, mut rx) = StageSimulator::new(10);
        sim.configure(short_stages()).unwrap();
        sim.start().unwrap();

        // Total plan duration is 100 ms at a 10 ms tick; advance paused
        // time well past it.
        tokio::time::sleep(Duration::from_millis(500)).await;

        let snap = sim.current_progress();
        assert!(snap.is_complete);
        assert_eq!(snap.overall_fraction, 1.0);
        assert_eq!(snap.remaining_secs, 0);

        let mut completions = 0;
        while let Ok(event) = rx.try_recv() {
            if matches!(event, DemoEvent::ProcessingComplete { .. }) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);

        sim.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_ticking() {
        let (mut sim, _rx) = StageSimulator::new(10);
        sim.configure(ModelKind::Iv3Gru.stage_plan().stages().to_vec())
            .unwrap();
        sim.start().unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;
        sim.stop().await;
        let frozen = sim.current_progress();
        assert!(!frozen.is_complete);

        tokio::time::sleep(Duration::from_millis(200)).await;
        let after = sim.current_progress();
        assert_eq!(after.elapsed_ms, frozen.elapsed_ms);
        assert_eq!(after.current_stage, frozen.current_stage);
    }

    #[tokio::test]
    async fn test_manual_tick_scenario() {
        let (mut sim, mut rx) = StageSimulator::new(DEFAULT_TICK_MS);
        sim.configure(vec![
            Stage::new("a", "A", "", "", 1000),
            Stage::new("b", "B", "", "", 2000),
            Stage::new("c", "C", "", "", 500),
        ])
        .unwrap();

        let snap = sim.tick(1000).unwrap();
        assert_eq!(snap.current_stage, 1);
        assert!((snap.overall_fraction - 1000.0 / 3500.0).abs() < 1e-9);

        let snap = sim.tick(2000).unwrap();
        assert_eq!(snap.current_stage, 2);
        assert_eq!(snap.stage_fractions[2], 0.0);

        let snap = sim.tick(500).unwrap();
        assert!(snap.is_complete);
        assert_eq!(snap.overall_fraction, 1.0);

        // Stage entry events for B and C, one completion.
        let mut entered = Vec::new();
        let mut completions = 0;
        while let Ok(event) = rx.try_recv() {
            match event {
                DemoEvent::StageStarted { index, .. } => entered.push(index),
                DemoEvent::ProcessingComplete { .. } => completions += 1,
                _ => {}
            }
        }
        assert_eq!(entered, vec![1, 2]);
        assert_eq!(completions, 1);
    }
}
