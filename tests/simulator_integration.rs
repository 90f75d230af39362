//! Integration tests for the stage progress simulator
//!
//! Exercises the full lifecycle with a real tokio timer driving the
//! ticks, plus the core invariants on the resulting progress.

use signscope::console::DemoEvent;
use signscope::pipeline::{ModelKind, StageSimulator, Stage};
use signscope::DemoError;
use std::time::Duration;

fn quick_stages() -> Vec<Stage> {
    vec![
        Stage::new("load", "Load", "Load the clip", "", 40),
        Stage::new("analyze", "Analyze", "Analyze the clip", "", 60),
        Stage::new("score", "Score", "Score the clip", "", 20),
    ]
}

#[tokio::test]
async fn test_full_run_reaches_completion() {
    let (mut simulator, mut events) = StageSimulator::new(10);
    simulator.configure(quick_stages()).unwrap();
    simulator.start().unwrap();

    // Total simulated duration is 120 ms at 10 ms per tick; wait for the
    // one-shot completion signal rather than sleeping a fixed amount.
    let mut completion_elapsed = None;
    while let Some(event) = events.recv().await {
        if let DemoEvent::ProcessingComplete { elapsed_ms } = event {
            completion_elapsed = Some(elapsed_ms);
            break;
        }
    }

    assert_eq!(completion_elapsed, Some(120));

    let snapshot = simulator.current_progress();
    assert!(snapshot.is_complete);
    assert_eq!(snapshot.overall_fraction, 1.0);
    assert_eq!(snapshot.remaining_secs, 0);
    assert_eq!(snapshot.current_stage, 2);

    simulator.stop().await;
}

#[tokio::test]
async fn test_stage_entry_events_arrive_in_order() {
    let (mut simulator, mut events) = StageSimulator::new(10);
    simulator.configure(quick_stages()).unwrap();
    simulator.start().unwrap();

    let mut entered = Vec::new();
    while let Some(event) = events.recv().await {
        match event {
            DemoEvent::StageStarted { index, .. } => entered.push(index),
            DemoEvent::ProcessingComplete { .. } => break,
            _ => {}
        }
    }

    assert_eq!(entered, vec![0, 1, 2]);
    simulator.stop().await;
}

#[tokio::test]
async fn test_progress_is_monotonic_under_the_driver() {
    let (mut simulator, mut events) = StageSimulator::new(10);
    simulator.configure(quick_stages()).unwrap();
    simulator.start().unwrap();

    let mut last_fraction = 0.0f64;
    while let Some(event) = events.recv().await {
        match event {
            DemoEvent::ProgressUpdate {
                overall_fraction, ..
            } => {
                assert!(overall_fraction >= last_fraction);
                assert!((0.0..=1.0).contains(&overall_fraction));
                last_fraction = overall_fraction;
            }
            DemoEvent::ProcessingComplete { .. } => break,
            _ => {}
        }
    }

    simulator.stop().await;
}

#[tokio::test]
async fn test_stop_prevents_further_ticks() {
    let (mut simulator, _events) = StageSimulator::new(10);
    simulator
        .configure(ModelKind::Iv3Gru.stage_plan().stages().to_vec())
        .unwrap();
    simulator.start().unwrap();

    tokio::time::sleep(Duration::from_millis(50)).await;
    simulator.stop().await;

    let frozen = simulator.current_progress();
    assert!(!frozen.is_complete);

    // No driver is left; the state must not move.
    tokio::time::sleep(Duration::from_millis(100)).await;
    let later = simulator.current_progress();
    assert_eq!(later.elapsed_ms, frozen.elapsed_ms);
}

#[tokio::test]
async fn test_lifecycle_guards() {
    let (mut simulator, _events) = StageSimulator::new(10);

    // Not configured yet.
    assert!(matches!(simulator.start(), Err(DemoError::NotConfigured)));

    simulator.configure(quick_stages()).unwrap();
    simulator.start().unwrap();

    // Second start and reconfiguration are both rejected while running.
    assert!(matches!(simulator.start(), Err(DemoError::AlreadyRunning)));
    assert!(matches!(
        simulator.configure(quick_stages()),
        Err(DemoError::AlreadyRunning)
    ));

    simulator.stop().await;

    // A stopped simulator can be restarted from the zero state.
    simulator.start().unwrap();
    simulator.stop().await;
}

#[tokio::test]
async fn test_restart_resets_progress() {
    let (mut simulator, mut events) = StageSimulator::new(5);
    simulator.configure(quick_stages()).unwrap();

    simulator.start().unwrap();
    while let Some(event) = events.recv().await {
        if matches!(event, DemoEvent::ProcessingComplete { .. }) {
            break;
        }
    }
    simulator.stop().await;
    assert!(simulator.current_progress().is_complete);

    simulator.start().unwrap();
    // Immediately after a restart the driver has applied at most a few
    // ticks of the 120 ms plan.
    let snapshot = simulator.current_progress();
    assert!(!snapshot.is_complete);
    simulator.stop().await;
}

#[tokio::test]
async fn test_completion_signal_fires_exactly_once() {
    let (mut simulator, mut events) = StageSimulator::new(5);
    simulator.configure(quick_stages()).unwrap();
    simulator.start().unwrap();

    // Give the driver time to finish and then idle past the total.
    tokio::time::sleep(Duration::from_millis(400)).await;
    simulator.stop().await;

    let mut completions = 0;
    while let Ok(event) = events.try_recv() {
        if matches!(event, DemoEvent::ProcessingComplete { .. }) {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);
}

#[test]
fn test_model_presets_are_valid_plans() {
    for model in [ModelKind::Iv3Gru, ModelKind::Transformer] {
        let plan = model.stage_plan();
        assert!(!plan.is_empty());
        assert!(plan.stages().iter().all(|s| s.duration_ms > 0));
        assert_eq!(
            plan.total_duration_ms(),
            plan.stages().iter().map(|s| s.duration_ms).sum::<u64>()
        );
    }
}
