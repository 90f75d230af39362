//! End-to-end demo flow shared by the CLI entry points
//!
//! Walks the four screens in order: simulated upload, the stage pipeline
//! animation, a summary of the keypoint visualization data, and the
//! batch results table. Each phase consumes the state the previous one
//! produced, mirroring the product demo's navigation callbacks.

use crate::cli::Verbosity;
use crate::config::DemoConfig;
use crate::console::{DemoDisplay, DemoEvent};
use crate::errors::Result;
use crate::flow::{FlowEvent, Screen};
use crate::keypoints;
use crate::pipeline::{ModelKind, StageSimulator};
use crate::playback::demo_library;
use crate::results::{demo_results, BatchStats, ResultQuery};
use crate::telemetry::{TelemetryCollector, TelemetryEvent};
use crate::upload::{demo_batch, UploadBatch};
use std::time::Duration;

/// Summary of a completed demo run
#[derive(Debug, Clone)]
pub struct DemoOutcome {
    /// Simulated processing time in milliseconds
    pub processing_elapsed_ms: u64,

    /// Files that finished the simulated upload
    pub uploads_completed: usize,

    /// Screen the flow ended on
    pub final_screen: Screen,
}

/// Run the full demo flow
pub async fn run_demo(
    config: &DemoConfig,
    model: ModelKind,
    single: bool,
    verbosity: Verbosity,
    display: &mut DemoDisplay,
    telemetry: &TelemetryCollector,
) -> Result<DemoOutcome> {
    let mut screen = Screen::Upload;

    // Upload screen
    display.show_section("Upload");
    let uploads_completed = run_upload_phase(config, single, verbosity, display, telemetry).await;

    screen = advance(screen, FlowEvent::UploadFinished, telemetry)?;

    // Processing screen
    display.show_section("Processing");
    let processing_elapsed_ms =
        run_processing_phase(config, model, verbosity, display, telemetry).await?;

    screen = advance(screen, FlowEvent::ProcessingComplete, telemetry)?;

    // Visualization screen
    display.show_section("Visualization");
    show_visualization_summary(display);

    screen = advance(screen, FlowEvent::ContinueToResults, telemetry)?;

    // Results screen
    display.show_section("Recognition Results");
    let results = demo_results();
    let query = ResultQuery::default();
    display.show_results_table(&query.apply(&results));
    display.show_batch_stats(&BatchStats::compute(&results));

    Ok(DemoOutcome {
        processing_elapsed_ms,
        uploads_completed,
        final_screen: screen,
    })
}

/// Tick the upload batch to completion, rendering per-file bars
async fn run_upload_phase(
    config: &DemoConfig,
    single: bool,
    verbosity: Verbosity,
    display: &mut DemoDisplay,
    telemetry: &TelemetryCollector,
) -> usize {
    let mut batch = if single || !config.upload.batch_mode {
        let mut batch = UploadBatch::new(false);
        batch.add_file("hello_sign.mp4", 12_582_912);
        batch
    } else {
        demo_batch()
    };

    let bars: Vec<_> = if verbosity.show_progress() {
        batch
            .files()
            .iter()
            .map(|f| (f.id, display.start_upload(&f.filename)))
            .collect()
    } else {
        Vec::new()
    };

    let mut rng = rand::thread_rng();
    let mut interval = tokio::time::interval(Duration::from_millis(config.upload.tick_ms));
    interval.tick().await;

    while !batch.is_complete() {
        interval.tick().await;
        let finished = batch.tick(&mut rng);

        for (id, bar) in &bars {
            if let Some(file) = batch.files().iter().find(|f| f.id == *id) {
                display.update_percent(bar, file.progress_percent, None);
            }
        }

        for filename in finished {
            telemetry.record(TelemetryEvent::UploadCompleted {
                filename: filename.clone(),
            });
            if verbosity.show_events() {
                display.show_info(&format!("{} ready to process", filename));
            }
        }
    }

    for (_, bar) in bars {
        bar.finish_and_clear();
    }

    let completed = batch.completed_count();
    display.show_info(&format!(
        "{} file(s) uploaded ({:.1} MB total)",
        completed,
        batch.total_size_bytes() as f64 / (1024.0 * 1024.0)
    ));
    completed
}

/// Run the stage simulator to completion, driven by its own tick task
async fn run_processing_phase(
    config: &DemoConfig,
    model: ModelKind,
    verbosity: Verbosity,
    display: &mut DemoDisplay,
    telemetry: &TelemetryCollector,
) -> Result<u64> {
    let tick_ms = config.tick_interval_ms;
    let (mut simulator, mut events) = StageSimulator::new(tick_ms);
    simulator.configure_plan(model.stage_plan())?;

    if verbosity.show_progress() {
        let plan = model.stage_plan();
        display.start_processing(&plan, model.display_name());
    }

    simulator.start()?;

    let mut elapsed_ms = 0;
    while let Some(event) = events.recv().await {
        match event {
            DemoEvent::StageStarted { index, label } => {
                telemetry.record(TelemetryEvent::StageEntered { index });
                if verbosity.show_progress() {
                    display.start_stage(&label);
                }
                if verbosity.show_events() {
                    display.show_info(&format!("Stage {} started: {}", index + 1, label));
                }
            }
            DemoEvent::ProgressUpdate { .. } => {
                telemetry.record(TelemetryEvent::TickApplied {
                    elapsed_ms: simulator.current_progress().elapsed_ms,
                });
                if verbosity.show_progress() {
                    display.render_snapshot(&simulator.current_progress());
                }
            }
            DemoEvent::ProcessingComplete { elapsed_ms: total } => {
                telemetry.record(TelemetryEvent::CompletionSignal { elapsed_ms: total });
                elapsed_ms = total;
                break;
            }
            _ => {}
        }
    }

    simulator.stop().await;
    display.finish_with_success("Analysis complete", elapsed_ms);

    Ok(elapsed_ms)
}

/// Print the visualization screen summary for the first demo clip
fn show_visualization_summary(display: &DemoDisplay) {
    let mut library = demo_library();

    // Scrub the whole clip once so the timestamps reflect the last frame.
    library.cursor_mut().toggle_playback();
    while library.cursor().is_playing() {
        library.cursor_mut().tick();
    }

    let clip = library.current_clip().clone();
    let cursor = library.cursor();

    display.show_info(&format!(
        "Clip {} of {}: {} ({:.1}s)",
        library.current_index() + 1,
        library.clips().len(),
        clip.name,
        clip.duration_secs
    ));
    display.show_info(&format!(
        "Frames: {} at 30 FPS (scrubbed to {})",
        cursor.total_frames(),
        cursor.format_timestamp()
    ));
    display.show_info(&format!(
        "Landmarks per frame: {} (body {}, hands {} each)",
        keypoints::total_landmarks(),
        keypoints::BODY_KEYPOINTS.len(),
        keypoints::LEFT_HAND_KEYPOINTS.len()
    ));
    display.show_info(&format!(
        "Mean keypoint confidence: {:.2}",
        keypoints::average_confidence(&keypoints::BODY_KEYPOINTS)
    ));
}

/// Apply a flow transition and record the navigation
fn advance(
    screen: Screen,
    event: FlowEvent,
    telemetry: &TelemetryCollector,
) -> Result<Screen> {
    let next = screen.transition(event)?;
    telemetry.record(TelemetryEvent::ScreenChanged {
        screen: next.display_name().to_string(),
    });
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_run_demo_quiet_reaches_results() {
        // Paused tokio time auto-advances the interval timers, so the
        // default tick rates complete immediately in this test.
        let config = DemoConfig::default();

        let mut display = DemoDisplay::new();
        let telemetry = TelemetryCollector::new();

        let outcome = run_demo(
            &config,
            ModelKind::Transformer,
            true,
            Verbosity::Quiet,
            &mut display,
            &telemetry,
        )
        .await
        .unwrap();

        assert_eq!(outcome.final_screen, Screen::Results);
        assert_eq!(outcome.uploads_completed, 1);
        assert_eq!(outcome.processing_elapsed_ms, 8000);

        let stats = telemetry.get_stats();
        assert_eq!(stats.completion_signals, 1);
        assert_eq!(stats.uploads_completed, 1);
        assert_eq!(stats.screen_changes, 3);
        // All five stages entered (the first at start, four transitions).
        assert_eq!(stats.stages_entered, 5);
    }
}
