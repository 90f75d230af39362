//! Telemetry for the demo runtime
//!
//! Counts what happened during a run (ticks, stage entries, uploads,
//! completion signals) and prints a session summary at exit.

use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Telemetry event types
#[derive(Debug, Clone)]
pub enum TelemetryEvent {
    /// One tick applied to the progress tracker
    TickApplied { elapsed_ms: u64 },

    /// The simulation entered a new stage
    StageEntered { index: usize },

    /// One file finished its simulated upload
    UploadCompleted { filename: String },

    /// The one-shot completion signal fired
    CompletionSignal { elapsed_ms: u64 },

    /// Screen navigation occurred
    ScreenChanged { screen: String },
}

/// Aggregated run statistics
#[derive(Debug, Clone, Default)]
pub struct TelemetryStats {
    pub ticks_applied: usize,
    pub stages_entered: usize,
    pub uploads_completed: usize,
    pub completion_signals: usize,
    pub screen_changes: usize,
}

/// Telemetry collector shared across the demo components
#[derive(Clone)]
pub struct TelemetryCollector {
    stats: Arc<Mutex<TelemetryStats>>,
    start_time: Instant,
}

impl TelemetryCollector {
    /// Create a new collector
    pub fn new() -> Self {
        Self {
            stats: Arc::new(Mutex::new(TelemetryStats::default())),
            start_time: Instant::now(),
        }
    }

    /// Record an event
    pub fn record(&self, event: TelemetryEvent) {
        let mut stats = self.stats.lock().unwrap();
        match event {
            TelemetryEvent::TickApplied { .. } => stats.ticks_applied += 1,
            TelemetryEvent::StageEntered { .. } => stats.stages_entered += 1,
            TelemetryEvent::UploadCompleted { .. } => stats.uploads_completed += 1,
            TelemetryEvent::CompletionSignal { .. } => stats.completion_signals += 1,
            TelemetryEvent::ScreenChanged { .. } => stats.screen_changes += 1,
        }
    }

    /// Get current statistics
    pub fn get_stats(&self) -> TelemetryStats {
        self.stats.lock().unwrap().clone()
    }

    /// Elapsed wall time since the collector was created
    pub fn elapsed(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    /// Print the end-of-run summary
    pub fn display_summary(&self) {
        let stats = self.get_stats();

        println!("\nSession Summary");
        println!("─────────────────────────────────────");
        println!("Duration:           {:?}", self.elapsed());
        println!("Ticks applied:      {}", stats.ticks_applied);
        println!("Stages entered:     {}", stats.stages_entered);
        println!("Uploads completed:  {}", stats.uploads_completed);
        println!("Completion signals: {}", stats.completion_signals);
        println!("Screen changes:     {}", stats.screen_changes);
        println!();
    }
}

impl Default for TelemetryCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_starts_empty() {
        let collector = TelemetryCollector::new();
        let stats = collector.get_stats();
        assert_eq!(stats.ticks_applied, 0);
        assert_eq!(stats.completion_signals, 0);
    }

    #[test]
    fn test_record_events() {
        let collector = TelemetryCollector::new();

        collector.record(TelemetryEvent::TickApplied { elapsed_ms: 100 });
        collector.record(TelemetryEvent::TickApplied { elapsed_ms: 200 });
        collector.record(TelemetryEvent::StageEntered { index: 1 });
        collector.record(TelemetryEvent::UploadCompleted {
            filename: "hello_sign.mp4".to_string(),
        });
        collector.record(TelemetryEvent::CompletionSignal { elapsed_ms: 9500 });

        let stats = collector.get_stats();
        assert_eq!(stats.ticks_applied, 2);
        assert_eq!(stats.stages_entered, 1);
        assert_eq!(stats.uploads_completed, 1);
        assert_eq!(stats.completion_signals, 1);
    }

    #[test]
    fn test_clone_shares_stats() {
        let collector = TelemetryCollector::new();
        let clone = collector.clone();

        clone.record(TelemetryEvent::ScreenChanged {
            screen: "Processing".to_string(),
        });

        assert_eq!(collector.get_stats().screen_changes, 1);
    }
}
