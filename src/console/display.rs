//! Display manager for the terminal demo UI
//!
//! Renders upload bars, stage progress, and result tables in place.
//! Update frequency follows the simulation tick (10 FPS nominal).

use crate::pipeline::{ProgressSnapshot, StagePlan};
use crate::results::{BatchStats, RecognitionResult};
use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Display manager for the demo UI
///
/// Features:
/// - Overall and per-stage progress bars
/// - Upload progress rendering
/// - Color-coded result tables
pub struct DemoDisplay {
    multi_progress: MultiProgress,
    overall_bar: Option<ProgressBar>,
    stage_bar: Option<ProgressBar>,
    update_interval: Duration,
}

impl DemoDisplay {
    /// Create a new display manager (100 ms steady tick, 10 FPS)
    pub fn new() -> Self {
        DemoDisplay {
            multi_progress: MultiProgress::new(),
            overall_bar: None,
            stage_bar: None,
            update_interval: Duration::from_millis(100),
        }
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str, model: &str) {
        let width = 64;
        let top = format!("{}", "=".repeat(width).cyan());
        let title = format!("  SignScope {} - Sign Language Recognition Demo", version);
        let info = format!("  Model: {} | Dataset: FSL-105", model);
        let bottom = format!("{}", "=".repeat(width).cyan());

        println!("\n{}", top);
        println!("{}", title.bold().cyan());
        println!("{}", info.dimmed());
        println!("{}\n", bottom);
    }

    /// Create the overall processing bar for a stage plan
    pub fn start_processing(&mut self, plan: &StagePlan, model: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(100));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} Processing [{bar:40.cyan/blue}] {pos}% | {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );
        pb.set_message(format!(
            "Analyzing with {} ({} stages)",
            model,
            plan.len()
        ));
        pb.enable_steady_tick(self.update_interval);

        self.overall_bar = Some(pb.clone());
        pb
    }

    /// Create the bar for one pipeline stage
    pub fn start_stage(&mut self, label: &str) -> ProgressBar {
        // Finish the previous stage bar if one is still attached.
        if let Some(pb) = self.stage_bar.take() {
            pb.finish_and_clear();
        }

        let pb = self.multi_progress.add(ProgressBar::new(100));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green}   {msg} [{bar:30.green/blue}] {pos}%")
                .unwrap()
                .progress_chars("=>-"),
        );
        pb.set_message(label.to_string());
        pb.enable_steady_tick(self.update_interval);

        self.stage_bar = Some(pb.clone());
        pb
    }

    /// Create an upload bar for one file
    pub fn start_upload(&mut self, filename: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(100));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.blue} Uploading {msg} [{bar:30.blue/white}] {pos}%")
                .unwrap()
                .progress_chars("=>-"),
        );
        pb.set_message(filename.to_string());
        pb.enable_steady_tick(self.update_interval);
        pb
    }

    /// Push a progress snapshot onto the active bars
    pub fn render_snapshot(&self, snapshot: &ProgressSnapshot) {
        if let Some(pb) = &self.overall_bar {
            pb.set_position((snapshot.overall_fraction * 100.0).round() as u64);
            if snapshot.is_complete {
                pb.set_message("Analysis Complete!".to_string());
            } else {
                pb.set_message(format!(
                    "Step {} | {}s remaining",
                    snapshot.current_stage + 1,
                    snapshot.remaining_secs
                ));
            }
        }
        if let Some(pb) = &self.stage_bar {
            let fraction = snapshot.stage_fractions[snapshot.current_stage];
            pb.set_position((fraction * 100.0).round() as u64);
        }
    }

    /// Update a specific bar to a percent position
    pub fn update_percent(&self, pb: &ProgressBar, percent: f64, message: Option<&str>) {
        pb.set_position(percent.round() as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    /// Finish all progress bars
    pub fn finish_all(&mut self) {
        if let Some(pb) = self.stage_bar.take() {
            pb.finish_and_clear();
        }
        if let Some(pb) = self.overall_bar.take() {
            pb.finish_and_clear();
        }
    }

    /// Finish with a success line
    pub fn finish_with_success(&mut self, message: &str, elapsed_ms: u64) {
        self.finish_all();
        println!(
            "{} {} {}",
            "✓".green(),
            message,
            format!("({}ms)", elapsed_ms).dimmed()
        );
    }

    /// Display an error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display a warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display an info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(60).cyan());
    }

    /// Render the recognition results table
    pub fn show_results_table(&self, results: &[&RecognitionResult]) {
        println!(
            "  {:<22} {:<12} {}",
            "Video".bold(),
            "Sign".bold(),
            "Confidence".bold()
        );
        for result in results {
            let confidence = format!("{:.1}%", result.confidence * 100.0);
            let colored_confidence = if result.confidence >= 0.8 {
                confidence.green()
            } else if result.confidence >= 0.6 {
                confidence.yellow()
            } else {
                confidence.red()
            };
            println!(
                "  {:<22} {:<12} {}",
                result.filename,
                result.predicted_sign.blue().bold(),
                colored_confidence
            );
        }
    }

    /// Render the batch summary statistics
    pub fn show_batch_stats(&self, stats: &BatchStats) {
        println!();
        println!(
            "  Average confidence: {}",
            format!("{:.1}%", stats.avg_confidence * 100.0).bold()
        );
        println!(
            "  High confidence:    {}/{}",
            stats.high_confidence_count, stats.total_processed
        );
        println!("  Videos processed:   {}", stats.total_processed);
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }

    /// Flush pending output
    pub fn flush(&self) -> io::Result<()> {
        io::stdout().flush()
    }
}

impl Default for DemoDisplay {
    fn default() -> Self {
        Self::new()
    }
}
