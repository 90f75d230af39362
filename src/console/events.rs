//! Event bus for real-time demo updates
//!
//! Publisher-subscriber channel between the simulation layers and the
//! terminal renderer, with a bounded queue so a slow consumer can never
//! grow memory without limit.

use std::fmt;
use tokio::sync::mpsc;

/// Demo lifecycle and progress events
#[derive(Debug, Clone)]
pub enum DemoEvent {
    // Upload events
    UploadStarted { filename: String },
    UploadProgress { filename: String, percent: f64 },
    UploadFinished { filename: String },
    BatchUploadComplete { files: usize },

    // Processing events
    StageStarted { index: usize, label: String },
    ProgressUpdate {
        overall_fraction: f64,
        current_stage: usize,
        stage_fraction: f64,
        remaining_secs: u64,
    },

    /// One-shot completion signal, emitted exactly once per run
    ProcessingComplete { elapsed_ms: u64 },

    // Navigation events
    ScreenChanged { screen: String },

    // System events
    SystemMessage { message: String, level: MessageLevel },
}

/// Message severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageLevel::Info => write!(f, "INFO"),
            MessageLevel::Warning => write!(f, "WARN"),
            MessageLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Event bus publishing demo events to the terminal renderer
///
/// Bounded to 100 queued events; emission never blocks the tick driver.
pub struct EventBus {
    sender: mpsc::Sender<DemoEvent>,
}

impl EventBus {
    /// Create a new event bus with its receiving end
    pub fn new() -> (Self, mpsc::Receiver<DemoEvent>) {
        let (sender, receiver) = mpsc::channel(100);
        (EventBus { sender }, receiver)
    }

    /// Emit an event to the subscriber
    ///
    /// Non-blocking; if the channel is full the event is dropped rather
    /// than stalling the driver.
    pub fn emit(&self, event: DemoEvent) {
        let _ = self.sender.try_send(event);
    }

    /// Emit an event, waiting for channel capacity
    ///
    /// For one-shot signals that must not be dropped, such as the
    /// processing completion notification.
    pub async fn emit_reliable(&self, event: DemoEvent) {
        let _ = self.sender.send(event).await;
    }

    /// Clone the sender for multi-producer usage
    pub fn clone_sender(&self) -> mpsc::Sender<DemoEvent> {
        self.sender.clone()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        EventBus {
            sender: self.sender.clone(),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new().0
    }
}
