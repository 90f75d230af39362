//! Error types for the SignScope demo engine
//!
//! Configuration problems are rejected up front, never tolerated at tick
//! time: a malformed stage plan would otherwise surface as divide-by-zero
//! percentages deep inside the progress arithmetic.

use thiserror::Error;

/// Main error type for the demo engine
#[derive(Error, Debug)]
pub enum DemoError {
    /// Stage plan rejected at configuration time
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// `start()` called while a simulation is already active
    #[error("Simulator is already running; call stop() first")]
    AlreadyRunning,

    /// Operation requires a configured stage plan
    #[error("Simulator has no stage plan configured")]
    NotConfigured,

    /// Screen flow transition errors
    #[error("Invalid screen transition from {from} on {event}")]
    InvalidTransition { from: String, event: String },

    /// Playback navigation errors
    #[error("Clip index {index} out of range (library holds {len} clips)")]
    ClipOutOfRange { index: usize, len: usize },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration file errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic errors with context
    #[error("Demo error: {0}")]
    Generic(String),
}

/// Result type alias for demo engine operations
pub type Result<T> = std::result::Result<T, DemoError>;

/// Convert anyhow errors to DemoError
impl From<anyhow::Error> for DemoError {
    fn from(err: anyhow::Error) -> Self {
        DemoError::Generic(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_display() {
        let err = DemoError::InvalidConfiguration {
            reason: "stage list is empty".to_string(),
        };
        assert!(err.to_string().contains("stage list is empty"));
    }

    #[test]
    fn test_already_running_display() {
        let err = DemoError::AlreadyRunning;
        assert!(err.to_string().contains("stop()"));
    }

    #[test]
    fn test_invalid_transition_display() {
        let err = DemoError::InvalidTransition {
            from: "Upload".to_string(),
            event: "ProcessingComplete".to_string(),
        };
        assert!(err.to_string().contains("Upload"));
        assert!(err.to_string().contains("ProcessingComplete"));
    }
}
