//! Screen flow state machine
//!
//! Deterministic transitions over the four demo screens. The happy path
//! is upload, processing, visualization, results; the navigation bar can
//! also jump anywhere directly, which resets the path from that screen.

use crate::errors::{DemoError, Result};
use serde::{Deserialize, Serialize};

/// The four demo screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    /// File selection and simulated upload
    Upload,

    /// Stage pipeline animation
    Processing,

    /// Keypoint playback over the analyzed clip
    Visualization,

    /// Batch recognition results
    Results,
}

/// Events that drive screen transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// Every queued upload finished
    UploadFinished,

    /// The stage simulator fired its one-shot completion signal
    ProcessingComplete,

    /// User continued from the visualization to the results table
    ContinueToResults,

    /// User navigated back to the start
    BackToUpload,

    /// Direct navigation to any screen
    JumpTo(Screen),
}

impl Screen {
    /// Attempt a transition
    ///
    /// Transition function: Screen x FlowEvent -> Result<Screen>
    ///
    /// Valid transitions:
    /// 1. Upload        -> Processing     (on: UploadFinished)
    /// 2. Processing    -> Visualization  (on: ProcessingComplete)
    /// 3. Visualization -> Results        (on: ContinueToResults)
    /// 4. Results       -> Upload         (on: BackToUpload)
    /// 5. *             -> any            (on: JumpTo)
    pub fn transition(&self, event: FlowEvent) -> Result<Screen> {
        use FlowEvent::*;
        use Screen::*;

        // The nav bar can jump from anywhere.
        if let JumpTo(target) = event {
            return Ok(target);
        }

        match (self, event) {
            (Upload, UploadFinished) => Ok(Processing),
            (Processing, ProcessingComplete) => Ok(Visualization),
            (Visualization, ContinueToResults) => Ok(Results),
            (Results, BackToUpload) => Ok(Upload),
            (from, event) => Err(DemoError::InvalidTransition {
                from: from.display_name().to_string(),
                event: format!("{:?}", event),
            }),
        }
    }

    /// Human-readable screen name
    pub fn display_name(&self) -> &'static str {
        match self {
            Screen::Upload => "Upload",
            Screen::Processing => "Processing",
            Screen::Visualization => "Visualization",
            Screen::Results => "Results",
        }
    }

    /// Screens in navigation-bar order
    pub fn all() -> [Screen; 4] {
        [
            Screen::Upload,
            Screen::Processing,
            Screen::Visualization,
            Screen::Results,
        ]
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Upload
    }
}
