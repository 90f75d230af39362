//! Core data structures for the processing pipeline simulation
//!
//! Defines stages, validated stage plans, and the built-in model presets.
//! A `StagePlan` that passed validation can never produce a zero total
//! duration, so downstream progress arithmetic is division-safe.

use crate::errors::{DemoError, Result};
use serde::{Deserialize, Serialize};

/// One named phase of the simulated pipeline with a fixed nominal duration
///
/// Label, description, and details are opaque display text; the simulator
/// only reads `duration_ms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    /// Unique identifier
    pub id: String,

    /// Short display name
    pub label: String,

    /// One-line description of what the stage pretends to do
    pub description: String,

    /// Fine-print detail line
    pub details: String,

    /// Nominal time allotted to this stage, in milliseconds (> 0)
    pub duration_ms: u64,
}

impl Stage {
    /// Create a stage from its display text and duration
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        details: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
            details: details.into(),
            duration_ms,
        }
    }
}

/// Validated, ordered, non-empty sequence of stages
///
/// Invariants established at construction:
/// - at least one stage
/// - every `duration_ms > 0`
/// - `total_duration_ms` equals the sum of all stage durations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagePlan {
    stages: Vec<Stage>,
    total_duration_ms: u64,
}

impl StagePlan {
    /// Validate and build a stage plan
    ///
    /// Returns `InvalidConfiguration` for an empty list or any
    /// non-positive stage duration. The observed demo data never trips
    /// this, but a data-driven configuration could.
    pub fn new(stages: Vec<Stage>) -> Result<Self> {
        if stages.is_empty() {
            return Err(DemoError::InvalidConfiguration {
                reason: "stage list is empty".to_string(),
            });
        }

        for stage in &stages {
            if stage.duration_ms == 0 {
                return Err(DemoError::InvalidConfiguration {
                    reason: format!("stage '{}' has non-positive duration", stage.id),
                });
            }
        }

        let total_duration_ms = stages.iter().map(|s| s.duration_ms).sum();

        Ok(Self {
            stages,
            total_duration_ms,
        })
    }

    /// Stages in execution order
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// A validated plan is never empty; provided for completeness
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Sum of all stage durations in milliseconds
    pub fn total_duration_ms(&self) -> u64 {
        self.total_duration_ms
    }

    /// Cumulative start offset of stage `index` (sum of earlier durations)
    pub fn cumulative_start_ms(&self, index: usize) -> u64 {
        self.stages[..index].iter().map(|s| s.duration_ms).sum()
    }

    /// Cumulative end offset of stage `index` (inclusive of its duration)
    pub fn cumulative_end_ms(&self, index: usize) -> u64 {
        self.cumulative_start_ms(index) + self.stages[index].duration_ms
    }
}

/// Recognition model whose processing pipeline is being simulated
///
/// The demo ships two presets; each carries its own stage list with the
/// durations the product team tuned for the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    /// InceptionV3 feature extractor + bidirectional GRU
    Iv3Gru,

    /// Multi-head attention transformer
    Transformer,
}

impl ModelKind {
    /// Human-readable model name
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelKind::Iv3Gru => "InceptionV3-GRU",
            ModelKind::Transformer => "MHAM-Transformer",
        }
    }

    /// Parse the CLI/config spelling of a model name
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "iv3-gru" | "iv3gru" | "gru" => Ok(ModelKind::Iv3Gru),
            "transformer" | "mham" => Ok(ModelKind::Transformer),
            other => Err(DemoError::InvalidConfiguration {
                reason: format!("unknown model '{}' (expected iv3-gru or transformer)", other),
            }),
        }
    }

    /// Built-in stage plan for this model
    pub fn stage_plan(&self) -> StagePlan {
        let stages = match self {
            ModelKind::Iv3Gru => vec![
                Stage::new(
                    "preprocessing",
                    "Video Preprocessing",
                    "Extracting frames and preparing video data for analysis",
                    "Converting video to 30 FPS, normalizing resolution",
                    1800,
                ),
                Stage::new(
                    "keypoint-extraction",
                    "Keypoint Detection",
                    "Detecting hand and body keypoints using MediaPipe",
                    "Extracting 21 hand landmarks and 33 pose keypoints per frame",
                    2500,
                ),
                Stage::new(
                    "feature-extraction",
                    "Feature Extraction",
                    "InceptionV3 CNN extracting spatial features from keypoint sequences",
                    "Processing through InceptionV3 convolutional layers",
                    3200,
                ),
                Stage::new(
                    "sequence-processing",
                    "Temporal Analysis",
                    "GRU network analyzing temporal dependencies in sign sequences",
                    "Bidirectional GRU processing sequential features",
                    2800,
                ),
                Stage::new(
                    "classification",
                    "Sign Recognition",
                    "Final classification layer predicting sign language gestures",
                    "Generating confidence scores for detected signs",
                    1200,
                ),
            ],
            ModelKind::Transformer => vec![
                Stage::new(
                    "preprocessing",
                    "Video Preprocessing",
                    "Extracting frames and preparing video data for analysis",
                    "Converting to 30 FPS, MediaPipe keypoint extraction",
                    1500,
                ),
                Stage::new(
                    "keypoint-normalization",
                    "Feature Normalization",
                    "Normalizing and structuring keypoints into sequential format",
                    "Scale adjustment and sequence creation",
                    1200,
                ),
                Stage::new(
                    "positional-encoding",
                    "Positional Encoding",
                    "Applying sinusoidal positional encoding for temporal order",
                    "Adding temporal position information",
                    800,
                ),
                Stage::new(
                    "transformer-processing",
                    "Multi-Head Attention Processing",
                    "Transformer capturing spatial-temporal dependencies",
                    "MHAM analyzing parallel attention patterns",
                    3500,
                ),
                Stage::new(
                    "classification",
                    "Sign Classification",
                    "Linear classifier generating final predictions",
                    "Softmax layer producing probability distribution",
                    1000,
                ),
            ],
        };

        // Built-in data satisfies the plan invariants by construction.
        StagePlan::new(stages).expect("built-in stage plan is valid")
    }
}

impl Default for ModelKind {
    fn default() -> Self {
        ModelKind::Iv3Gru
    }
}
