//! Batch recognition results and the query layer over them
//!
//! The result set is static demo data; filtering, search, sorting, and
//! the summary statistics are real and match what the results screen
//! displays. High confidence means a score of at least 0.8.

use crate::errors::Result;
use crate::pipeline::ModelKind;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Confidence score at or above which a result counts as high confidence
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.8;

/// One recognized clip in the batch
#[derive(Debug, Clone, Serialize)]
pub struct RecognitionResult {
    /// Row identifier
    pub id: u32,

    /// Source clip filename
    pub filename: String,

    /// Sign the model claims to have recognized
    pub predicted_sign: String,

    /// Model confidence in [0, 1]
    pub confidence: f64,
}

impl RecognitionResult {
    fn new(id: u32, filename: &str, predicted_sign: &str, confidence: f64) -> Self {
        Self {
            id,
            filename: filename.to_string(),
            predicted_sign: predicted_sign.to_string(),
            confidence,
        }
    }

    /// True when the score clears the high-confidence bar
    pub fn is_high_confidence(&self) -> bool {
        self.confidence >= HIGH_CONFIDENCE_THRESHOLD
    }
}

/// The static batch shown by the demo
///
/// Two rows are deliberate misses (welcome predicted as HELLO, yes as
/// NO) so the filters have something to catch.
pub fn demo_results() -> Vec<RecognitionResult> {
    vec![
        RecognitionResult::new(1, "hello_sign.mp4", "HELLO", 0.94),
        RecognitionResult::new(2, "goodbye_sign.mp4", "GOODBYE", 0.89),
        RecognitionResult::new(3, "welcome_sign.mp4", "HELLO", 0.78),
        RecognitionResult::new(4, "thank_you_sign.mp4", "THANK YOU", 0.92),
        RecognitionResult::new(5, "please_sign.mp4", "PLEASE", 0.87),
        RecognitionResult::new(6, "yes_sign.mp4", "NO", 0.65),
        RecognitionResult::new(7, "no_sign.mp4", "NO", 0.91),
        RecognitionResult::new(8, "sorry_sign.mp4", "SORRY", 0.83),
    ]
}

/// Confidence band filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfidenceFilter {
    /// Everything
    #[default]
    All,

    /// Score >= 0.8
    HighConfidence,

    /// Score < 0.8
    LowConfidence,
}

impl ConfidenceFilter {
    fn matches(&self, result: &RecognitionResult) -> bool {
        match self {
            ConfidenceFilter::All => true,
            ConfidenceFilter::HighConfidence => result.is_high_confidence(),
            ConfidenceFilter::LowConfidence => !result.is_high_confidence(),
        }
    }
}

/// Column to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Filename,
    Confidence,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Combined filter, search, and sort settings for the results table
#[derive(Debug, Clone, Default)]
pub struct ResultQuery {
    pub filter: ConfidenceFilter,
    pub search: String,
    pub sort_by: SortKey,
    pub order: SortOrder,
}

impl ResultQuery {
    /// Apply the query to a result set
    ///
    /// Search matches filename or predicted sign, case-insensitively.
    /// Sorting is stable, so equal keys keep their original order.
    pub fn apply<'a>(&self, results: &'a [RecognitionResult]) -> Vec<&'a RecognitionResult> {
        let needle = self.search.to_lowercase();

        let mut matched: Vec<&RecognitionResult> = results
            .iter()
            .filter(|r| self.filter.matches(r))
            .filter(|r| {
                needle.is_empty()
                    || r.filename.to_lowercase().contains(&needle)
                    || r.predicted_sign.to_lowercase().contains(&needle)
            })
            .collect();

        matched.sort_by(|a, b| {
            let ordering = match self.sort_by {
                SortKey::Filename => a.filename.cmp(&b.filename),
                SortKey::Confidence => a
                    .confidence
                    .partial_cmp(&b.confidence)
                    .unwrap_or(std::cmp::Ordering::Equal),
            };
            match self.order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });

        matched
    }
}

/// Summary statistics for the batch header cards
#[derive(Debug, Clone, Serialize)]
pub struct BatchStats {
    /// Mean confidence across the batch, in [0, 1]
    pub avg_confidence: f64,

    /// Number of clips processed
    pub total_processed: usize,

    /// Clips at or above the high-confidence bar
    pub high_confidence_count: usize,
}

impl BatchStats {
    /// Compute stats over a result set
    pub fn compute(results: &[RecognitionResult]) -> Self {
        let total = results.len();
        let avg_confidence = if total == 0 {
            0.0
        } else {
            results.iter().map(|r| r.confidence).sum::<f64>() / total as f64
        };
        let high_confidence_count = results.iter().filter(|r| r.is_high_confidence()).count();

        Self {
            avg_confidence,
            total_processed: total,
            high_confidence_count,
        }
    }
}

/// Exportable report wrapping the batch, its stats, and provenance
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    /// Model that produced the batch
    pub model: String,

    /// Export timestamp
    pub generated_at: DateTime<Utc>,

    /// Summary statistics
    pub stats: BatchStats,

    /// Full result rows
    pub results: Vec<RecognitionResult>,
}

impl ExportReport {
    /// Assemble a report for a model and result set
    pub fn new(model: ModelKind, results: Vec<RecognitionResult>) -> Self {
        Self {
            model: model.display_name().to_string(),
            generated_at: Utc::now(),
            stats: BatchStats::compute(&results),
            results,
        }
    }

    /// Serialize the report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
