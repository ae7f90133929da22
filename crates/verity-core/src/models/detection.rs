//! Per-modality detection output as returned by the external analyzers.
//!
//! A `DetectionResult` is immutable once produced. The swarm attaches it to
//! the task that produced it and downstream fusion shares it via `Arc`
//! rather than copying.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::modality::Modality;

/// One detector-specific finding supporting a detection verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceItem {
    /// Free-form detector-specific kind, e.g. `"gan_artifacts"` or
    /// `"voice_cloning_markers"`. The evidence chain classifies this by
    /// keyword containment.
    pub kind: String,
    /// Human-readable description of the finding.
    pub description: String,
    /// How strongly this item supports the verdict.
    pub confidence: Confidence,
    /// Optional detector-specific payload (bounding boxes, spectra, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

impl EvidenceItem {
    /// Create an evidence item without a metadata payload.
    pub fn new(kind: impl Into<String>, description: impl Into<String>, confidence: f64) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
            confidence: Confidence::new(confidence),
            metadata: None,
        }
    }
}

/// The verdict of one analyzer for one content item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Which analysis channel produced this result.
    pub modality: Modality,
    /// Detector confidence in its own verdict.
    pub confidence: Confidence,
    /// Whether the detector judged the content synthetic/manipulated.
    pub is_synthetic: bool,
    /// Findings backing the verdict.
    pub evidence: Vec<EvidenceItem>,
    /// Version string of the model that produced this result,
    /// e.g. `"efficientnet-b7-v1.0"`.
    pub model_version: String,
    /// When the analyzer produced the result.
    pub timestamp: DateTime<Utc>,
}

impl DetectionResult {
    /// Create a result with the timestamp set to now.
    pub fn new(
        modality: Modality,
        confidence: f64,
        is_synthetic: bool,
        evidence: Vec<EvidenceItem>,
        model_version: impl Into<String>,
    ) -> Self {
        Self {
            modality,
            confidence: Confidence::new(confidence),
            is_synthetic,
            evidence,
            model_version: model_version.into(),
            timestamp: Utc::now(),
        }
    }

    /// The description of the strongest evidence item, if any.
    pub fn leading_evidence(&self) -> Option<&str> {
        self.evidence
            .iter()
            .max_by(|a, b| a.confidence.partial_cmp(&b.confidence).unwrap_or(std::cmp::Ordering::Equal))
            .map(|item| item.description.as_str())
    }
}
