//! Fusion output — the terminal artifact of a content item's detection phase.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::detection::DetectionResult;

/// How per-modality results are combined into one verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FusionMethod {
    /// Signed sum weighted by per-modality weights.
    WeightedAverage,
    /// Boolean majority with plain-average confidence.
    Voting,
    /// Weighted average adjusted by pairwise cross-modal agreement.
    DeepFusion,
}

impl fmt::Display for FusionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FusionMethod::WeightedAverage => "weighted_average",
            FusionMethod::Voting => "voting",
            FusionMethod::DeepFusion => "deep_fusion",
        };
        write!(f, "{s}")
    }
}

/// Combined verdict over all modalities for one content item.
///
/// Produced exactly once per verification run and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionResult {
    /// Final fused confidence in the verdict.
    pub final_confidence: Confidence,
    /// The fused verdict.
    pub is_synthetic: bool,
    /// The per-modality results that were fused, shared not copied.
    pub modality_results: Vec<Arc<DetectionResult>>,
    /// Which combination method produced this result.
    pub fusion_method: FusionMethod,
    /// Deterministic human-readable audit trail: each modality's verdict,
    /// confidence, and representative evidence.
    pub explanation: String,
    /// Risk score in [0.0, 10.0]; 0 for authentic content.
    pub risk_score: f64,
}
