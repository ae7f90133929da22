//! Consensus output over a set of validator votes.

use serde::{Deserialize, Serialize};

use super::confidence::Confidence;

/// The consensus verdict over all counted votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsensusVerdict {
    Authentic,
    Synthetic,
    /// Neither side reached the consensus threshold.
    Disputed,
}

/// Result of weighted consensus building.
///
/// The verdict gate uses raw vote-count fractions; `weighted_score` blends
/// reputation/accuracy/stake and feeds only the confidence. The two numbers
/// are deliberately distinct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsensusResult {
    pub verdict: ConsensusVerdict,
    /// True when either side's vote fraction met the consensus threshold.
    pub consensus_reached: bool,
    /// Blended confidence in the verdict.
    pub confidence: Confidence,
    /// Trust-weighted synthetic score in [0.0, 1.0];
    /// 1.0 = unanimous-weighted "synthetic".
    pub weighted_score: f64,
    /// Number of votes that were actually counted after registry filtering.
    pub votes_counted: usize,
}
