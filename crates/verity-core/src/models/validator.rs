//! Validators and their votes.
//!
//! The validator registry itself is externally maintained; the consensus
//! engine only reads it, except for the post-hoc reputation update once
//! ground truth is known.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::modality::Modality;

/// An independent validator participating in consensus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Validator {
    pub id: String,
    /// Long-run trust, in [0.0, 100.0].
    pub reputation: f64,
    /// Economic stake, >= 0. Log-dampened in the weight formula so large
    /// stakes cannot dominate.
    pub stake: f64,
    /// Recent correctness, in [0.0, 1.0].
    pub accuracy_rate: f64,
    /// Number of validations this validator has performed.
    pub total_validations: u64,
    /// Modalities this validator is qualified to judge.
    pub specializations: HashSet<Modality>,
    pub is_active: bool,
}

/// A validator's judgment on one content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteChoice {
    Authentic,
    Synthetic,
    Uncertain,
}

/// One cast vote. Immutable once cast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationVote {
    pub validator_id: String,
    pub content_id: String,
    pub vote: VoteChoice,
    pub confidence: Confidence,
    pub reasoning: String,
    pub timestamp: DateTime<Utc>,
}

impl ValidationVote {
    /// Create a vote with the timestamp set to now.
    pub fn new(
        validator_id: impl Into<String>,
        content_id: impl Into<String>,
        vote: VoteChoice,
        confidence: f64,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            validator_id: validator_id.into(),
            content_id: content_id.into(),
            vote,
            confidence: Confidence::new(confidence),
            reasoning: reasoning.into(),
            timestamp: Utc::now(),
        }
    }
}
