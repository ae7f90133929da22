//! ConsensusEngine — aggregate independent validator votes into a verdict
//! with a reached/disputed flag.

use std::collections::HashMap;

use tracing::{debug, info, instrument};

use verity_core::config::ConsensusConfig;
use verity_core::errors::ConsensusError;
use verity_core::models::{
    Confidence, ConsensusResult, ConsensusVerdict, ValidationVote, Validator, VoteChoice,
};

use crate::weight::validator_weight;

/// Builds weighted consensus from validator votes.
pub struct ConsensusEngine {
    config: ConsensusConfig,
}

impl ConsensusEngine {
    /// Create an engine with the given config.
    pub fn new(config: ConsensusConfig) -> Self {
        Self { config }
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &ConsensusConfig {
        &self.config
    }

    /// Build consensus over `votes`, weighting by the validators in
    /// `registry`.
    ///
    /// Fewer than `min_votes` supplied votes is a hard precondition error.
    /// Votes from unknown or inactive validators are silently excluded
    /// from both counting and weighting.
    #[instrument(skip(self, votes, registry), fields(supplied = votes.len()))]
    pub fn build_consensus(
        &self,
        votes: &[ValidationVote],
        registry: &HashMap<String, Validator>,
    ) -> Result<ConsensusResult, ConsensusError> {
        if votes.len() < self.config.min_votes {
            return Err(ConsensusError::InsufficientVotes {
                supplied: votes.len(),
                required: self.config.min_votes,
            });
        }

        let counted: Vec<(&ValidationVote, &Validator)> = votes
            .iter()
            .filter_map(|vote| {
                registry
                    .get(&vote.validator_id)
                    .filter(|v| v.is_active)
                    .map(|v| (vote, v))
            })
            .collect();

        debug!(counted = counted.len(), "votes after registry filtering");

        // Every supplied vote came from an unknown or inactive validator.
        // Nothing to gate on: the outcome is disputed by construction.
        if counted.is_empty() {
            return Ok(ConsensusResult {
                verdict: ConsensusVerdict::Disputed,
                consensus_reached: false,
                confidence: Confidence::new(0.0),
                weighted_score: 0.5,
                votes_counted: 0,
            });
        }

        let total = counted.len() as f64;
        let synthetic_count = counted
            .iter()
            .filter(|(v, _)| v.vote == VoteChoice::Synthetic)
            .count();
        let authentic_count = counted
            .iter()
            .filter(|(v, _)| v.vote == VoteChoice::Authentic)
            .count();
        let uncertain_count = counted.len() - synthetic_count - authentic_count;

        // Trust-weighted synthetic score. Synthetic votes pull toward 1,
        // authentic votes toward 0, uncertain votes sit at indifference.
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        for (vote, validator) in &counted {
            let weight = validator_weight(validator, &self.config);
            let contribution = match vote.vote {
                VoteChoice::Synthetic => vote.confidence.value(),
                VoteChoice::Authentic => 1.0 - vote.confidence.value(),
                VoteChoice::Uncertain => 0.5,
            };
            weighted_sum += weight * contribution;
            total_weight += weight;
        }
        let weighted_score = if total_weight > 0.0 {
            weighted_sum / total_weight
        } else {
            0.5
        };

        // Verdict gate on raw vote-count fractions — deliberately not on
        // the weighted score.
        let synthetic_fraction = synthetic_count as f64 / total;
        let authentic_fraction = authentic_count as f64 / total;
        let (verdict, consensus_reached) = if synthetic_fraction >= self.config.consensus_threshold
        {
            (ConsensusVerdict::Synthetic, true)
        } else if authentic_fraction >= self.config.consensus_threshold {
            (ConsensusVerdict::Authentic, true)
        } else {
            (ConsensusVerdict::Disputed, false)
        };

        let majority_ratio =
            synthetic_count.max(authentic_count).max(uncertain_count) as f64 / total;
        let score_factor = (weighted_score - 0.5).abs() * 2.0;
        let agreement_factor = if consensus_reached { 1.0 } else { 0.5 };
        let confidence = 0.5 * majority_ratio + 0.3 * score_factor + 0.2 * agreement_factor;

        info!(
            ?verdict,
            consensus_reached,
            weighted_score = format!("{weighted_score:.3}"),
            votes_counted = counted.len(),
            "consensus built"
        );

        Ok(ConsensusResult {
            verdict,
            consensus_reached,
            confidence: Confidence::new(confidence),
            weighted_score,
            votes_counted: counted.len(),
        })
    }
}

impl Default for ConsensusEngine {
    fn default() -> Self {
        Self::new(ConsensusConfig::default())
    }
}
