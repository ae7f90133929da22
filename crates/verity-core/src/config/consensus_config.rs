//! Configuration for the consensus engine.

use serde::{Deserialize, Serialize};

/// Thresholds and weight blend for validator consensus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusConfig {
    /// Minimum number of votes required before consensus is attempted.
    /// Default: 3. A hard precondition, not a soft warning.
    pub min_votes: usize,
    /// Vote-count fraction either side must reach for consensus. Default: 0.67.
    pub consensus_threshold: f64,
    /// Minimum reputation for vote eligibility. Default: 50.0.
    pub eligibility_min_reputation: f64,
    /// Minimum accuracy rate for vote eligibility. Default: 0.7.
    pub eligibility_min_accuracy: f64,
    /// Weight of reputation in the validator weight blend. Default: 0.4.
    pub reputation_weight: f64,
    /// Weight of accuracy in the validator weight blend. Default: 0.4.
    pub accuracy_weight: f64,
    /// Weight of log-dampened stake in the validator weight blend. Default: 0.2.
    pub stake_weight: f64,
}

impl Default for ConsensusConfig {
    fn default() -> Self {
        Self {
            min_votes: 3,
            consensus_threshold: 0.67,
            eligibility_min_reputation: 50.0,
            eligibility_min_accuracy: 0.7,
            reputation_weight: 0.4,
            accuracy_weight: 0.4,
            stake_weight: 0.2,
        }
    }
}
