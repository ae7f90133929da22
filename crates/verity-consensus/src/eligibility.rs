//! Eligibility gate applied before a vote is solicited.

use tracing::debug;

use verity_core::config::ConsensusConfig;
use verity_core::models::{Modality, Validator};

/// Whether `validator` may be asked to vote on content of `modality`.
///
/// Requires: active, reputation above the configured floor, accuracy above
/// the configured floor, and — for visual/audio/text content — the
/// matching specialization. Metadata and fusion content need no
/// specialization.
pub fn is_eligible(validator: &Validator, modality: Modality, config: &ConsensusConfig) -> bool {
    if !validator.is_active {
        debug!(validator_id = %validator.id, "ineligible: inactive");
        return false;
    }
    if validator.reputation < config.eligibility_min_reputation {
        debug!(
            validator_id = %validator.id,
            reputation = validator.reputation,
            "ineligible: reputation below floor"
        );
        return false;
    }
    if validator.accuracy_rate < config.eligibility_min_accuracy {
        debug!(
            validator_id = %validator.id,
            accuracy = validator.accuracy_rate,
            "ineligible: accuracy below floor"
        );
        return false;
    }

    match modality {
        Modality::Visual | Modality::Audio | Modality::Text => {
            validator.specializations.contains(&modality)
        }
        Modality::Metadata | Modality::Fusion => true,
    }
}
