//! Validator weight — blend of long-run trust, recent correctness, and
//! economic skin-in-the-game.
//!
//! Formula: `0.4·(reputation/100) + 0.4·accuracy + 0.2·(log10(stake+1)/10)`
//!
//! The stake term is log-dampened so large stakes don't dominate: a stake
//! of 10^10 contributes the full 0.2, a stake of 1000 only 0.06.

use verity_core::config::ConsensusConfig;
use verity_core::models::Validator;

/// Compute a validator's vote weight under the given config.
///
/// # Examples
///
/// ```
/// use verity_consensus::weight::validator_weight;
/// use verity_core::config::ConsensusConfig;
/// use verity_core::models::Validator;
/// use std::collections::HashSet;
///
/// let validator = Validator {
///     id: "v1".to_string(),
///     reputation: 80.0,
///     stake: 999.0,
///     accuracy_rate: 0.9,
///     total_validations: 10,
///     specializations: HashSet::new(),
///     is_active: true,
/// };
/// let w = validator_weight(&validator, &ConsensusConfig::default());
/// // 0.4·0.8 + 0.4·0.9 + 0.2·(log10(1000)/10) = 0.32 + 0.36 + 0.06
/// assert!((w - 0.74).abs() < 1e-9);
/// ```
pub fn validator_weight(validator: &Validator, config: &ConsensusConfig) -> f64 {
    let reputation_term = validator.reputation / 100.0;
    let stake_term = (validator.stake + 1.0).log10() / 10.0;

    config.reputation_weight * reputation_term
        + config.accuracy_weight * validator.accuracy_rate
        + config.stake_weight * stake_term
}
