//! Post-hoc reputation updates once ground truth for a vote is known.
//!
//! The adjustment is asymmetric: a wrong vote is penalized twice as hard
//! as a right vote is rewarded. This keeps reputation conservative —
//! confident wrong votes are expensive.

use tracing::{debug, instrument};

use verity_core::constants::{
    REPUTATION_MAX, REPUTATION_MIN, REPUTATION_PENALTY_FACTOR, REPUTATION_REWARD_FACTOR,
};
use verity_core::models::Validator;

/// Apply the ground-truth outcome of one vote to a validator.
///
/// Reputation moves by `+confidence·5` for a correct vote and
/// `−confidence·10` for a wrong one, clamped to [0, 100]. Accuracy becomes
/// the running mean over `total_validations + 1` observations.
///
/// # Examples
///
/// ```
/// use verity_consensus::reputation::update_reputation;
/// use verity_core::models::Validator;
/// use std::collections::HashSet;
///
/// let mut v = Validator {
///     id: "v1".to_string(),
///     reputation: 80.0,
///     stake: 0.0,
///     accuracy_rate: 1.0,
///     total_validations: 0,
///     specializations: HashSet::new(),
///     is_active: true,
/// };
/// update_reputation(&mut v, true, 0.8);
/// assert!((v.reputation - 84.0).abs() < f64::EPSILON);
/// ```
#[instrument(skip(validator), fields(validator_id = %validator.id))]
pub fn update_reputation(validator: &mut Validator, vote_was_correct: bool, vote_confidence: f64) {
    let delta = if vote_was_correct {
        vote_confidence * REPUTATION_REWARD_FACTOR
    } else {
        -vote_confidence * REPUTATION_PENALTY_FACTOR
    };

    let old_reputation = validator.reputation;
    validator.reputation = (validator.reputation + delta).clamp(REPUTATION_MIN, REPUTATION_MAX);

    let observations = validator.total_validations as f64;
    let observed = if vote_was_correct { 1.0 } else { 0.0 };
    validator.accuracy_rate =
        (validator.accuracy_rate * observations + observed) / (observations + 1.0);
    validator.total_validations += 1;

    debug!(
        old_reputation,
        new_reputation = validator.reputation,
        new_accuracy = format!("{:.3}", validator.accuracy_rate),
        vote_was_correct,
        "reputation updated"
    );
}
