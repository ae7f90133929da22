/// Verity system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum risk score reported by fusion.
pub const MAX_RISK_SCORE: f64 = 10.0;

/// Risk amplification per additional modality agreeing on "synthetic".
pub const RISK_AMPLIFICATION_STEP: f64 = 0.2;

/// Reputation bounds for validators.
pub const REPUTATION_MIN: f64 = 0.0;
pub const REPUTATION_MAX: f64 = 100.0;

/// Reputation delta multipliers: wrong votes are penalized twice as hard
/// as right votes are rewarded.
pub const REPUTATION_REWARD_FACTOR: f64 = 5.0;
pub const REPUTATION_PENALTY_FACTOR: f64 = 10.0;
