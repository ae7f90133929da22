use std::fmt;

use serde::{Deserialize, Serialize};

/// Confidence score clamped to [0.0, 1.0].
/// Represents how strongly a detector or engine believes its verdict.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// High confidence threshold — verdicts above this are considered reliable.
    pub const HIGH: f64 = 0.8;
    /// The default decision threshold used by fusion.
    pub const DECISION: f64 = 0.5;

    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Check if confidence is above the high threshold.
    pub fn is_high(self) -> bool {
        self.0 >= Self::HIGH
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn is_high_uses_the_high_threshold() {
        assert!(Confidence::new(Confidence::HIGH).is_high());
        assert!(Confidence::new(0.95).is_high());
        assert!(!Confidence::new(0.79).is_high());
    }

    proptest! {
        /// Construction clamps any finite input into [0, 1].
        #[test]
        fn new_clamps_to_unit_range(value in -1.0e6f64..1.0e6) {
            let c = Confidence::new(value);
            prop_assert!((0.0..=1.0).contains(&c.value()));
        }
    }
}
