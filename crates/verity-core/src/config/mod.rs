//! Configuration for the verification core.
//!
//! Every subsystem has its own config struct with serde defaults; the
//! aggregate `VerityConfig` can be loaded from TOML.

mod consensus_config;
mod fusion_config;
mod swarm_config;

pub use consensus_config::ConsensusConfig;
pub use fusion_config::FusionConfig;
pub use swarm_config::SwarmConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{VerityError, VerityResult};

/// Aggregate configuration for all Verity subsystems.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerityConfig {
    pub swarm: SwarmConfig,
    pub fusion: FusionConfig,
    pub consensus: ConsensusConfig,
}

impl VerityConfig {
    /// Parse a config from a TOML string, falling back to defaults for
    /// any omitted section or field.
    pub fn from_toml_str(s: &str) -> VerityResult<Self> {
        toml::from_str(s).map_err(|e| VerityError::Config(e.to_string()))
    }
}
