//! Configuration for the verification swarm scheduler.
//!
//! # Examples
//!
//! ```
//! use verity_core::config::SwarmConfig;
//!
//! let config = SwarmConfig::default();
//! assert_eq!(config.visual_agents, 2);
//! assert_eq!(config.wait_ceiling_ms, 60_000);
//! ```

use serde::{Deserialize, Serialize};

/// Agent pool sizes and wait bounds for the scheduler.
///
/// Pool counts are deployment parameters; the pool itself is fixed for
/// the scheduler's lifetime once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    /// Number of visual-specialist agents. Default: 2.
    pub visual_agents: usize,
    /// Number of audio-specialist agents. Default: 2.
    pub audio_agents: usize,
    /// Number of text-specialist agents. Default: 2.
    pub text_agents: usize,
    /// Number of metadata-analyst agents. Default: 1.
    pub metadata_agents: usize,
    /// Number of fusion-coordinator agents. Default: 1.
    pub fusion_agents: usize,
    /// Number of consensus-builder agents. Default: 1.
    pub consensus_agents: usize,
    /// Number of evidence-collector agents. Default: 1.
    pub evidence_agents: usize,
    /// Poll interval while waiting for tasks to finish, in ms. Default: 100.
    pub poll_interval_ms: u64,
    /// Hard ceiling on any bounded wait, in ms. Default: 60_000.
    pub wait_ceiling_ms: u64,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            visual_agents: 2,
            audio_agents: 2,
            text_agents: 2,
            metadata_agents: 1,
            fusion_agents: 1,
            consensus_agents: 1,
            evidence_agents: 1,
            poll_interval_ms: 100,
            wait_ceiling_ms: 60_000,
        }
    }
}
