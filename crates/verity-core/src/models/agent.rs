//! Worker slots in the verification swarm's fixed pool.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of an agent in the swarm pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub String);

impl AgentId {
    /// Generate a fresh agent id with a type-tag prefix.
    pub fn generate(agent_type: AgentType) -> Self {
        Self(format!("{}-{}", agent_type, Uuid::new_v4()))
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The specialization of an agent. Tasks are only assigned to agents of
/// the matching type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentType {
    VisualSpecialist,
    AudioSpecialist,
    TextSpecialist,
    MetadataAnalyst,
    FusionCoordinator,
    ConsensusBuilder,
    EvidenceCollector,
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AgentType::VisualSpecialist => "visual_specialist",
            AgentType::AudioSpecialist => "audio_specialist",
            AgentType::TextSpecialist => "text_specialist",
            AgentType::MetadataAnalyst => "metadata_analyst",
            AgentType::FusionCoordinator => "fusion_coordinator",
            AgentType::ConsensusBuilder => "consensus_builder",
            AgentType::EvidenceCollector => "evidence_collector",
        };
        write!(f, "{s}")
    }
}

/// Availability of an agent slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    Idle,
    Busy,
    Offline,
}

/// A worker slot. Created once at scheduler start and never destroyed;
/// only the scheduler mutates `status` and `tasks_completed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub agent_type: AgentType,
    pub status: AgentStatus,
    /// Number of tasks this slot has completed successfully.
    pub tasks_completed: u64,
    /// Running accuracy estimate for this slot (externally assessed).
    pub accuracy: f64,
}

impl Agent {
    /// Create an idle agent of the given type.
    pub fn new(agent_type: AgentType) -> Self {
        Self {
            id: AgentId::generate(agent_type),
            agent_type,
            status: AgentStatus::Idle,
            tasks_completed: 0,
            accuracy: 1.0,
        }
    }
}
