//! The scheduler's shared mutable aggregate.
//!
//! Agent roster, task table, and pending queue live together under one
//! lock. Completed artifacts (`DetectionResult`/`FusionResult`) are
//! immutable and `Arc`-shared, so readers never need the lock to inspect
//! them once extracted.

use std::collections::HashMap;

use verity_core::config::SwarmConfig;
use verity_core::models::{Agent, AgentId, AgentStatus, AgentType, SwarmTask, TaskId, TaskStatus};

use crate::queue::TaskQueue;

/// Everything the scheduler mutates, guarded by one coarse mutex.
pub struct SwarmState {
    /// Fixed roster, created once, never destroyed.
    pub agents: Vec<Agent>,
    /// All tasks ever created, retained for lookup by content id.
    pub tasks: HashMap<TaskId, SwarmTask>,
    /// Pending tasks awaiting assignment.
    pub queue: TaskQueue,
}

impl SwarmState {
    /// Build the fixed agent pool from the configured counts.
    pub fn new(config: &SwarmConfig) -> Self {
        let roster = [
            (AgentType::VisualSpecialist, config.visual_agents),
            (AgentType::AudioSpecialist, config.audio_agents),
            (AgentType::TextSpecialist, config.text_agents),
            (AgentType::MetadataAnalyst, config.metadata_agents),
            (AgentType::FusionCoordinator, config.fusion_agents),
            (AgentType::ConsensusBuilder, config.consensus_agents),
            (AgentType::EvidenceCollector, config.evidence_agents),
        ];

        let mut agents = Vec::new();
        for (agent_type, count) in roster {
            for _ in 0..count {
                agents.push(Agent::new(agent_type));
            }
        }

        Self {
            agents,
            tasks: HashMap::new(),
            queue: TaskQueue::new(),
        }
    }

    /// Find an idle agent of the given type.
    pub fn idle_agent_of_type(&self, agent_type: AgentType) -> Option<AgentId> {
        self.agents
            .iter()
            .find(|a| a.status == AgentStatus::Idle && a.agent_type == agent_type)
            .map(|a| a.id.clone())
    }

    /// Mutable access to an agent by id.
    pub fn agent_mut(&mut self, id: &AgentId) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|a| &a.id == id)
    }

    /// Whether every task in `ids` has reached a terminal state.
    pub fn all_terminal(&self, ids: &[TaskId]) -> bool {
        ids.iter().all(|id| {
            self.tasks
                .get(id)
                .map(|t| t.status.is_terminal())
                .unwrap_or(false)
        })
    }

    /// Count of tasks currently assigned or processing.
    pub fn active_task_count(&self) -> usize {
        self.tasks
            .values()
            .filter(|t| matches!(t.status, TaskStatus::Assigned | TaskStatus::Processing))
            .count()
    }

    /// Count of completed tasks.
    pub fn completed_task_count(&self) -> usize {
        self.tasks
            .values()
            .filter(|t| t.status == TaskStatus::Completed)
            .count()
    }
}
