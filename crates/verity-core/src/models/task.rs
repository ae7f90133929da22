//! Scheduled units of analysis work and their state machine.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::agent::{AgentId, AgentType};
use super::detection::DetectionResult;
use super::fusion::FusionResult;

/// Identifier of a swarm task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub String);

impl TaskId {
    /// Generate a fresh task id.
    pub fn generate() -> Self {
        Self(format!("task-{}", Uuid::new_v4()))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scheduling priority. Higher value wins the next assignment decision;
/// within one priority tasks are assigned in enqueue order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

impl TaskPriority {
    /// All priorities, highest first — the dispatch scan order.
    pub const DESCENDING: [TaskPriority; 4] = [
        TaskPriority::Critical,
        TaskPriority::High,
        TaskPriority::Medium,
        TaskPriority::Low,
    ];
}

/// Task lifecycle states. Transitions only move forward:
/// `Pending → Assigned → Processing → {Completed | Failed}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Assigned,
    Processing,
    Completed,
    Failed,
}

impl TaskStatus {
    /// Whether the task has reached a terminal state.
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Failed)
    }
}

/// What a completed task produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskResult {
    Detection(Arc<DetectionResult>),
    Fusion(Arc<FusionResult>),
}

impl TaskResult {
    /// The detection result, if this is a detection task's output.
    pub fn as_detection(&self) -> Option<&Arc<DetectionResult>> {
        match self {
            TaskResult::Detection(r) => Some(r),
            TaskResult::Fusion(_) => None,
        }
    }

    /// The fusion result, if this is a fusion task's output.
    pub fn as_fusion(&self) -> Option<&Arc<FusionResult>> {
        match self {
            TaskResult::Fusion(r) => Some(r),
            TaskResult::Detection(_) => None,
        }
    }
}

/// One unit of scheduled analysis work. Created on enqueue, mutated only
/// through its state machine, and retained after completion so fusion can
/// look results up by `content_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwarmTask {
    pub id: TaskId,
    /// Which agent specialization this task requires.
    pub task_type: AgentType,
    /// The content item this task analyzes.
    pub content_id: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    /// The agent currently bound to this task, if any.
    pub assigned_to: Option<AgentId>,
    /// Populated on completion for detection and fusion tasks; other task
    /// types complete without a result.
    pub result: Option<TaskResult>,
    /// Failure reason, populated exactly when `status == Failed`.
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl SwarmTask {
    /// Create a pending task.
    pub fn new(task_type: AgentType, content_id: impl Into<String>, priority: TaskPriority) -> Self {
        Self {
            id: TaskId::generate(),
            task_type,
            content_id: content_id.into(),
            priority,
            status: TaskStatus::Pending,
            assigned_to: None,
            result: None,
            error: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }
}
