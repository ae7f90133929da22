//! VerificationSwarm — owns the agent pool and task queue, drives
//! detection tasks to completion, and fuses their results.
//!
//! All assignment flows through `dispatch`, which runs under the state
//! mutex: an agent is flipped to busy in the same critical section that
//! picks it, so the enqueue path and the agent-release path can never
//! double-assign one agent. The lock is never held across an analyzer
//! call or an `.await`.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use verity_core::config::SwarmConfig;
use verity_core::errors::{SwarmError, VerityResult};
use verity_core::models::{
    AgentId, AgentStatus, AgentType, DetectionResult, FusionMethod, FusionResult, Modality,
    SwarmTask, TaskId, TaskPriority, TaskResult, TaskStatus,
};
use verity_core::traits::ContentHasher;
use verity_fusion::FusionEngine;

use crate::analyzers::AnalyzerSet;
use crate::metadata;
use crate::state::SwarmState;

/// Read-only snapshot of scheduler load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwarmStatus {
    pub total_agents: usize,
    /// Tasks currently assigned or processing.
    pub active_tasks: usize,
    pub completed_tasks: usize,
    /// Tasks still waiting in the queue.
    pub queued_tasks: usize,
}

struct SwarmInner {
    state: Mutex<SwarmState>,
    analyzers: AnalyzerSet,
    fusion: FusionEngine,
    hasher: Arc<dyn ContentHasher>,
    config: SwarmConfig,
}

/// The verification swarm scheduler. Cheap to clone; all clones share
/// one agent pool and task table.
#[derive(Clone)]
pub struct VerificationSwarm {
    inner: Arc<SwarmInner>,
}

impl VerificationSwarm {
    /// Create a swarm with a fixed agent pool per `config`.
    pub fn new(
        config: SwarmConfig,
        fusion: FusionEngine,
        analyzers: AnalyzerSet,
        hasher: Arc<dyn ContentHasher>,
    ) -> Self {
        let state = SwarmState::new(&config);
        info!(agents = state.agents.len(), "verification swarm initialized");
        Self {
            inner: Arc::new(SwarmInner {
                state: Mutex::new(state),
                analyzers,
                fusion,
                hasher,
                config,
            }),
        }
    }

    /// Enqueue a task and trigger an assignment pass.
    pub fn create_task(
        &self,
        task_type: AgentType,
        content_id: &str,
        priority: TaskPriority,
    ) -> TaskId {
        let task = SwarmTask::new(task_type, content_id, priority);
        let id = task.id.clone();

        {
            let mut state = self.lock_state();
            state.queue.push(id.clone(), priority);
            state.tasks.insert(id.clone(), task);
        }
        debug!(task_id = %id, %task_type, ?priority, content_id, "task created");

        self.dispatch();
        id
    }

    /// Verify one content item end to end.
    ///
    /// Enqueues one high-priority detection task per modality applicable
    /// to `content_type` (`video` implies both visual and audio) plus a
    /// medium-priority metadata task, waits for all of them, then runs a
    /// critical-priority fusion task and returns its result. Exceeding
    /// the wait ceiling fails the whole call — there are no partial
    /// results.
    #[instrument(skip(self))]
    pub async fn verify_content(
        &self,
        content_id: &str,
        content_type: &str,
    ) -> VerityResult<Arc<FusionResult>> {
        let content_type = content_type.to_ascii_lowercase();
        let mut detection_ids = Vec::new();

        if content_type.contains("image") || content_type.contains("video") {
            detection_ids.push(self.create_task(
                AgentType::VisualSpecialist,
                content_id,
                TaskPriority::High,
            ));
        }
        if content_type.contains("video") || content_type.contains("audio") {
            detection_ids.push(self.create_task(
                AgentType::AudioSpecialist,
                content_id,
                TaskPriority::High,
            ));
        }
        if content_type.contains("text") {
            detection_ids.push(self.create_task(
                AgentType::TextSpecialist,
                content_id,
                TaskPriority::High,
            ));
        }
        detection_ids.push(self.create_task(
            AgentType::MetadataAnalyst,
            content_id,
            TaskPriority::Medium,
        ));

        info!(
            content_id,
            detection_tasks = detection_ids.len(),
            "detection tasks enqueued"
        );
        self.wait_for_tasks(&detection_ids).await?;

        let fusion_id =
            self.create_task(AgentType::FusionCoordinator, content_id, TaskPriority::Critical);
        self.wait_for_tasks(std::slice::from_ref(&fusion_id)).await?;

        let state = self.lock_state();
        let task = state
            .tasks
            .get(&fusion_id)
            .ok_or_else(|| SwarmError::UnknownTask {
                task_id: fusion_id.to_string(),
            })?;
        match task.status {
            TaskStatus::Completed => task
                .result
                .as_ref()
                .and_then(TaskResult::as_fusion)
                .cloned()
                .ok_or_else(|| {
                    SwarmError::MissingFusionResult {
                        content_id: content_id.to_string(),
                    }
                    .into()
                }),
            // The fusion handler only fails when it finds zero completed
            // detection results for the content id.
            _ => Err(SwarmError::NoDetectionResults {
                content_id: content_id.to_string(),
            }
            .into()),
        }
    }

    /// Read-only load snapshot. No side effects.
    pub fn status(&self) -> SwarmStatus {
        let state = self.lock_state();
        SwarmStatus {
            total_agents: state.agents.len(),
            active_tasks: state.active_task_count(),
            completed_tasks: state.completed_task_count(),
            queued_tasks: state.queue.len(),
        }
    }

    /// Model versions of the registered analyzers plus the internal
    /// metadata evaluation.
    pub fn analyzer_versions(&self) -> Vec<(Modality, String)> {
        let mut versions = self.inner.analyzers.model_versions();
        versions.push((
            Modality::Metadata,
            metadata::METADATA_MODEL_VERSION.to_string(),
        ));
        versions
    }

    /// Look up a task snapshot by id.
    pub fn task(&self, id: &TaskId) -> Option<SwarmTask> {
        self.lock_state().tasks.get(id).cloned()
    }

    /// Snapshots of all tasks for one content item, oldest first.
    pub fn tasks_for_content(&self, content_id: &str) -> Vec<SwarmTask> {
        let state = self.lock_state();
        let mut tasks: Vec<SwarmTask> = state
            .tasks
            .values()
            .filter(|t| t.content_id == content_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|t| t.created_at);
        tasks
    }

    /// Completed detection results for one content item, in modality
    /// order. Useful for composing evidence collection on top of a
    /// finished verification run.
    pub fn detection_results(&self, content_id: &str) -> Vec<Arc<DetectionResult>> {
        let state = self.lock_state();
        let mut results: Vec<Arc<DetectionResult>> = state
            .tasks
            .values()
            .filter(|t| t.content_id == content_id && t.status == TaskStatus::Completed)
            .filter_map(|t| t.result.as_ref().and_then(TaskResult::as_detection).cloned())
            .collect();
        results.sort_by_key(|r| r.modality);
        results
    }

    /// Poll until every task in `ids` is terminal, bounded by the
    /// configured ceiling.
    async fn wait_for_tasks(&self, ids: &[TaskId]) -> Result<(), SwarmError> {
        let poll = Duration::from_millis(self.inner.config.poll_interval_ms.max(1));
        let ceiling = Duration::from_millis(self.inner.config.wait_ceiling_ms);
        let start = Instant::now();

        loop {
            if self.lock_state().all_terminal(ids) {
                return Ok(());
            }
            if start.elapsed() >= ceiling {
                warn!(tasks = ids.len(), "wait ceiling exceeded");
                return Err(SwarmError::Timeout {
                    waited_ms: start.elapsed().as_millis() as u64,
                });
            }
            tokio::time::sleep(poll).await;
        }
    }

    /// Single serialized assignment pass.
    ///
    /// Repeatedly binds the queue head to an idle agent of the matching
    /// type. If the head has no idle match it stays put and the pass
    /// ends — the queue never skips ahead, so a missing agent type can
    /// starve its tasks (the accepted trade-off of the fixed pool).
    fn dispatch(&self) {
        let mut assignments = Vec::new();
        {
            let mut state = self.lock_state();
            loop {
                let Some(front) = state.queue.front().cloned() else {
                    break;
                };
                let task_type = match state.tasks.get(&front).map(|t| t.task_type) {
                    Some(task_type) => task_type,
                    None => {
                        // Task table and queue are updated together; a
                        // dangling id would be a bug. Drop it and move on.
                        state.queue.pop_front();
                        continue;
                    }
                };
                let Some(agent_id) = state.idle_agent_of_type(task_type) else {
                    break;
                };

                let task_id = state.queue.pop_front().unwrap_or(front);
                if let Some(agent) = state.agent_mut(&agent_id) {
                    agent.status = AgentStatus::Busy;
                }
                if let Some(task) = state.tasks.get_mut(&task_id) {
                    task.status = TaskStatus::Assigned;
                    task.assigned_to = Some(agent_id.clone());
                }
                debug!(task_id = %task_id, agent_id = %agent_id, "task assigned");
                assignments.push(task_id);
            }
        }

        for task_id in assignments {
            let swarm = self.clone();
            tokio::spawn(async move {
                swarm.execute(task_id).await;
            });
        }
    }

    /// Run one assigned task to a terminal state and release its agent.
    async fn execute(self, task_id: TaskId) {
        let (agent_type, content_id) = {
            let mut state = self.lock_state();
            let Some(task) = state.tasks.get_mut(&task_id) else {
                return;
            };
            task.status = TaskStatus::Processing;
            (task.task_type, task.content_id.clone())
        };

        let outcome = match agent_type {
            AgentType::VisualSpecialist | AgentType::AudioSpecialist | AgentType::TextSpecialist => {
                self.run_analyzer(agent_type, &content_id)
                    .await
                    .map(|r| Some(TaskResult::Detection(Arc::new(r))))
            }
            AgentType::MetadataAnalyst => {
                let result = metadata::evaluate(&content_id, self.inner.hasher.as_ref());
                Ok(Some(TaskResult::Detection(Arc::new(result))))
            }
            AgentType::FusionCoordinator => self
                .run_fusion(&content_id)
                .map(|r| Some(TaskResult::Fusion(Arc::new(r)))),
            // Placeholders: the caller composes consensus building and
            // evidence collection with the dedicated engines.
            AgentType::ConsensusBuilder | AgentType::EvidenceCollector => Ok(None),
        };

        let mut state = self.lock_state();
        let agent_id: Option<AgentId> = match state.tasks.get_mut(&task_id) {
            Some(task) => {
                task.completed_at = Some(Utc::now());
                match outcome {
                    Ok(result) => {
                        task.status = TaskStatus::Completed;
                        task.result = result;
                    }
                    Err(reason) => {
                        warn!(task_id = %task_id, reason, "task failed");
                        task.status = TaskStatus::Failed;
                        task.error = Some(reason);
                    }
                }
                task.assigned_to.clone()
            }
            None => None,
        };
        let completed = state
            .tasks
            .get(&task_id)
            .map(|t| t.status == TaskStatus::Completed)
            .unwrap_or(false);
        if let Some(agent_id) = agent_id {
            if let Some(agent) = state.agent_mut(&agent_id) {
                agent.status = AgentStatus::Idle;
                if completed {
                    agent.tasks_completed += 1;
                }
            }
        }
        drop(state);

        // Capacity freed up: queued work may now be assignable.
        self.dispatch();
    }

    /// Call the external analyzer for a specialist task on the blocking
    /// pool, outside the state lock.
    async fn run_analyzer(
        &self,
        agent_type: AgentType,
        content_id: &str,
    ) -> Result<DetectionResult, String> {
        let Some(analyzer) = self.inner.analyzers.for_agent_type(agent_type) else {
            return Err(SwarmError::AnalyzerUnavailable {
                agent_type: agent_type.to_string(),
            }
            .to_string());
        };

        let content_ref = content_id.to_string();
        match tokio::task::spawn_blocking(move || analyzer.analyze(&content_ref)).await {
            Ok(result) => result,
            Err(join_error) => Err(format!("analyzer task aborted: {join_error}")),
        }
    }

    /// Collect all completed detection results for `content_id` and fuse
    /// them with the deep-fusion method.
    fn run_fusion(&self, content_id: &str) -> Result<FusionResult, String> {
        let mut results: Vec<Arc<DetectionResult>> = {
            let state = self.lock_state();
            state
                .tasks
                .values()
                .filter(|t| t.content_id == content_id && t.status == TaskStatus::Completed)
                .filter_map(|t| t.result.as_ref().and_then(TaskResult::as_detection).cloned())
                .collect()
        };
        // Stable modality order keeps the explanation deterministic
        // regardless of task-table iteration order.
        results.sort_by_key(|r| r.modality);

        if results.is_empty() {
            return Err(SwarmError::NoDetectionResults {
                content_id: content_id.to_string(),
            }
            .to_string());
        }

        self.inner
            .fusion
            .fuse(&results, FusionMethod::DeepFusion)
            .map_err(|e| e.to_string())
    }

    fn lock_state(&self) -> MutexGuard<'_, SwarmState> {
        self.inner.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
