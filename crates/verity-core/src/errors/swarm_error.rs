/// Scheduler errors observed by `verify_content` callers.
#[derive(Debug, thiserror::Error)]
pub enum SwarmError {
    #[error("verification timed out after {waited_ms}ms waiting for tasks to finish")]
    Timeout { waited_ms: u64 },

    #[error("fusion task for content {content_id} completed without a result")]
    MissingFusionResult { content_id: String },

    #[error("no completed detection results for content {content_id}")]
    NoDetectionResults { content_id: String },

    #[error("no analyzer registered for agent type {agent_type}")]
    AnalyzerUnavailable { agent_type: String },

    #[error("unknown task {task_id}")]
    UnknownTask { task_id: String },
}
