use crate::models::DetectionResult;

/// An opaque external detection model for one modality.
///
/// Analyzer calls are I/O/compute-bound; the scheduler invokes them via
/// `spawn_blocking` and never under its bookkeeping lock. A failure is a
/// reason string — the scheduler records it on the failing task without
/// aborting sibling tasks.
pub trait ContentAnalyzer: Send + Sync {
    /// Analyze the content behind `content_ref` and return a verdict.
    fn analyze(&self, content_ref: &str) -> Result<DetectionResult, String>;

    /// Version string of the underlying model, e.g. `"efficientnet-b7-v1.0"`.
    fn model_version(&self) -> &str;
}
