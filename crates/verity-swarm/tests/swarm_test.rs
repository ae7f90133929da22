//! End-to-end scheduler tests over stub analyzers.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use verity_core::config::SwarmConfig;
use verity_core::errors::{SwarmError, VerityError};
use verity_core::models::{
    AgentType, DetectionResult, EvidenceItem, Modality, TaskPriority, TaskStatus,
};
use verity_core::traits::{Blake3Hasher, ContentAnalyzer};
use verity_fusion::FusionEngine;
use verity_swarm::{AnalyzerSet, VerificationSwarm};

/// Analyzer returning a fixed verdict, optionally after a blocking delay,
/// recording each call in a shared log.
struct StubAnalyzer {
    modality: Modality,
    confidence: f64,
    is_synthetic: bool,
    version: &'static str,
    delay: Option<Duration>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StubAnalyzer {
    fn new(modality: Modality, confidence: f64, is_synthetic: bool, version: &'static str) -> Self {
        Self {
            modality,
            confidence,
            is_synthetic,
            version,
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn call_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

impl ContentAnalyzer for StubAnalyzer {
    fn analyze(&self, content_ref: &str) -> Result<DetectionResult, String> {
        self.calls.lock().unwrap().push(content_ref.to_string());
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        let evidence = vec![EvidenceItem::new(
            "gan_artifacts",
            format!("stub finding for {content_ref}"),
            self.confidence,
        )];
        Ok(DetectionResult::new(
            self.modality,
            self.confidence,
            self.is_synthetic,
            evidence,
            self.version,
        ))
    }

    fn model_version(&self) -> &str {
        self.version
    }
}

/// Analyzer that always fails.
struct BrokenAnalyzer;

impl ContentAnalyzer for BrokenAnalyzer {
    fn analyze(&self, _content_ref: &str) -> Result<DetectionResult, String> {
        Err("model backend unreachable".to_string())
    }

    fn model_version(&self) -> &str {
        "broken-v0.0"
    }
}

fn make_swarm(config: SwarmConfig, analyzers: AnalyzerSet) -> VerificationSwarm {
    VerificationSwarm::new(
        config,
        FusionEngine::default(),
        analyzers,
        Arc::new(Blake3Hasher),
    )
}

fn fast_config() -> SwarmConfig {
    SwarmConfig {
        poll_interval_ms: 5,
        ..SwarmConfig::default()
    }
}

async fn wait_until_settled(swarm: &VerificationSwarm) {
    for _ in 0..400 {
        let status = swarm.status();
        if status.active_tasks == 0 && status.queued_tasks == 0 {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("swarm did not settle");
}

#[tokio::test(flavor = "multi_thread")]
async fn video_runs_visual_audio_metadata_then_one_fusion_task() {
    let analyzers = AnalyzerSet::new()
        .with_visual(Arc::new(StubAnalyzer::new(
            Modality::Visual,
            0.9,
            true,
            "efficientnet-b7-v1.0",
        )))
        .with_audio(Arc::new(StubAnalyzer::new(
            Modality::Audio,
            0.8,
            true,
            "whisper-small-v1.0",
        )));
    let swarm = make_swarm(fast_config(), analyzers);

    let result = swarm.verify_content("content-1", "video").await.unwrap();
    assert!(result.is_synthetic);
    assert_eq!(result.modality_results.len(), 3);

    let tasks = swarm.tasks_for_content("content-1");
    assert_eq!(tasks.len(), 4);
    let count = |t: AgentType| tasks.iter().filter(|task| task.task_type == t).count();
    assert_eq!(count(AgentType::VisualSpecialist), 1);
    assert_eq!(count(AgentType::AudioSpecialist), 1);
    assert_eq!(count(AgentType::MetadataAnalyst), 1);
    assert_eq!(count(AgentType::FusionCoordinator), 1);
    assert!(tasks.iter().all(|t| t.status == TaskStatus::Completed));

    let fusion = tasks
        .iter()
        .find(|t| t.task_type == AgentType::FusionCoordinator)
        .unwrap();
    assert_eq!(fusion.priority, TaskPriority::Critical);

    // Detection results come back in stable modality order.
    let detections = swarm.detection_results("content-1");
    let modalities: Vec<Modality> = detections.iter().map(|r| r.modality).collect();
    assert_eq!(
        modalities,
        vec![Modality::Visual, Modality::Audio, Modality::Metadata]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn image_skips_audio_and_text_modalities() {
    let analyzers = AnalyzerSet::new().with_visual(Arc::new(StubAnalyzer::new(
        Modality::Visual,
        0.3,
        false,
        "efficientnet-b7-v1.0",
    )));
    let swarm = make_swarm(fast_config(), analyzers);

    let result = swarm.verify_content("img-1", "image/jpeg").await.unwrap();
    assert!(!result.is_synthetic);
    assert_eq!(result.risk_score, 0.0);

    let tasks = swarm.tasks_for_content("img-1");
    // Visual, metadata, fusion only.
    assert_eq!(tasks.len(), 3);
    assert!(tasks
        .iter()
        .all(|t| t.task_type != AgentType::AudioSpecialist
            && t.task_type != AgentType::TextSpecialist));
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_analyzer_does_not_abort_sibling_tasks() {
    let analyzers = AnalyzerSet::new().with_visual(Arc::new(BrokenAnalyzer));
    let swarm = make_swarm(fast_config(), analyzers);

    // Fusion proceeds over whatever completed; here only metadata.
    let result = swarm.verify_content("img-2", "image").await.unwrap();
    assert_eq!(result.modality_results.len(), 1);
    assert_eq!(result.modality_results[0].modality, Modality::Metadata);
    assert!(!result.is_synthetic);

    let tasks = swarm.tasks_for_content("img-2");
    let visual = tasks
        .iter()
        .find(|t| t.task_type == AgentType::VisualSpecialist)
        .unwrap();
    assert_eq!(visual.status, TaskStatus::Failed);
    assert!(visual.error.as_deref().unwrap().contains("unreachable"));
    assert!(visual.result.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn unregistered_analyzer_fails_its_task_with_a_reason() {
    let swarm = make_swarm(fast_config(), AnalyzerSet::new());

    let result = swarm.verify_content("img-3", "image").await.unwrap();
    assert_eq!(result.modality_results.len(), 1);

    let tasks = swarm.tasks_for_content("img-3");
    let visual = tasks
        .iter()
        .find(|t| t.task_type == AgentType::VisualSpecialist)
        .unwrap();
    assert_eq!(visual.status, TaskStatus::Failed);
    assert!(visual
        .error
        .as_deref()
        .unwrap()
        .contains("no analyzer registered"));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_agent_pool_for_a_needed_type_times_out() {
    let config = SwarmConfig {
        text_agents: 0,
        poll_interval_ms: 5,
        wait_ceiling_ms: 150,
        ..SwarmConfig::default()
    };
    let analyzers = AnalyzerSet::new().with_text(Arc::new(StubAnalyzer::new(
        Modality::Text,
        0.9,
        true,
        "roberta-large-v1.0",
    )));
    let swarm = make_swarm(config, analyzers);

    let err = swarm.verify_content("doc-1", "text").await.unwrap_err();
    assert!(matches!(
        err,
        VerityError::Swarm(SwarmError::Timeout { waited_ms }) if waited_ms >= 150
    ));

    // The text task is stuck pending at the head of its bucket.
    let tasks = swarm.tasks_for_content("doc-1");
    let text = tasks
        .iter()
        .find(|t| t.task_type == AgentType::TextSpecialist)
        .unwrap();
    assert_eq!(text.status, TaskStatus::Pending);
}

#[tokio::test(flavor = "multi_thread")]
async fn higher_priority_tasks_run_first_under_contention() {
    let stub = StubAnalyzer::new(Modality::Visual, 0.9, true, "efficientnet-b7-v1.0")
        .with_delay(Duration::from_millis(50));
    let log = stub.call_log();

    let config = SwarmConfig {
        visual_agents: 1,
        poll_interval_ms: 5,
        ..SwarmConfig::default()
    };
    let analyzers = AnalyzerSet::new().with_visual(Arc::new(stub));
    let swarm = make_swarm(config, analyzers);

    // First task binds the only visual agent synchronously; the rest
    // queue behind it and drain by priority, FIFO within a priority.
    swarm.create_task(AgentType::VisualSpecialist, "warmup", TaskPriority::Low);
    swarm.create_task(AgentType::VisualSpecialist, "low-a", TaskPriority::Low);
    swarm.create_task(AgentType::VisualSpecialist, "crit", TaskPriority::Critical);
    swarm.create_task(AgentType::VisualSpecialist, "high", TaskPriority::High);
    swarm.create_task(AgentType::VisualSpecialist, "low-b", TaskPriority::Low);

    wait_until_settled(&swarm).await;

    let calls = log.lock().unwrap().clone();
    assert_eq!(calls, vec!["warmup", "crit", "high", "low-a", "low-b"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn status_reflects_completed_work() {
    let analyzers = AnalyzerSet::new()
        .with_visual(Arc::new(StubAnalyzer::new(
            Modality::Visual,
            0.9,
            true,
            "efficientnet-b7-v1.0",
        )))
        .with_audio(Arc::new(StubAnalyzer::new(
            Modality::Audio,
            0.8,
            true,
            "whisper-small-v1.0",
        )));
    let swarm = make_swarm(fast_config(), analyzers);

    swarm.verify_content("content-2", "video").await.unwrap();

    let status = swarm.status();
    assert_eq!(status.total_agents, 10);
    assert_eq!(status.active_tasks, 0);
    assert_eq!(status.queued_tasks, 0);
    assert_eq!(status.completed_tasks, 4);
}

#[tokio::test(flavor = "multi_thread")]
async fn analyzer_versions_include_internal_metadata_evaluation() {
    let analyzers = AnalyzerSet::new().with_visual(Arc::new(StubAnalyzer::new(
        Modality::Visual,
        0.9,
        true,
        "efficientnet-b7-v1.0",
    )));
    let swarm = make_swarm(SwarmConfig::default(), analyzers);

    let versions = swarm.analyzer_versions();
    assert!(versions
        .iter()
        .any(|(m, v)| *m == Modality::Visual && v == "efficientnet-b7-v1.0"));
    assert!(versions
        .iter()
        .any(|(m, v)| *m == Modality::Metadata && v == "metadata-analyst-v1.0"));
}

#[tokio::test(flavor = "multi_thread")]
async fn consensus_and_evidence_tasks_complete_without_a_result() {
    let swarm = make_swarm(fast_config(), AnalyzerSet::new());

    let consensus_id =
        swarm.create_task(AgentType::ConsensusBuilder, "content-3", TaskPriority::Medium);
    let evidence_id =
        swarm.create_task(AgentType::EvidenceCollector, "content-3", TaskPriority::Medium);
    wait_until_settled(&swarm).await;

    for id in [consensus_id, evidence_id] {
        let task = swarm.task(&id).unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
        assert!(task.result.is_none());
        assert!(task.completed_at.is_some());
    }
}
