//! The set of external analyzers the swarm's specialist agents call into.

use std::sync::Arc;

use verity_core::models::{AgentType, Modality};
use verity_core::traits::ContentAnalyzer;

/// Per-modality analyzers, registered at swarm construction.
///
/// A missing analyzer is allowed — tasks of that type then fail with an
/// "analyzer unavailable" reason rather than erroring at startup, since
/// deployment may intentionally run a subset of modalities.
#[derive(Default, Clone)]
pub struct AnalyzerSet {
    visual: Option<Arc<dyn ContentAnalyzer>>,
    audio: Option<Arc<dyn ContentAnalyzer>>,
    text: Option<Arc<dyn ContentAnalyzer>>,
}

impl AnalyzerSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the visual analyzer.
    pub fn with_visual(mut self, analyzer: Arc<dyn ContentAnalyzer>) -> Self {
        self.visual = Some(analyzer);
        self
    }

    /// Register the audio analyzer.
    pub fn with_audio(mut self, analyzer: Arc<dyn ContentAnalyzer>) -> Self {
        self.audio = Some(analyzer);
        self
    }

    /// Register the text analyzer.
    pub fn with_text(mut self, analyzer: Arc<dyn ContentAnalyzer>) -> Self {
        self.text = Some(analyzer);
        self
    }

    /// The analyzer a specialist agent of `agent_type` calls, if any.
    pub fn for_agent_type(&self, agent_type: AgentType) -> Option<Arc<dyn ContentAnalyzer>> {
        match agent_type {
            AgentType::VisualSpecialist => self.visual.clone(),
            AgentType::AudioSpecialist => self.audio.clone(),
            AgentType::TextSpecialist => self.text.clone(),
            _ => None,
        }
    }

    /// Model versions of all registered analyzers, for status reporting.
    pub fn model_versions(&self) -> Vec<(Modality, String)> {
        let mut versions = Vec::new();
        if let Some(a) = &self.visual {
            versions.push((Modality::Visual, a.model_version().to_string()));
        }
        if let Some(a) = &self.audio {
            versions.push((Modality::Audio, a.model_version().to_string()));
        }
        if let Some(a) = &self.text {
            versions.push((Modality::Text, a.model_version().to_string()));
        }
        versions
    }
}
