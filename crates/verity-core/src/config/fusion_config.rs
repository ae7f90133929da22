//! Configuration for the fusion engine.
//!
//! # Examples
//!
//! ```
//! use verity_core::config::FusionConfig;
//! use verity_core::models::Modality;
//!
//! let config = FusionConfig::default();
//! assert!((config.weight_for(Modality::Visual) - 0.35).abs() < f64::EPSILON);
//! assert!((config.threshold - 0.5).abs() < f64::EPSILON);
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{Confidence, Modality};

/// Per-modality weights and the decision threshold for fusion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Weight of visual results. Default: 0.35.
    pub visual_weight: f64,
    /// Weight of audio results. Default: 0.35.
    pub audio_weight: f64,
    /// Weight of text results. Default: 0.20.
    pub text_weight: f64,
    /// Weight of metadata results. Default: 0.10.
    pub metadata_weight: f64,
    /// Weight applied to any modality without its own weight. Default: 0.25.
    pub default_weight: f64,
    /// Confidence below this forces an authentic verdict. Default: 0.5.
    pub threshold: f64,
}

impl FusionConfig {
    /// The configured weight for a modality.
    pub fn weight_for(&self, modality: Modality) -> f64 {
        match modality {
            Modality::Visual => self.visual_weight,
            Modality::Audio => self.audio_weight,
            Modality::Text => self.text_weight,
            Modality::Metadata => self.metadata_weight,
            Modality::Fusion => self.default_weight,
        }
    }
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            visual_weight: 0.35,
            audio_weight: 0.35,
            text_weight: 0.20,
            metadata_weight: 0.10,
            default_weight: 0.25,
            threshold: Confidence::DECISION,
        }
    }
}
