//! FusionEngine — combine per-modality detection results into one verdict.
//!
//! Below the decision threshold the verdict is always authentic, regardless
//! of what the signed sum or the vote majority says. Risk amplifies with
//! the number of modalities agreeing on "synthetic", capped at 10.

use std::sync::Arc;

use tracing::{debug, instrument};

use verity_core::config::FusionConfig;
use verity_core::constants::{MAX_RISK_SCORE, RISK_AMPLIFICATION_STEP};
use verity_core::errors::FusionError;
use verity_core::models::{Confidence, DetectionResult, FusionMethod, FusionResult};

use crate::explanation::explain;

/// Combines a non-empty set of detection results into a `FusionResult`.
pub struct FusionEngine {
    config: FusionConfig,
}

impl FusionEngine {
    /// Create an engine with the given config.
    pub fn new(config: FusionConfig) -> Self {
        Self { config }
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    /// Fuse `results` using `method`.
    ///
    /// Empty input is a precondition error for every method.
    #[instrument(skip(self, results), fields(count = results.len(), %method))]
    pub fn fuse(
        &self,
        results: &[Arc<DetectionResult>],
        method: FusionMethod,
    ) -> Result<FusionResult, FusionError> {
        if results.is_empty() {
            return Err(FusionError::EmptyInput);
        }

        let (confidence, is_synthetic) = match method {
            FusionMethod::WeightedAverage => self.weighted_average(results),
            FusionMethod::Voting => self.voting(results),
            FusionMethod::DeepFusion => self.deep_fusion(results),
        };

        let risk_score = self.risk_score(results, confidence, is_synthetic);
        let explanation = explain(results, method, confidence, is_synthetic, risk_score);

        debug!(
            confidence = format!("{confidence:.3}"),
            is_synthetic, risk_score, "fusion complete"
        );

        Ok(FusionResult {
            final_confidence: Confidence::new(confidence),
            is_synthetic,
            modality_results: results.to_vec(),
            fusion_method: method,
            explanation,
            risk_score,
        })
    }

    /// Signed weighted sum: a synthetic result contributes `+conf·w`, an
    /// authentic one `−conf·w`. Confidence is `|Σ / Σw|`; the verdict is
    /// synthetic only if the signed sum is positive and the confidence
    /// meets the threshold.
    fn weighted_average(&self, results: &[Arc<DetectionResult>]) -> (f64, bool) {
        let mut signed_sum = 0.0;
        let mut total_weight = 0.0;

        for result in results {
            let weight = self.config.weight_for(result.modality);
            let signed = if result.is_synthetic {
                result.confidence.value()
            } else {
                -result.confidence.value()
            };
            signed_sum += signed * weight;
            total_weight += weight;
        }

        let confidence = (signed_sum / total_weight).abs();
        let is_synthetic = signed_sum > 0.0 && confidence >= self.config.threshold;
        (confidence, is_synthetic)
    }

    /// Boolean majority decides the direction; confidence is the plain
    /// average. An average below the threshold forces authentic even when
    /// the majority says synthetic.
    fn voting(&self, results: &[Arc<DetectionResult>]) -> (f64, bool) {
        let synthetic_votes = results.iter().filter(|r| r.is_synthetic).count();
        let majority_synthetic = synthetic_votes * 2 > results.len();

        let confidence = results
            .iter()
            .map(|r| r.confidence.value())
            .sum::<f64>()
            / results.len() as f64;

        let is_synthetic = majority_synthetic && confidence >= self.config.threshold;
        (confidence, is_synthetic)
    }

    /// Weighted average modulated by pairwise cross-modal agreement.
    ///
    /// Each agreeing pair contributes its average confidence; disagreeing
    /// pairs contribute 0. With fewer than two results agreement is 1.0,
    /// so full agreement leaves the base confidence unchanged
    /// (`base · (0.7 + 0.3·1) = base`).
    fn deep_fusion(&self, results: &[Arc<DetectionResult>]) -> (f64, bool) {
        let (base_confidence, base_synthetic) = self.weighted_average(results);

        let agreement = cross_modal_agreement(results);
        let adjusted = base_confidence * (0.7 + 0.3 * agreement);
        let is_synthetic = adjusted >= self.config.threshold && base_synthetic;
        (adjusted, is_synthetic)
    }

    /// Risk in [0, 10]: 0 for authentic content, otherwise confidence
    /// scaled by how many modalities agreed on "synthetic".
    fn risk_score(
        &self,
        results: &[Arc<DetectionResult>],
        confidence: f64,
        is_synthetic: bool,
    ) -> f64 {
        if !is_synthetic {
            return 0.0;
        }

        let synthetic_modalities = results.iter().filter(|r| r.is_synthetic).count().max(1);
        let amplification = 1.0 + RISK_AMPLIFICATION_STEP * (synthetic_modalities as f64 - 1.0);
        (confidence * 10.0 * amplification).min(MAX_RISK_SCORE)
    }
}

impl Default for FusionEngine {
    fn default() -> Self {
        Self::new(FusionConfig::default())
    }
}

/// Pairwise cross-modal agreement in [0.0, 1.0].
///
/// Every pair that agrees on synthetic/authentic contributes the pair's
/// average confidence; the total is divided by the number of pairs.
fn cross_modal_agreement(results: &[Arc<DetectionResult>]) -> f64 {
    if results.len() < 2 {
        return 1.0;
    }

    let mut contribution = 0.0;
    let mut pairs = 0usize;

    for (i, a) in results.iter().enumerate() {
        for b in results.iter().skip(i + 1) {
            if a.is_synthetic == b.is_synthetic {
                contribution += (a.confidence.value() + b.confidence.value()) / 2.0;
            }
            pairs += 1;
        }
    }

    contribution / pairs as f64
}
