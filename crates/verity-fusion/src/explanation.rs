//! Deterministic, human-readable fusion explanations for audit trails.

use std::fmt::Write;
use std::sync::Arc;

use verity_core::models::{DetectionResult, FusionMethod};

/// Render the audit-trail explanation for a fusion run.
///
/// Enumerates each modality's verdict, confidence, and representative
/// evidence description, in input order, followed by the fused outcome.
/// Output is deterministic for a given input.
pub fn explain(
    results: &[Arc<DetectionResult>],
    method: FusionMethod,
    confidence: f64,
    is_synthetic: bool,
    risk_score: f64,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} over {} modality result(s):", method, results.len());

    for result in results {
        let verdict = if result.is_synthetic {
            "synthetic"
        } else {
            "authentic"
        };
        let evidence = result.leading_evidence().unwrap_or("no evidence reported");
        let _ = writeln!(
            out,
            "- {}: {} (confidence {:.3}, {}) — {}",
            result.modality, verdict, result.confidence.value(), result.model_version, evidence
        );
    }

    let verdict = if is_synthetic { "SYNTHETIC" } else { "AUTHENTIC" };
    let _ = write!(
        out,
        "verdict: {verdict}, confidence {confidence:.3}, risk {risk_score:.1}/10"
    );
    out
}
