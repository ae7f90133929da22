//! Fusion engine tests — method semantics, thresholds, and risk scoring.

use std::sync::Arc;

use proptest::prelude::*;

use verity_core::config::FusionConfig;
use verity_core::errors::FusionError;
use verity_core::models::{DetectionResult, EvidenceItem, FusionMethod, Modality};
use verity_fusion::FusionEngine;

fn make_result(modality: Modality, confidence: f64, is_synthetic: bool) -> Arc<DetectionResult> {
    let evidence = vec![EvidenceItem::new(
        format!("{modality}_finding"),
        format!("{modality} detector finding"),
        confidence,
    )];
    Arc::new(DetectionResult::new(
        modality,
        confidence,
        is_synthetic,
        evidence,
        "test-model-v1.0",
    ))
}

#[test]
fn empty_input_fails_for_every_method() {
    let engine = FusionEngine::default();
    for method in [
        FusionMethod::WeightedAverage,
        FusionMethod::Voting,
        FusionMethod::DeepFusion,
    ] {
        let err = engine.fuse(&[], method).unwrap_err();
        assert!(matches!(err, FusionError::EmptyInput));
    }
}

#[test]
fn voting_majority_synthetic_with_high_average() {
    let engine = FusionEngine::default();
    let results = vec![
        make_result(Modality::Visual, 0.9, true),
        make_result(Modality::Audio, 0.8, false),
        make_result(Modality::Text, 0.85, true),
    ];

    let fused = engine.fuse(&results, FusionMethod::Voting).unwrap();
    // Majority 2 vs 1 synthetic; average (0.9 + 0.8 + 0.85) / 3 = 0.85.
    assert!(fused.is_synthetic);
    assert!((fused.final_confidence.value() - 0.85).abs() < 1e-9);
}

#[test]
fn voting_below_threshold_forces_authentic_despite_majority() {
    let engine = FusionEngine::default();
    let results = vec![
        make_result(Modality::Visual, 0.4, true),
        make_result(Modality::Audio, 0.3, true),
        make_result(Modality::Text, 0.4, false),
    ];

    let fused = engine.fuse(&results, FusionMethod::Voting).unwrap();
    // Average ≈ 0.367 < 0.5 threshold.
    assert!(!fused.is_synthetic);
    assert!((fused.risk_score - 0.0).abs() < f64::EPSILON);
}

#[test]
fn weighted_average_unanimous_synthetic() {
    let engine = FusionEngine::default();
    let results = vec![
        make_result(Modality::Visual, 0.9, true),
        make_result(Modality::Audio, 0.9, true),
    ];

    let fused = engine.fuse(&results, FusionMethod::WeightedAverage).unwrap();
    // Equal weights and equal confidences: |Σ/Σw| = 0.9.
    assert!(fused.is_synthetic);
    assert!((fused.final_confidence.value() - 0.9).abs() < 1e-9);
}

#[test]
fn weighted_average_authentic_direction_never_synthetic() {
    let engine = FusionEngine::default();
    // Strongly authentic overall: signed sum is negative even though the
    // magnitude is above the threshold.
    let results = vec![
        make_result(Modality::Visual, 0.95, false),
        make_result(Modality::Audio, 0.9, false),
        make_result(Modality::Text, 0.4, true),
    ];

    let fused = engine.fuse(&results, FusionMethod::WeightedAverage).unwrap();
    assert!(!fused.is_synthetic);
}

#[test]
fn deep_fusion_agreement_scales_with_pair_confidence() {
    let engine = FusionEngine::default();
    let results = vec![
        make_result(Modality::Visual, 0.9, true),
        make_result(Modality::Audio, 0.9, true),
        make_result(Modality::Text, 0.9, true),
    ];

    let base = engine
        .fuse(&results, FusionMethod::WeightedAverage)
        .unwrap();
    let deep = engine.fuse(&results, FusionMethod::DeepFusion).unwrap();

    // All pairs agree with confidence 0.9: agreement = 0.9, so the
    // adjustment factor is 0.7 + 0.3·0.9 = 0.97.
    let expected = base.final_confidence.value() * 0.97;
    assert!((deep.final_confidence.value() - expected).abs() < 1e-9);
    assert!(deep.is_synthetic);
}

#[test]
fn deep_fusion_unanimous_full_confidence_leaves_base_unchanged() {
    let engine = FusionEngine::default();
    let results = vec![
        make_result(Modality::Visual, 1.0, true),
        make_result(Modality::Audio, 1.0, true),
        make_result(Modality::Text, 1.0, true),
    ];

    let base = engine
        .fuse(&results, FusionMethod::WeightedAverage)
        .unwrap();
    let deep = engine.fuse(&results, FusionMethod::DeepFusion).unwrap();

    // Agreement 1.0 ⇒ base·(0.7 + 0.3) = base.
    assert!((deep.final_confidence.value() - base.final_confidence.value()).abs() < 1e-9);
}

#[test]
fn deep_fusion_single_result_equals_base() {
    let engine = FusionEngine::default();
    let results = vec![make_result(Modality::Visual, 0.9, true)];

    let base = engine
        .fuse(&results, FusionMethod::WeightedAverage)
        .unwrap();
    let deep = engine.fuse(&results, FusionMethod::DeepFusion).unwrap();

    // Fewer than 2 results ⇒ agreement 1.0 ⇒ base·(0.7 + 0.3) = base.
    assert!((deep.final_confidence.value() - base.final_confidence.value()).abs() < 1e-9);
}

#[test]
fn disagreement_reduces_deep_fusion_confidence() {
    let engine = FusionEngine::default();
    let agreeing = vec![
        make_result(Modality::Visual, 0.9, true),
        make_result(Modality::Audio, 0.9, true),
    ];
    let disagreeing = vec![
        make_result(Modality::Visual, 0.9, true),
        make_result(Modality::Audio, 0.9, false),
    ];

    let high = engine.fuse(&agreeing, FusionMethod::DeepFusion).unwrap();
    let low = engine.fuse(&disagreeing, FusionMethod::DeepFusion).unwrap();
    assert!(low.final_confidence.value() < high.final_confidence.value());
}

#[test]
fn risk_amplifies_with_synthetic_modality_count_and_caps_at_ten() {
    let engine = FusionEngine::default();

    let two = vec![
        make_result(Modality::Visual, 0.9, true),
        make_result(Modality::Audio, 0.9, true),
    ];
    let fused_two = engine.fuse(&two, FusionMethod::WeightedAverage).unwrap();
    // conf 0.9, two synthetic modalities: 0.9·10·1.2 = 10.8 → capped.
    assert!((fused_two.risk_score - 10.0).abs() < f64::EPSILON);

    let one = vec![make_result(Modality::Visual, 0.7, true)];
    let fused_one = engine.fuse(&one, FusionMethod::WeightedAverage).unwrap();
    // conf 0.7, one synthetic modality: 0.7·10·1.0 = 7.0.
    assert!((fused_one.risk_score - 7.0).abs() < 1e-9);
}

#[test]
fn explanation_names_every_modality_and_verdict() {
    let engine = FusionEngine::default();
    let results = vec![
        make_result(Modality::Visual, 0.9, true),
        make_result(Modality::Metadata, 0.6, false),
    ];

    let fused = engine.fuse(&results, FusionMethod::DeepFusion).unwrap();
    assert!(fused.explanation.contains("visual"));
    assert!(fused.explanation.contains("metadata"));
    assert!(fused.explanation.contains("verdict:"));
}

#[test]
fn custom_threshold_is_respected() {
    let config = FusionConfig {
        threshold: 0.95,
        ..Default::default()
    };
    let engine = FusionEngine::new(config);
    let results = vec![
        make_result(Modality::Visual, 0.9, true),
        make_result(Modality::Audio, 0.9, true),
    ];

    let fused = engine.fuse(&results, FusionMethod::WeightedAverage).unwrap();
    // Confidence 0.9 < threshold 0.95 forces authentic.
    assert!(!fused.is_synthetic);
}

proptest! {
    /// Weighted-average confidence stays in [0, 1] for any non-empty input.
    #[test]
    fn weighted_average_confidence_in_unit_range(
        inputs in prop::collection::vec((0.0f64..=1.0, any::<bool>(), 0usize..4), 1..8)
    ) {
        let modalities = [
            Modality::Visual,
            Modality::Audio,
            Modality::Text,
            Modality::Metadata,
        ];
        let results: Vec<_> = inputs
            .iter()
            .map(|(conf, synthetic, m)| make_result(modalities[*m], *conf, *synthetic))
            .collect();

        let engine = FusionEngine::default();
        let fused = engine.fuse(&results, FusionMethod::WeightedAverage).unwrap();
        prop_assert!((0.0..=1.0).contains(&fused.final_confidence.value()));
        prop_assert!((0.0..=10.0).contains(&fused.risk_score));
    }
}
