//! Typed evidence records and the hash-linked ledger block.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::confidence::Confidence;

/// The five evidence buckets a free-form evidence kind is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceType {
    VisualArtifact,
    AudioAnomaly,
    TextPattern,
    MetadataInconsistency,
    /// Default/fallback bucket for kinds no keyword matches.
    BlockchainProof,
}

impl fmt::Display for EvidenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EvidenceType::VisualArtifact => "visual_artifact",
            EvidenceType::AudioAnomaly => "audio_anomaly",
            EvidenceType::TextPattern => "text_pattern",
            EvidenceType::MetadataInconsistency => "metadata_inconsistency",
            EvidenceType::BlockchainProof => "blockchain_proof",
        };
        write!(f, "{s}")
    }
}

/// A typed, auditable evidence record derived from a detection finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceRecord {
    pub id: String,
    /// The detection run this evidence belongs to.
    pub detection_id: String,
    pub record_type: EvidenceType,
    /// Human-readable proof statement plus a fingerprint of the finding.
    pub proof: String,
    pub confidence: Confidence,
    /// Validators that independently corroborated this record.
    pub validated_by: HashSet<String>,
    pub created_at: DateTime<Utc>,
    /// Locator returned by the external ledger publisher, once anchored.
    pub dkg_locator: Option<String>,
}

impl EvidenceRecord {
    /// Create an unanchored, uncorroborated record.
    pub fn new(
        detection_id: impl Into<String>,
        record_type: EvidenceType,
        proof: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            id: format!("evidence-{}", Uuid::new_v4()),
            detection_id: detection_id.into(),
            record_type,
            proof: proof.into(),
            confidence: Confidence::new(confidence),
            validated_by: HashSet::new(),
            created_at: Utc::now(),
            dkg_locator: None,
        }
    }
}

/// One block in the append-only evidence ledger.
///
/// Invariants: `block[i].previous_hash == block[i-1].chain_hash` for all
/// i > 0, and `chain_hash` is the hash over the block's own fields minus
/// `chain_hash` itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainBlock {
    pub evidence_id: String,
    pub detection_id: String,
    /// Hash over this block's hashable fields.
    pub chain_hash: String,
    /// The previous block's `chain_hash`; `None` only for the genesis block.
    pub previous_hash: Option<String>,
    /// 0-based, strictly sequential.
    pub block_number: u64,
    pub timestamp: DateTime<Utc>,
}
