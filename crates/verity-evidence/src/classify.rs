//! Keyword classification of free-form evidence kinds.

use verity_core::models::EvidenceType;

/// Map a detector-specific evidence kind onto one of the five record
/// types by keyword containment.
///
/// Precedence: visual/face, then audio/voice, then text/pattern, then
/// metadata; anything unmatched falls into the `BlockchainProof` bucket.
///
/// # Examples
///
/// ```
/// use verity_core::models::EvidenceType;
/// use verity_evidence::classify;
///
/// assert_eq!(classify("gan_face_artifacts"), EvidenceType::VisualArtifact);
/// assert_eq!(classify("voice_cloning_markers"), EvidenceType::AudioAnomaly);
/// assert_eq!(classify("stylometric_pattern"), EvidenceType::TextPattern);
/// assert_eq!(classify("exif_metadata_gap"), EvidenceType::MetadataInconsistency);
/// assert_eq!(classify("anchored_proof"), EvidenceType::BlockchainProof);
/// ```
pub fn classify(kind: &str) -> EvidenceType {
    let kind = kind.to_ascii_lowercase();
    if kind.contains("visual") || kind.contains("face") {
        EvidenceType::VisualArtifact
    } else if kind.contains("audio") || kind.contains("voice") {
        EvidenceType::AudioAnomaly
    } else if kind.contains("text") || kind.contains("pattern") {
        EvidenceType::TextPattern
    } else if kind.contains("metadata") {
        EvidenceType::MetadataInconsistency
    } else {
        EvidenceType::BlockchainProof
    }
}
