//! Evidence record construction, trust scoring, and ledger anchoring.

use std::sync::Arc;

use tracing::{debug, info, warn};

use verity_core::models::{DetectionResult, EvidenceRecord};
use verity_core::traits::{ContentHasher, LedgerPublisher};

use crate::classify::classify;

/// Build one typed evidence record per evidence item of a detection.
///
/// The proof is the item's description plus a fingerprint of its
/// serialized form, so a record can later be matched against the exact
/// finding that produced it.
pub fn records_from_detection(
    detection_id: &str,
    detection: &DetectionResult,
    hasher: &Arc<dyn ContentHasher>,
) -> Vec<EvidenceRecord> {
    detection
        .evidence
        .iter()
        .map(|item| {
            let fingerprint = serde_json::to_vec(item)
                .map(|bytes| hasher.hash_hex(&bytes))
                .unwrap_or_default();
            let proof = format!("{} [fingerprint:{}]", item.description, fingerprint);
            EvidenceRecord::new(
                detection_id,
                classify(&item.kind),
                proof,
                item.confidence.value(),
            )
        })
        .collect()
}

/// Trust score for a record in [0.0, 1.0].
///
/// Confidence dominates (×0.6); each corroborating validator adds 0.1 up
/// to 0.3; an external ledger anchor adds a flat 0.1.
pub fn trust_score(record: &EvidenceRecord) -> f64 {
    let corroboration = (0.1 * record.validated_by.len() as f64).min(0.3);
    let anchoring = if record.dkg_locator.is_some() { 0.1 } else { 0.0 };
    (record.confidence.value() * 0.6 + corroboration + anchoring).min(1.0)
}

/// Anchor a record through the external ledger publisher.
///
/// On success the returned locator is stored on the record. Publisher
/// failures must not abort the pipeline: the record stays unanchored and
/// the failure is logged as a warning.
pub fn anchor(record: &mut EvidenceRecord, publisher: &dyn LedgerPublisher) {
    let document = match serde_json::to_value(&*record) {
        Ok(v) => v,
        Err(e) => {
            warn!(record_id = %record.id, error = %e, "could not serialize record for anchoring");
            return;
        }
    };

    match publisher.publish(&document) {
        Ok(locator) => {
            debug!(record_id = %record.id, locator, "record anchored");
            record.dkg_locator = Some(locator);
        }
        Err(reason) => {
            warn!(record_id = %record.id, reason, "ledger publish failed, record left unanchored");
        }
    }
}

/// Anchor every record, reporting how many succeeded.
pub fn anchor_all(records: &mut [EvidenceRecord], publisher: &dyn LedgerPublisher) -> usize {
    let mut anchored = 0;
    for record in records.iter_mut() {
        anchor(record, publisher);
        if record.dkg_locator.is_some() {
            anchored += 1;
        }
    }
    info!(
        anchored,
        total = records.len(),
        "evidence anchoring pass complete"
    );
    anchored
}
