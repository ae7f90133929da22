//! EvidenceChain — append-only, hash-linked ledger of evidence blocks.
//!
//! Each block's `chain_hash` covers its own fields and links to the
//! previous block's hash, so any mutation of a stored block breaks
//! verification from that point on. There is no update or delete
//! operation, and no repair — `verify_chain` only reports.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use verity_core::errors::EvidenceError;
use verity_core::models::ChainBlock;
use verity_core::traits::ContentHasher;

/// The fields covered by a block's hash, in stable serialization order.
#[derive(Serialize)]
struct HashableBlock<'a> {
    evidence_id: &'a str,
    detection_id: &'a str,
    previous_hash: Option<&'a str>,
    block_number: u64,
    timestamp: &'a str,
}

/// Append-only hash-linked ledger.
///
/// Appends are serialized through an interior mutex: sequential block
/// numbering is a correctness invariant, not a convenience.
pub struct EvidenceChain {
    hasher: Arc<dyn ContentHasher>,
    blocks: Mutex<Vec<ChainBlock>>,
}

impl EvidenceChain {
    /// Create an empty chain using the given hash primitive.
    pub fn new(hasher: Arc<dyn ContentHasher>) -> Self {
        Self {
            hasher,
            blocks: Mutex::new(Vec::new()),
        }
    }

    /// Append a block for `evidence_id` owned by `detection_id`.
    ///
    /// The new block references the current tail's hash (`None` for the
    /// genesis block) and takes the next sequential block number.
    #[instrument(skip(self))]
    pub fn add_to_chain(
        &self,
        evidence_id: &str,
        detection_id: &str,
    ) -> Result<ChainBlock, EvidenceError> {
        let mut blocks = self.blocks.lock().unwrap_or_else(|e| e.into_inner());

        let previous_hash = blocks.last().map(|b| b.chain_hash.clone());
        let block_number = blocks.len() as u64;
        let timestamp = Utc::now();

        let chain_hash = self.compute_hash(
            evidence_id,
            detection_id,
            previous_hash.as_deref(),
            block_number,
            timestamp,
        )?;

        let block = ChainBlock {
            evidence_id: evidence_id.to_string(),
            detection_id: detection_id.to_string(),
            chain_hash,
            previous_hash,
            block_number,
            timestamp,
        };

        debug!(block_number, evidence_id, "evidence block appended");
        blocks.push(block.clone());
        Ok(block)
    }

    /// Re-verify the whole chain.
    ///
    /// Checks, for every block, that its stored hash matches a
    /// recomputation over its own fields, and, for every block after the
    /// first, that `previous_hash` equals the prior block's `chain_hash`.
    /// Empty and single-block chains with a valid hash are trivially
    /// valid. Returns a boolean — it never attempts repair.
    #[instrument(skip(self))]
    pub fn verify_chain(&self) -> bool {
        let blocks = self.blocks.lock().unwrap_or_else(|e| e.into_inner());

        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                let prior = &blocks[i - 1];
                if block.previous_hash.as_deref() != Some(prior.chain_hash.as_str()) {
                    warn!(block_number = block.block_number, "broken chain link");
                    return false;
                }
            }

            let recomputed = self.compute_hash(
                &block.evidence_id,
                &block.detection_id,
                block.previous_hash.as_deref(),
                block.block_number,
                block.timestamp,
            );
            match recomputed {
                Ok(hash) if hash == block.chain_hash => {}
                _ => {
                    warn!(block_number = block.block_number, "block hash mismatch");
                    return false;
                }
            }
        }
        true
    }

    /// Number of blocks in the chain.
    pub fn len(&self) -> usize {
        self.blocks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Whether the chain has no blocks yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all blocks, oldest first.
    pub fn blocks(&self) -> Vec<ChainBlock> {
        self.blocks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Overwrite a stored block. Test-only: exists so integrity tests can
    /// tamper with the ledger.
    #[doc(hidden)]
    pub fn tamper_with_block(&self, index: usize, block: ChainBlock) {
        let mut blocks = self.blocks.lock().unwrap_or_else(|e| e.into_inner());
        blocks[index] = block;
    }

    fn compute_hash(
        &self,
        evidence_id: &str,
        detection_id: &str,
        previous_hash: Option<&str>,
        block_number: u64,
        timestamp: DateTime<Utc>,
    ) -> Result<String, EvidenceError> {
        let timestamp = timestamp.to_rfc3339();
        let hashable = HashableBlock {
            evidence_id,
            detection_id,
            previous_hash,
            block_number,
            timestamp: &timestamp,
        };
        let bytes = serde_json::to_vec(&hashable)
            .map_err(|e| EvidenceError::Serialization(e.to_string()))?;
        Ok(self.hasher.hash_hex(&bytes))
    }
}
