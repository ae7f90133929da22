//! # verity-evidence
//!
//! Tamper-evident evidence handling:
//! - keyword classification of free-form detector evidence into the five
//!   record types
//! - an append-only, hash-linked ledger (`EvidenceChain`) whose integrity
//!   can be independently re-verified
//! - record trust scoring and optional anchoring through an external
//!   ledger publisher

pub mod chain;
pub mod classify;
pub mod record;

pub use chain::EvidenceChain;
pub use classify::classify;
pub use record::{anchor, anchor_all, records_from_detection, trust_score};
