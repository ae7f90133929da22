//! # verity-consensus
//!
//! Weighted consensus over independent validator votes.
//!
//! The verdict gate uses raw vote-count fractions against the consensus
//! threshold; the reputation/accuracy/stake-weighted score feeds only the
//! reported confidence. The asymmetry is intentional — a quorum
//! sense-check next to a nuanced confidence.

pub mod eligibility;
pub mod engine;
pub mod reputation;
pub mod weight;

pub use engine::ConsensusEngine;
