//! # verity-fusion
//!
//! Multi-modal fusion: combines disagreeing per-modality detection results
//! into a single verdict, confidence, and risk score.
//!
//! ## Methods
//! 1. **Weighted average** — signed sum weighted per modality
//! 2. **Voting** — boolean majority with plain-average confidence
//! 3. **Deep fusion** — weighted average adjusted by pairwise cross-modal
//!    agreement
//!
//! The engine is a leaf: it has no dependencies beyond the core types and
//! is called by the swarm's fusion coordinator.

pub mod engine;
pub mod explanation;

pub use engine::FusionEngine;
