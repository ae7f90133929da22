//! # verity-swarm
//!
//! The verification swarm: a fixed pool of typed agents, a stable
//! priority task queue, and a per-task state machine
//! (`Pending → Assigned → Processing → {Completed | Failed}`).
//!
//! `verify_content` drives one content item through per-modality
//! detection tasks and a final fusion task, returning the fused verdict.
//! All queue and roster mutation happens under one coarse lock; analyzer
//! calls run outside it on the blocking pool.

pub mod analyzers;
pub mod metadata;
pub mod queue;
pub mod scheduler;
pub mod state;

pub use analyzers::AnalyzerSet;
pub use scheduler::{SwarmStatus, VerificationSwarm};
