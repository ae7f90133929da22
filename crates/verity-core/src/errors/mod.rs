//! Error taxonomy for the verification core.
//!
//! Precondition errors (empty fusion input, too few votes) surface
//! immediately and are never retried internally. Analyzer failures are
//! recorded on the failing task only. Ledger integrity failures are
//! reported as `false` from verification, never as errors.

mod consensus_error;
mod evidence_error;
mod fusion_error;
mod swarm_error;

pub use consensus_error::ConsensusError;
pub use evidence_error::EvidenceError;
pub use fusion_error::FusionError;
pub use swarm_error::SwarmError;

/// Top-level error type for the Verity workspace.
#[derive(Debug, thiserror::Error)]
pub enum VerityError {
    #[error(transparent)]
    Swarm(#[from] SwarmError),

    #[error(transparent)]
    Fusion(#[from] FusionError),

    #[error(transparent)]
    Consensus(#[from] ConsensusError),

    #[error(transparent)]
    Evidence(#[from] EvidenceError),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience alias used across the workspace.
pub type VerityResult<T> = Result<T, VerityError>;
