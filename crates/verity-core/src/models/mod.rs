//! Data model for the verification core.
//!
//! One file per aggregate. Everything here is plain serde data; behavior
//! lives in the engine crates.

pub mod agent;
pub mod confidence;
pub mod consensus;
pub mod detection;
pub mod evidence;
pub mod fusion;
pub mod modality;
pub mod task;
pub mod validator;

pub use agent::{Agent, AgentId, AgentStatus, AgentType};
pub use confidence::Confidence;
pub use consensus::{ConsensusResult, ConsensusVerdict};
pub use detection::{DetectionResult, EvidenceItem};
pub use evidence::{ChainBlock, EvidenceRecord, EvidenceType};
pub use fusion::{FusionMethod, FusionResult};
pub use modality::Modality;
pub use task::{SwarmTask, TaskId, TaskPriority, TaskResult, TaskStatus};
pub use validator::{ValidationVote, Validator, VoteChoice};
