/// Consensus-engine errors.
#[derive(Debug, thiserror::Error)]
pub enum ConsensusError {
    #[error("insufficient votes for consensus: {supplied} supplied, {required} required")]
    InsufficientVotes { supplied: usize, required: usize },
}
