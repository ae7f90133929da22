/// Evidence-chain errors.
///
/// Chain integrity failures are *not* errors — `verify_chain` reports a
/// boolean and the caller decides how to react.
#[derive(Debug, thiserror::Error)]
pub enum EvidenceError {
    #[error("failed to serialize chain block: {0}")]
    Serialization(String),
}
