/// Fusion-engine errors. All are precondition violations.
#[derive(Debug, thiserror::Error)]
pub enum FusionError {
    #[error("fusion requires at least one detection result")]
    EmptyInput,
}
