use thiserror::Error;

/// Failures raised while mapping label tokens to vocabulary positions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// The token was never seen when the vocabulary was built.
    #[error("label '{label}' is not in the vocabulary")]
    UnknownLabel { label: String },
    #[error("encoded vector has length {actual}, vocabulary has {expected} labels")]
    LengthMismatch { expected: usize, actual: usize },
}
