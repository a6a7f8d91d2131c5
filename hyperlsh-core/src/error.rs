use thiserror::Error;

/// Errors raised while building or querying an LSH index.
///
/// None of these leave the index in a modified state: construction either
/// returns a complete index or nothing, and queries never mutate it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LshError {
    #[error("Dimension mismatch: expected {expected} components, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("Cosine similarity is NaN (zero-magnitude vector)")]
    NotANumber,
    #[error("Duplicate vector id {0} in corpus")]
    DuplicateId(u64),
    #[error("Unknown vector id {0}")]
    UnknownId(u64),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, LshError>;
