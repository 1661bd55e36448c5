//! Error taxonomy for the semantic physics engine

use thiserror::Error;

/// Root error type for SPM failures.
///
/// All variants are local and non-retryable: they signal a caller contract
/// violation or a degenerate numeric state.
#[derive(Error, Debug)]
pub enum SpmError {
    /// A position's dimensionality differs from the one the token was seeded with.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Acceleration requested against exactly-zero mass.
    #[error("Semantic Mass cannot be zero")]
    ZeroMass,

    /// Empty or malformed point sequence or embedding.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Monitor configuration rejected by validation.
    #[error("config error: {0}")]
    Config(String),

    /// Canonical form or config JSON could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Config file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpmResult<T> = Result<T, SpmError>;
