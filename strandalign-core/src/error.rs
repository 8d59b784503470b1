//! Error types for strandalign-core

use thiserror::Error;

/// Errors that can occur while generating or aligning sequences
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    #[error("Invalid length range: min={min}, max={max} (need 0 < min <= max)")]
    InvalidRange { min: usize, max: usize },

    #[error("Alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("Invalid scoring policy: {0}")]
    InvalidScoring(String),

    #[error("Alignment needs {cells} table cells, limit is {limit}")]
    ResourceExhausted { cells: usize, limit: usize },
}

impl AlignError {
    /// True for conditions caused by input size rather than malformed input.
    pub fn is_resource_limit(&self) -> bool {
        matches!(self, AlignError::ResourceExhausted { .. })
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, AlignError>;
