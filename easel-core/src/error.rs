//! Error types for easel operations.

use thiserror::Error;

/// Result type for easel operations.
pub type EaselResult<T> = Result<T, EaselError>;

/// Errors that can occur in easel operations.
#[derive(Debug, Error)]
pub enum EaselError {
    /// Surface snapshot capture or restore failed.
    #[error("Surface error: {0}")]
    Surface(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
