//! Error types for the storage engine.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File system error while reading or writing the registry file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in the registry file.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Malformed registry key at the top level of the file.
    #[error("key error: {0}")]
    Key(#[from] stash_types::Error),

    /// Entity reconstruction failure (unknown variant, missing field, ...).
    #[error("model error: {0}")]
    Model(#[from] stash_model::ModelError),

    /// A top-level record that is not a JSON object.
    #[error("invalid record for key {key}: {reason}")]
    InvalidRecord { key: String, reason: String },
}
