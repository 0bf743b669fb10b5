//! Storage error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage rejected the write (unavailable, quota exceeded).
    #[error("Session storage unavailable: {0}")]
    Unavailable(String),

    /// The UTM bundle could not be serialized.
    #[error("Bundle serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
