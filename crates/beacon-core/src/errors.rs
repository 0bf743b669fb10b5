//! Cross-cutting error types for Beacon.
//!
//! Domain-specific errors (e.g., `StoreError`, `ConfigError`) are defined in
//! their respective crates; this module holds the errors any crate can raise.

use thiserror::Error;

/// Errors that can be raised by any Beacon crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A form annotation state transition was attempted that is not allowed.
    #[error("Invalid form phase transition: form {form} from {from} to {to}")]
    InvalidTransition {
        form: usize,
        from: String,
        to: String,
    },

    /// Data failed validation (shape, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
