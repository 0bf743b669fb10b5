//! Engine error types.

use thiserror::Error;

use beacon_core::errors::CoreError;
use beacon_dom::FormId;
use beacon_store::StoreError;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// A form id that does not resolve in the document.
    #[error("Unknown form: {0}")]
    UnknownForm(FormId),

    /// A submit was driven for a form the engine never annotated.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The session store rejected a write that could not be degraded.
    #[error(transparent)]
    Store(#[from] StoreError),
}
