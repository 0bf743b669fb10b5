//! DOM mutation batches.

use serde::{Deserialize, Serialize};

use crate::FormId;

/// One batch of subtree insertions, as a mutation observer would deliver it.
///
/// The stream of batches is finite per page view and not restartable: once
/// drained, a batch is gone. A batch may re-deliver a form that was already
/// annotated (a node move), so consumers must stay idempotent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationBatch {
    /// Forms added (or re-added) to the page in this batch.
    pub added: Vec<FormId>,
}

impl MutationBatch {
    #[must_use]
    pub const fn new(added: Vec<FormId>) -> Self {
        Self { added }
    }
}
