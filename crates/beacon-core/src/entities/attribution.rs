//! The session attribution record.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::UtmSet;

/// Everything the session knows about how the visitor arrived.
///
/// This is a read model assembled from the session store, not the storage
/// format itself: `original_source` and the timestamps live under their own
/// keys, and the UTM set is stored both bundled and unbundled.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AttributionRecord {
    /// Referrer of the first page view in the session, else its landing URL.
    /// Write-once for the lifetime of the session.
    pub original_source: String,

    /// When the session first saw this visitor. Write-once.
    pub first_seen: Option<DateTime<Utc>>,

    /// Re-stamped on every form submission.
    pub last_seen: Option<DateTime<Utc>>,

    /// Captured UTM parameters.
    pub utm: UtmSet,
}
