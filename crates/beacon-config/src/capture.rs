//! Capture-side configuration: extraction shape and overwrite policy.

use serde::{Deserialize, Serialize};

use beacon_core::enums::{ExtractMode, OverwritePolicy};

/// Default extraction shape.
const fn default_extract_mode() -> ExtractMode {
    ExtractMode::Sparse
}

/// Default overwrite policy.
const fn default_overwrite_policy() -> OverwritePolicy {
    OverwritePolicy::LastSeen
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaptureConfig {
    /// Whether the extractor produces a partial or total five-key mapping.
    #[serde(default = "default_extract_mode")]
    pub extract_mode: ExtractMode,

    /// Whether a later UTM-carrying URL replaces session values
    /// (`last_seen`) or the first one wins (`session_sticky`).
    #[serde(default = "default_overwrite_policy")]
    pub overwrite_policy: OverwritePolicy,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            extract_mode: default_extract_mode(),
            overwrite_policy: default_overwrite_policy(),
        }
    }
}
