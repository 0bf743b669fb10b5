//! Annotation-side configuration: field naming, download-field policy,
//! content path segment, timestamp stamping.

use serde::{Deserialize, Serialize};

use beacon_core::enums::{DownloadFieldPolicy, FieldProfile};

/// Default naming family for per-key UTM fields.
const fn default_field_profile() -> FieldProfile {
    FieldProfile::CampaignSnake
}

/// Default download-field behavior off content pages.
const fn default_download_field() -> DownloadFieldPolicy {
    DownloadFieldPolicy::OmitOffContent
}

/// Default path segment identifying content/download pages.
fn default_content_segment() -> String {
    "/content".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnnotateConfig {
    /// Naming family used when creating per-key UTM inputs.
    #[serde(default = "default_field_profile")]
    pub field_profile: FieldProfile,

    /// What happens to the download/guide field off content pages.
    #[serde(default = "default_download_field")]
    pub download_field: DownloadFieldPolicy,

    /// Path substring that marks a page as a content/download page.
    #[serde(default = "default_content_segment")]
    pub content_segment: String,

    /// Whether to maintain and stamp `first_seen_ts`/`last_seen_ts`.
    #[serde(default)]
    pub stamp_timestamps: bool,
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self {
            field_profile: default_field_profile(),
            download_field: default_download_field(),
            content_segment: default_content_segment(),
            stamp_timestamps: false,
        }
    }
}
