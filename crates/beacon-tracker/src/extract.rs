//! The query-string parameter extractor.

use beacon_core::entities::{UtmKey, UtmSet};
use beacon_core::enums::ExtractMode;
use beacon_dom::PageUrl;

/// Extract the recognized UTM keys from the page URL.
///
/// Sparse mode includes only keys literally present in the query string;
/// dense mode totals the mapping with empty strings. For a repeated key the
/// first occurrence wins. No normalization beyond standard query decoding.
#[must_use]
pub fn extract(url: &PageUrl, mode: ExtractMode) -> UtmSet {
    let mut set = UtmSet::new();
    for key in UtmKey::ALL {
        if let Some(value) = url.query_get(key.as_str()) {
            set.insert(key, value);
        }
    }
    match mode {
        ExtractMode::Sparse => set,
        ExtractMode::Dense => set.dense(),
    }
}

/// Whether the URL literally carries at least one recognized UTM key.
///
/// This gates persistence: a dense extraction of a UTM-less URL is all
/// placeholders and must not overwrite anything.
#[must_use]
pub fn url_carries_utm(url: &PageUrl) -> bool {
    UtmKey::ALL
        .iter()
        .any(|key| url.query_get(key.as_str()).is_some())
}
