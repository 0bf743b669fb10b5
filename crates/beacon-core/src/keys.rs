//! Session storage key constants.
//!
//! These spellings are visible to every other script in the browser session
//! and to the next page load, so they are part of the external contract and
//! must not be renamed. The five unbundled UTM keys reuse the query-string
//! spellings from [`crate::entities::UtmKey::as_str`].

/// Write-once original source (referrer, else landing URL).
pub const ORIGINAL_SOURCE: &str = "originalSource";

/// Bundled UTM parameters, JSON-encoded as one string.
pub const UTM_BUNDLE: &str = "utmParams";

/// Write-once first-seen timestamp (RFC 3339).
pub const FIRST_SEEN: &str = "first_seen_ts";

/// Last-seen timestamp (RFC 3339), re-stamped on every form submission.
pub const LAST_SEEN: &str = "last_seen_ts";
