//! Session initializers and UTM persistence policies.
//!
//! Write protocol per page view, in order:
//! 1. [`ensure_original_source`]: write-once original source
//! 2. [`ensure_first_seen`]: write-once first-seen timestamp (when stamping)
//! 3. [`persist_utm`]: bundled + unbundled UTM keys under the configured
//!    overwrite policy
//!
//! Both storage shapes are always maintained: the bundled key feeds the
//! combined-information hidden field, the unbundled keys feed the per-key
//! fields. The overwrite policy governs when values are replaced, not which
//! shape exists.

use chrono::{DateTime, Utc};

use beacon_core::entities::{AttributionRecord, UtmKey, UtmSet};
use beacon_core::enums::OverwritePolicy;
use beacon_core::keys;

use crate::{SessionStore, StoreError, bundle};

/// Record the original source if the session does not have one yet.
///
/// Prefers the document referrer; an absent or empty referrer falls back to
/// the current URL. Never overwrites.
///
/// # Errors
///
/// Returns `StoreError` if the write fails.
pub fn ensure_original_source<S: SessionStore>(
    store: &mut S,
    referrer: Option<&str>,
    url: &str,
) -> Result<(), StoreError> {
    if store.has(keys::ORIGINAL_SOURCE) {
        return Ok(());
    }
    let source = match referrer {
        Some(r) if !r.is_empty() => r,
        _ => url,
    };
    tracing::debug!(source, "Recording session original source");
    store.set(keys::ORIGINAL_SOURCE, source)
}

/// Record the first-seen timestamp if the session does not have one yet.
///
/// # Errors
///
/// Returns `StoreError` if the write fails.
pub fn ensure_first_seen<S: SessionStore>(
    store: &mut S,
    now: DateTime<Utc>,
) -> Result<(), StoreError> {
    if store.has(keys::FIRST_SEEN) {
        return Ok(());
    }
    store.set(keys::FIRST_SEEN, &now.to_rfc3339())
}

/// Stamp the last-seen timestamp, overwriting any earlier value.
///
/// Called at the submit instant so the stored value reflects the exact
/// submission time.
///
/// # Errors
///
/// Returns `StoreError` if the write fails.
pub fn stamp_last_seen<S: SessionStore>(
    store: &mut S,
    now: DateTime<Utc>,
) -> Result<(), StoreError> {
    store.set(keys::LAST_SEEN, &now.to_rfc3339())
}

/// Persist an extraction into both storage shapes under `policy`.
///
/// `carried` must say whether the current URL literally carried at least one
/// recognized UTM key: a URL that carried none writes nothing under either
/// policy, even when a dense extraction supplies empty-string placeholders.
///
/// - [`OverwritePolicy::LastSeen`]: every UTM-carrying load rewrites the
///   bundle and every extracted per-key value.
/// - [`OverwritePolicy::SessionSticky`]: the bundle is written once per
///   session, and each per-key value only while absent.
///
/// # Errors
///
/// Returns `StoreError` if encoding or a write fails.
pub fn persist_utm<S: SessionStore>(
    store: &mut S,
    extracted: &UtmSet,
    carried: bool,
    policy: OverwritePolicy,
) -> Result<(), StoreError> {
    if !carried || extracted.is_empty() {
        return Ok(());
    }

    match policy {
        OverwritePolicy::LastSeen => {
            store.set(keys::UTM_BUNDLE, &bundle::encode(extracted)?)?;
            for (key, value) in extracted.iter() {
                store.set(key.as_str(), value)?;
            }
        }
        OverwritePolicy::SessionSticky => {
            if !store.has(keys::UTM_BUNDLE) {
                store.set(keys::UTM_BUNDLE, &bundle::encode(extracted)?)?;
            }
            for (key, value) in extracted.iter() {
                if !store.has(key.as_str()) {
                    store.set(key.as_str(), value)?;
                }
            }
        }
    }

    tracing::debug!(captured = extracted.len(), policy = %policy, "Persisted UTM parameters");
    Ok(())
}

/// The merged per-key UTM view: the decoded bundle overlaid with any
/// unbundled keys present in the store.
#[must_use]
pub fn stored_utm<S: SessionStore>(store: &S) -> UtmSet {
    let mut set = store
        .get(keys::UTM_BUNDLE)
        .map(|raw| bundle::decode(&raw))
        .unwrap_or_default();
    for key in UtmKey::ALL {
        if let Some(value) = store.get(key.as_str()) {
            set.insert(key, value);
        }
    }
    set
}

/// Assemble the full attribution read model from the store.
///
/// Unparseable timestamps read as `None`; a missing original source reads as
/// the empty string.
#[must_use]
pub fn read_record<S: SessionStore>(store: &S) -> AttributionRecord {
    AttributionRecord {
        original_source: store.get(keys::ORIGINAL_SOURCE).unwrap_or_default(),
        first_seen: read_timestamp(store, keys::FIRST_SEEN),
        last_seen: read_timestamp(store, keys::LAST_SEEN),
        utm: stored_utm(store),
    }
}

fn read_timestamp<S: SessionStore>(store: &S, key: &str) -> Option<DateTime<Utc>> {
    let raw = store.get(key)?;
    match DateTime::parse_from_rfc3339(&raw) {
        Ok(ts) => Some(ts.with_timezone(&Utc)),
        Err(e) => {
            tracing::warn!(key, "Stored timestamp is unparseable: {e}");
            None
        }
    }
}
