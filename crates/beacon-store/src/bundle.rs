//! The bundled-UTM JSON codec.
//!
//! The bundle is stored as one JSON-encoded object string under
//! [`beacon_core::keys::UTM_BUNDLE`], e.g. `{"utm_source":"ads"}`. Other
//! scripts in the tab may have written garbage under that key, so decoding
//! is total: anything that is not a JSON object decodes to the empty set.

use beacon_core::entities::{UtmKey, UtmSet};

use crate::StoreError;

/// Serialize a UTM set to the stored bundle string.
///
/// # Errors
///
/// Returns `StoreError::Serialization` if JSON encoding fails.
pub fn encode(set: &UtmSet) -> Result<String, StoreError> {
    Ok(serde_json::to_string(set)?)
}

/// Decode a stored bundle string.
///
/// Malformed JSON, non-object JSON, unrecognized keys, and non-string values
/// all degrade silently: recognized string entries are kept, everything else
/// is dropped, and a completely unreadable bundle decodes to the empty set
/// with a warning.
#[must_use]
pub fn decode(raw: &str) -> UtmSet {
    let parsed: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Stored UTM bundle is not valid JSON, treating as empty: {e}");
            return UtmSet::new();
        }
    };

    let Some(object) = parsed.as_object() else {
        tracing::warn!("Stored UTM bundle is not a JSON object, treating as empty");
        return UtmSet::new();
    };

    let mut set = UtmSet::new();
    for (key, value) in object {
        let Some(key) = UtmKey::from_query_key(key) else {
            continue;
        };
        if let Some(value) = value.as_str() {
            set.insert(key, value);
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encode_decode_roundtrip() {
        let mut set = UtmSet::new();
        set.insert(UtmKey::UtmSource, "ads");
        set.insert(UtmKey::UtmCampaign, "spring");
        let raw = encode(&set).unwrap();
        assert_eq!(decode(&raw), set);
    }

    #[test]
    fn malformed_json_decodes_to_empty() {
        assert!(decode("{not json").is_empty());
        assert!(decode("").is_empty());
    }

    #[test]
    fn non_object_json_decodes_to_empty() {
        assert!(decode("42").is_empty());
        assert!(decode("\"utm_source=ads\"").is_empty());
        assert!(decode("[\"utm_source\"]").is_empty());
        assert!(decode("null").is_empty());
    }

    #[test]
    fn unrecognized_and_non_string_entries_are_dropped() {
        let set = decode(r#"{"utm_source":"ads","gclid":"x","utm_term":7}"#);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(UtmKey::UtmSource), Some("ads"));
        assert!(!set.contains(UtmKey::UtmTerm));
    }
}
