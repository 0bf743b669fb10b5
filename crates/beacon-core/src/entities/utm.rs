//! UTM parameter key and set types.
//!
//! `UtmKey` serializes to the standard query-string spellings
//! (`utm_source`, ...), which makes a serialized `UtmSet` byte-compatible
//! with the stored bundle format `{"utm_source":"ads",...}`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One of the five recognized UTM query-string keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum UtmKey {
    UtmSource,
    UtmMedium,
    UtmCampaign,
    UtmTerm,
    UtmContent,
}

impl UtmKey {
    /// All recognized keys, in canonical order.
    pub const ALL: [Self; 5] = [
        Self::UtmSource,
        Self::UtmMedium,
        Self::UtmCampaign,
        Self::UtmTerm,
        Self::UtmContent,
    ];

    /// The query-string / storage spelling of this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UtmSource => "utm_source",
            Self::UtmMedium => "utm_medium",
            Self::UtmCampaign => "utm_campaign",
            Self::UtmTerm => "utm_term",
            Self::UtmContent => "utm_content",
        }
    }

    /// Parse a query-string key. Returns `None` for unrecognized keys;
    /// no case folding or trimming is applied.
    #[must_use]
    pub fn from_query_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for UtmKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered mapping from UTM key to captured value.
///
/// Sparse by construction: only inserted keys are present. [`UtmSet::dense`]
/// produces the total mapping with empty strings for absent keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct UtmSet(BTreeMap<UtmKey, String>);

impl UtmSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the value for `key`.
    pub fn insert(&mut self, key: UtmKey, value: impl Into<String>) {
        self.0.insert(key, value.into());
    }

    #[must_use]
    pub fn get(&self, key: UtmKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    /// The value for `key`, or `""` when absent.
    #[must_use]
    pub fn value_or_default(&self, key: UtmKey) -> &str {
        self.get(key).unwrap_or("")
    }

    #[must_use]
    pub fn contains(&self, key: UtmKey) -> bool {
        self.0.contains_key(&key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (UtmKey, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// The total mapping: every recognized key, absent ones as `""`.
    #[must_use]
    pub fn dense(&self) -> Self {
        let mut out = Self::new();
        for key in UtmKey::ALL {
            out.insert(key, self.value_or_default(key));
        }
        out
    }
}

impl FromIterator<(UtmKey, String)> for UtmSet {
    fn from_iter<I: IntoIterator<Item = (UtmKey, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
