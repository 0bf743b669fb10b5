//! The logical hidden-field table.
//!
//! Each [`FieldKey`] is one hidden field the annotator maintains on a form.
//! A field is looked up by any of its accepted `name` aliases; when no input
//! matches, a new hidden input is created under the first alias. For the five
//! per-key UTM fields the creation spelling is chosen by the configured
//! [`FieldProfile`], and the other two naming families stay accepted as
//! lookup aliases.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::UtmKey;
use crate::enums::FieldProfile;

/// Logical hidden fields, in the order the annotator plans them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    /// Page title (falling back to URL path) at annotation time.
    PageName,
    /// Guide/download name; present only per the download-field policy.
    GuideName,
    /// The session's write-once original source.
    SourceLink,
    /// The bundled UTM JSON string.
    UtmBundle,
    CampaignSource,
    CampaignMedium,
    CampaignName,
    CampaignTerm,
    CampaignContent,
    /// Session first-seen timestamp (timestamp stamping only).
    FirstSeen,
    /// Session last-seen timestamp, re-stamped at submit (timestamp stamping only).
    LastSeen,
}

impl FieldKey {
    /// All logical fields, in planning order.
    pub const ALL: [Self; 11] = [
        Self::PageName,
        Self::GuideName,
        Self::SourceLink,
        Self::UtmBundle,
        Self::CampaignSource,
        Self::CampaignMedium,
        Self::CampaignName,
        Self::CampaignTerm,
        Self::CampaignContent,
        Self::FirstSeen,
        Self::LastSeen,
    ];

    /// Accepted `name` attributes for this field, most-preferred first.
    /// The first alias is used when creating a missing input.
    #[must_use]
    pub const fn aliases(self, profile: FieldProfile) -> &'static [&'static str] {
        use FieldProfile::{CampaignKebab, CampaignSnake, RawUtm};
        match (self, profile) {
            (Self::PageName, _) => &["Page-Converted"],
            (Self::GuideName, _) => &["Download-Requested"],
            (Self::SourceLink, _) => &["Source-Link"],
            (Self::UtmBundle, _) => &["Campaign-Information"],

            (Self::CampaignSource, CampaignSnake) => {
                &["campaign_source", "utm_source", "Campaign-Source"]
            }
            (Self::CampaignSource, RawUtm) => {
                &["utm_source", "campaign_source", "Campaign-Source"]
            }
            (Self::CampaignSource, CampaignKebab) => {
                &["Campaign-Source", "campaign_source", "utm_source"]
            }

            (Self::CampaignMedium, CampaignSnake) => {
                &["campaign_medium", "utm_medium", "Campaign-Medium"]
            }
            (Self::CampaignMedium, RawUtm) => {
                &["utm_medium", "campaign_medium", "Campaign-Medium"]
            }
            (Self::CampaignMedium, CampaignKebab) => {
                &["Campaign-Medium", "campaign_medium", "utm_medium"]
            }

            (Self::CampaignName, CampaignSnake) => {
                &["campaign_name", "utm_campaign", "Campaign-Name"]
            }
            (Self::CampaignName, RawUtm) => &["utm_campaign", "campaign_name", "Campaign-Name"],
            (Self::CampaignName, CampaignKebab) => {
                &["Campaign-Name", "campaign_name", "utm_campaign"]
            }

            (Self::CampaignTerm, CampaignSnake) => &["campaign_term", "utm_term", "Campaign-Term"],
            (Self::CampaignTerm, RawUtm) => &["utm_term", "campaign_term", "Campaign-Term"],
            (Self::CampaignTerm, CampaignKebab) => &["Campaign-Term", "campaign_term", "utm_term"],

            (Self::CampaignContent, CampaignSnake) => {
                &["campaign_content", "utm_content", "Campaign-Content"]
            }
            (Self::CampaignContent, RawUtm) => {
                &["utm_content", "campaign_content", "Campaign-Content"]
            }
            (Self::CampaignContent, CampaignKebab) => {
                &["Campaign-Content", "campaign_content", "utm_content"]
            }

            (Self::FirstSeen, _) => &["first_seen_ts"],
            (Self::LastSeen, _) => &["last_seen_ts"],
        }
    }

    /// The `name` attribute a newly created input gets.
    #[must_use]
    pub const fn creation_name(self, profile: FieldProfile) -> &'static str {
        self.aliases(profile)[0]
    }

    /// The UTM key this field carries, for the five per-key fields.
    #[must_use]
    pub const fn utm_key(self) -> Option<UtmKey> {
        match self {
            Self::CampaignSource => Some(UtmKey::UtmSource),
            Self::CampaignMedium => Some(UtmKey::UtmMedium),
            Self::CampaignName => Some(UtmKey::UtmCampaign),
            Self::CampaignTerm => Some(UtmKey::UtmTerm),
            Self::CampaignContent => Some(UtmKey::UtmContent),
            _ => None,
        }
    }

    /// Whether this field is one of the session timestamp fields.
    #[must_use]
    pub const fn is_timestamp(self) -> bool {
        matches!(self, Self::FirstSeen | Self::LastSeen)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PageName => "page_name",
            Self::GuideName => "guide_name",
            Self::SourceLink => "source_link",
            Self::UtmBundle => "utm_bundle",
            Self::CampaignSource => "campaign_source",
            Self::CampaignMedium => "campaign_medium",
            Self::CampaignName => "campaign_name",
            Self::CampaignTerm => "campaign_term",
            Self::CampaignContent => "campaign_content",
            Self::FirstSeen => "first_seen",
            Self::LastSeen => "last_seen",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
