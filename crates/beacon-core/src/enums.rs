//! Policy enums and the per-form annotation state machine for Beacon.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `FormPhase` provides `allowed_next_states()` to enforce valid transitions at
//! the application layer; the remaining enums are pure configuration policies.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// OverwritePolicy
// ---------------------------------------------------------------------------

/// How captured UTM values interact with values already in the session.
///
/// The two policies resolve the same question differently:
/// - `SessionSticky`: first URL wins; a key already in the session is never
///   overwritten by a later page load.
/// - `LastSeen`: every load whose URL carries UTM parameters rewrites the
///   stored values; a UTM-less load writes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OverwritePolicy {
    SessionSticky,
    LastSeen,
}

impl OverwritePolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SessionSticky => "session_sticky",
            Self::LastSeen => "last_seen",
        }
    }
}

impl fmt::Display for OverwritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ExtractMode
// ---------------------------------------------------------------------------

/// Shape of the mapping produced by the query-string extractor.
///
/// - `Sparse`: only keys literally present in the query string (partial
///   mapping).
/// - `Dense`: all five recognized keys, absent ones as empty strings (total
///   mapping).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExtractMode {
    Sparse,
    Dense,
}

impl ExtractMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sparse => "sparse",
            Self::Dense => "dense",
        }
    }
}

impl fmt::Display for ExtractMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DownloadFieldPolicy
// ---------------------------------------------------------------------------

/// What happens to the download/guide field on pages outside the content
/// section.
///
/// - `OmitOffContent`: the field is only created and populated when the URL
///   path contains the content segment; elsewhere it is left entirely absent.
/// - `RemoveOffContent`: the field is populated on content pages and an
///   existing field is actively removed elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DownloadFieldPolicy {
    OmitOffContent,
    RemoveOffContent,
}

impl DownloadFieldPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OmitOffContent => "omit_off_content",
            Self::RemoveOffContent => "remove_off_content",
        }
    }
}

impl fmt::Display for DownloadFieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FieldProfile
// ---------------------------------------------------------------------------

/// Naming family used when creating the per-key UTM hidden fields.
///
/// All three families are accepted when looking up an existing input; the
/// profile only decides which spelling a newly created input gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldProfile {
    /// `campaign_source`, `campaign_medium`, `campaign_name`, ...
    CampaignSnake,
    /// The raw query-string spellings: `utm_source`, `utm_medium`, ...
    RawUtm,
    /// `Campaign-Source`, `Campaign-Medium`, `Campaign-Name`, ...
    CampaignKebab,
}

impl FieldProfile {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CampaignSnake => "campaign_snake",
            Self::RawUtm => "raw_utm",
            Self::CampaignKebab => "campaign_kebab",
        }
    }
}

impl fmt::Display for FieldProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FieldAction
// ---------------------------------------------------------------------------

/// Outcome of planning one logical field against one form.
///
/// Every annotation decision is expressed as exactly one of these four, so
/// callers and tests can enumerate the full outcome space instead of
/// branching ad hoc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldAction {
    /// No matching input exists; append a new hidden input.
    Create,
    /// A matching input exists; overwrite its value in place.
    Update,
    /// A matching input exists but must not on this page; remove it.
    Remove,
    /// Nothing to do for this field on this page.
    Skip,
}

impl FieldAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Remove => "remove",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for FieldAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FormPhase
// ---------------------------------------------------------------------------

/// Annotation lifecycle of a single form.
///
/// ```text
/// unseen → annotated → re_annotated → re_annotated (every submit)
/// ```
///
/// There is no terminal state; a form may be re-annotated arbitrarily many
/// times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    #[default]
    Unseen,
    Annotated,
    ReAnnotated,
}

impl FormPhase {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Unseen => &[Self::Annotated],
            Self::Annotated | Self::ReAnnotated => &[Self::ReAnnotated],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unseen => "unseen",
            Self::Annotated => "annotated",
            Self::ReAnnotated => "re_annotated",
        }
    }
}

impl fmt::Display for FormPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
