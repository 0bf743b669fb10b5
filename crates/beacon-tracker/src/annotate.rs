//! Hidden-field planning and application.
//!
//! Annotation is split in two: [`plan_form`] decides, for every logical
//! field, which [`FieldAction`] applies and with what value; [`apply_plan`]
//! executes the decisions against the form. The split keeps every outcome
//! (`create`/`update`/`remove`/`skip`) enumerable and inspectable.

use serde::Serialize;

use beacon_config::AnnotateConfig;
use beacon_core::enums::{DownloadFieldPolicy, FieldAction};
use beacon_core::fields::FieldKey;
use beacon_core::keys;
use beacon_dom::{Document, Form};
use beacon_store::{SessionStore, writer};

/// One planned decision: what to do about one logical field on one form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedField {
    pub field: FieldKey,
    pub action: FieldAction,
    /// The input `name` attribute targeted by `action` (absent for `skip`).
    pub name: Option<&'static str>,
    /// The value to write (absent for `remove` and `skip`).
    pub value: Option<String>,
}

/// Plan every logical field for one form against the current page and
/// session state.
pub fn plan_form<S: SessionStore>(
    form: &Form,
    doc: &Document,
    store: &S,
    cfg: &AnnotateConfig,
) -> Vec<PlannedField> {
    let page_name = page_name(doc);
    let on_content = doc.url().path_contains(&cfg.content_segment);
    let utm = writer::stored_utm(store);

    FieldKey::ALL
        .iter()
        .map(|&field| {
            let value = match field {
                FieldKey::PageName => Some(page_name.clone()),
                FieldKey::GuideName => {
                    if on_content {
                        Some(page_name.clone())
                    } else {
                        return off_content_guide(form, cfg, field);
                    }
                }
                FieldKey::SourceLink => {
                    Some(store.get(keys::ORIGINAL_SOURCE).unwrap_or_default())
                }
                FieldKey::UtmBundle => Some(store.get(keys::UTM_BUNDLE).unwrap_or_default()),
                FieldKey::FirstSeen => {
                    if !cfg.stamp_timestamps {
                        return skip(field);
                    }
                    Some(store.get(keys::FIRST_SEEN).unwrap_or_default())
                }
                FieldKey::LastSeen => {
                    if !cfg.stamp_timestamps {
                        return skip(field);
                    }
                    Some(store.get(keys::LAST_SEEN).unwrap_or_default())
                }
                _ => field
                    .utm_key()
                    .map(|key| utm.value_or_default(key).to_string()),
            };

            let Some(value) = value else {
                return skip(field);
            };

            let aliases = field.aliases(cfg.field_profile);
            match form.find_alias(aliases) {
                Some(found) => PlannedField {
                    field,
                    action: FieldAction::Update,
                    name: Some(found),
                    value: Some(value),
                },
                None => PlannedField {
                    field,
                    action: FieldAction::Create,
                    name: Some(field.creation_name(cfg.field_profile)),
                    value: Some(value),
                },
            }
        })
        .collect()
}

/// Execute a plan against the form: overwrite found inputs in place, append
/// missing ones as hidden inputs, remove what must not be present.
pub fn apply_plan(form: &mut Form, plan: &[PlannedField]) {
    for planned in plan {
        match planned.action {
            FieldAction::Create => {
                if let (Some(name), Some(value)) = (planned.name, planned.value.as_deref()) {
                    form.append_hidden(name, value);
                }
            }
            FieldAction::Update => {
                if let (Some(name), Some(value)) = (planned.name, planned.value.as_deref()) {
                    form.set_field_value(name, value);
                }
            }
            FieldAction::Remove => {
                if let Some(name) = planned.name {
                    form.remove_field(name);
                }
            }
            FieldAction::Skip => {}
        }
    }
}

/// Page title, falling back to the URL path when the title is empty.
fn page_name(doc: &Document) -> String {
    if doc.title().is_empty() {
        doc.url().path().to_string()
    } else {
        doc.title().to_string()
    }
}

/// The guide field off content pages: omitted entirely, or actively removed.
fn off_content_guide(form: &Form, cfg: &AnnotateConfig, field: FieldKey) -> PlannedField {
    match cfg.download_field {
        DownloadFieldPolicy::OmitOffContent => skip(field),
        DownloadFieldPolicy::RemoveOffContent => {
            match form.find_alias(field.aliases(cfg.field_profile)) {
                Some(found) => PlannedField {
                    field,
                    action: FieldAction::Remove,
                    name: Some(found),
                    value: None,
                },
                None => skip(field),
            }
        }
    }
}

const fn skip(field: FieldKey) -> PlannedField {
    PlannedField {
        field,
        action: FieldAction::Skip,
        name: None,
        value: None,
    }
}
