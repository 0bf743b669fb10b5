//! Form elements and their input fields.

use beacon_core::enums::FormPhase;

/// One input element within a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub hidden: bool,
}

/// A form element: its inputs plus the per-form annotation markers.
///
/// The markers make annotation idempotent: `phase` records where the form is
/// in its `unseen → annotated → re_annotated` lifecycle, and `submit_hooked`
/// guarantees the submit handler attaches at most once even when the form is
/// rediscovered (e.g. after being moved within the page).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: Vec<Field>,
    /// Annotation lifecycle marker.
    pub phase: FormPhase,
    submit_hooked: bool,
}

impl Form {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style visible field, for assembling page markup in tests.
    #[must_use]
    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.push(Field {
            name: name.to_string(),
            value: value.to_string(),
            hidden: false,
        });
        self
    }

    /// Builder-style hidden field.
    #[must_use]
    pub fn with_hidden_field(mut self, name: &str, value: &str) -> Self {
        self.fields.push(Field {
            name: name.to_string(),
            value: value.to_string(),
            hidden: true,
        });
        self
    }

    /// All inputs in document order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The first input named `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// The first alias with a matching input, in alias order.
    #[must_use]
    pub fn find_alias<'a>(&self, aliases: &[&'a str]) -> Option<&'a str> {
        aliases.iter().copied().find(|name| self.has_field(name))
    }

    /// Overwrite the value of the first input named `name`.
    /// Returns `false` when no such input exists.
    pub fn set_field_value(&mut self, name: &str, value: &str) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Append a new hidden input.
    pub fn append_hidden(&mut self, name: &str, value: &str) {
        self.fields.push(Field {
            name: name.to_string(),
            value: value.to_string(),
            hidden: true,
        });
    }

    /// Remove every input named `name`. Returns `true` if any was removed.
    pub fn remove_field(&mut self, name: &str) -> bool {
        let before = self.fields.len();
        self.fields.retain(|f| f.name != name);
        self.fields.len() != before
    }

    /// Whether this form has been annotated at least once.
    #[must_use]
    pub fn is_annotated(&self) -> bool {
        self.phase != FormPhase::Unseen
    }

    /// Attach the submit handler. Returns `true` only on first attachment.
    pub fn hook_submit(&mut self) -> bool {
        if self.submit_hooked {
            return false;
        }
        self.submit_hooked = true;
        true
    }

    /// Whether the submit handler is attached.
    #[must_use]
    pub const fn is_submit_hooked(&self) -> bool {
        self.submit_hooked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_alias_respects_alias_order() {
        let form = Form::new()
            .with_hidden_field("utm_source", "a")
            .with_hidden_field("campaign_source", "b");
        assert_eq!(
            form.find_alias(&["campaign_source", "utm_source"]),
            Some("campaign_source")
        );
        assert_eq!(form.find_alias(&["Campaign-Source"]), None);
    }

    #[test]
    fn set_field_value_overwrites_in_place() {
        let mut form = Form::new().with_hidden_field("Source-Link", "old");
        assert!(form.set_field_value("Source-Link", "new"));
        assert_eq!(form.field("Source-Link").unwrap().value, "new");
        assert_eq!(form.fields().len(), 1);
    }

    #[test]
    fn append_hidden_appends_at_the_end() {
        let mut form = Form::new().with_field("email", "a@b.example");
        form.append_hidden("Page-Converted", "Home");
        let last = form.fields().last().unwrap();
        assert_eq!(last.name, "Page-Converted");
        assert!(last.hidden);
        assert!(!form.fields()[0].hidden);
    }

    #[test]
    fn remove_field_removes_all_matches() {
        let mut form = Form::new()
            .with_hidden_field("Download-Requested", "x")
            .with_hidden_field("Download-Requested", "y");
        assert!(form.remove_field("Download-Requested"));
        assert!(!form.remove_field("Download-Requested"));
        assert!(form.fields().is_empty());
    }

    #[test]
    fn submit_hook_attaches_once() {
        let mut form = Form::new();
        assert!(form.hook_submit());
        assert!(!form.hook_submit());
        assert!(form.is_submit_hooked());
    }

    #[test]
    fn fresh_forms_are_unannotated() {
        let mut form = Form::new();
        assert!(!form.is_annotated());
        form.phase = FormPhase::Annotated;
        assert!(form.is_annotated());
    }
}
