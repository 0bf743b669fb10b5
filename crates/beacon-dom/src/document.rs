//! The document: page URL, title, referrer, and the form arena.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Form, MutationBatch, PageUrl};

/// Stable handle to a form within one document.
///
/// Ids survive node moves: re-inserting an existing form re-queues its id in
/// a mutation batch but never allocates a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormId(usize);

impl FormId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "form-{}", self.0)
    }
}

/// One loaded page: ambient state plus forms.
#[derive(Debug, Clone)]
pub struct Document {
    url: PageUrl,
    title: String,
    referrer: Option<String>,
    forms: Vec<Form>,
    pending: Vec<MutationBatch>,
}

impl Document {
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            url: PageUrl::parse(url),
            title: String::new(),
            referrer: None,
            forms: Vec::new(),
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Builder-style referrer; an empty referrer normalizes to absent,
    /// matching `document.referrer || location.href`.
    #[must_use]
    pub fn with_referrer(mut self, referrer: &str) -> Self {
        self.referrer = (!referrer.is_empty()).then(|| referrer.to_string());
        self
    }

    #[must_use]
    pub const fn url(&self) -> &PageUrl {
        &self.url
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    #[must_use]
    pub fn referrer(&self) -> Option<&str> {
        self.referrer.as_deref()
    }

    /// Add a form that is part of the initial page markup.
    pub fn add_form(&mut self, form: Form) -> FormId {
        self.forms.push(form);
        FormId(self.forms.len() - 1)
    }

    /// Insert a form after the initial load, queueing a mutation batch.
    pub fn insert_form(&mut self, form: Form) -> FormId {
        let id = self.add_form(form);
        self.pending.push(MutationBatch::new(vec![id]));
        id
    }

    /// Model moving an existing form within the page: the node is unchanged
    /// (markers included) but the observer sees it inserted again.
    pub fn reinsert_form(&mut self, id: FormId) {
        self.pending.push(MutationBatch::new(vec![id]));
    }

    #[must_use]
    pub fn form(&self, id: FormId) -> Option<&Form> {
        self.forms.get(id.0)
    }

    pub fn form_mut(&mut self, id: FormId) -> Option<&mut Form> {
        self.forms.get_mut(id.0)
    }

    /// All form ids, in document order.
    #[must_use]
    pub fn form_ids(&self) -> Vec<FormId> {
        (0..self.forms.len()).map(FormId).collect()
    }

    pub fn forms(&self) -> impl Iterator<Item = (FormId, &Form)> {
        self.forms.iter().enumerate().map(|(i, f)| (FormId(i), f))
    }

    /// Drain the queued mutation batches. The stream is finite and not
    /// restartable; batches are delivered at most once.
    pub fn take_mutations(&mut self) -> Vec<MutationBatch> {
        std::mem::take(&mut self.pending)
    }
}
