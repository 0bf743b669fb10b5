//! The engine tying capture and annotation together.

use beacon_config::BeaconConfig;
use beacon_core::entities::AttributionRecord;
use beacon_core::enums::FormPhase;
use beacon_core::errors::CoreError;
use beacon_dom::{Document, FormId};
use beacon_store::{SessionStore, writer};

use crate::annotate::{self, PlannedField};
use crate::clock::{Clock, SystemClock};
use crate::error::TrackerError;
use crate::extract;

/// Attribution capture and form annotation for one browser session.
///
/// The store outlives any single page: drive one `Tracker` across several
/// [`Document`]s to model navigation within a session, or recover the store
/// with [`Tracker::into_store`] and hand it to the next page's tracker.
///
/// Per page view the protocol is, in order:
/// 1. session initializers (original source, first-seen timestamp)
/// 2. parameter extraction from the page URL
/// 3. persistence under the configured overwrite policy
/// 4. annotation of every form on the page
///
/// [`Tracker::observe`] and [`Tracker::submit`] then keep late-inserted and
/// submitting forms current.
pub struct Tracker<S, C = SystemClock> {
    config: BeaconConfig,
    store: S,
    clock: C,
}

impl<S: SessionStore> Tracker<S> {
    /// A tracker on the real wall clock.
    pub fn new(config: BeaconConfig, store: S) -> Self {
        Self::with_clock(config, store, SystemClock)
    }
}

impl<S: SessionStore, C: Clock> Tracker<S, C> {
    pub fn with_clock(config: BeaconConfig, store: S, clock: C) -> Self {
        Self {
            config,
            store,
            clock,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &BeaconConfig {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Recover the session store, e.g. to carry it into the next page view.
    pub fn into_store(self) -> S {
        self.store
    }

    /// The assembled attribution read model.
    #[must_use]
    pub fn record(&self) -> AttributionRecord {
        writer::read_record(&self.store)
    }

    /// Run the page-load protocol: initialize the session, capture UTM
    /// parameters, and annotate every form currently in the document.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError` if a session store write fails.
    pub fn page_load(&mut self, doc: &mut Document) -> Result<(), TrackerError> {
        writer::ensure_original_source(&mut self.store, doc.referrer(), doc.url().as_str())?;
        if self.config.annotate.stamp_timestamps {
            writer::ensure_first_seen(&mut self.store, self.clock.now())?;
        }

        let extracted = extract::extract(doc.url(), self.config.capture.extract_mode);
        writer::persist_utm(
            &mut self.store,
            &extracted,
            extract::url_carries_utm(doc.url()),
            self.config.capture.overwrite_policy,
        )?;

        let ids = doc.form_ids();
        for id in &ids {
            self.annotate_form(doc, *id)?;
        }
        tracing::debug!(forms = ids.len(), url = %doc.url(), "Page load processed");
        Ok(())
    }

    /// Annotate one form from current session state and attach its submit
    /// handler. Idempotent: re-running refreshes values and never
    /// double-attaches the handler.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::UnknownForm` if `id` does not resolve.
    pub fn annotate_form(
        &mut self,
        doc: &mut Document,
        id: FormId,
    ) -> Result<Vec<PlannedField>, TrackerError> {
        let form = doc.form(id).ok_or(TrackerError::UnknownForm(id))?;
        let plan = annotate::plan_form(form, doc, &self.store, &self.config.annotate);

        let form = doc.form_mut(id).ok_or(TrackerError::UnknownForm(id))?;
        annotate::apply_plan(form, &plan);
        if !form.is_annotated() {
            form.phase = FormPhase::Annotated;
        }
        form.hook_submit();
        Ok(plan)
    }

    /// Drain queued mutation batches and annotate forms not seen before.
    /// Re-delivered forms (node moves) are left untouched. Returns how many
    /// forms were newly annotated.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::UnknownForm` if a batch references a form that
    /// does not resolve.
    pub fn observe(&mut self, doc: &mut Document) -> Result<usize, TrackerError> {
        let mut newly_annotated = 0;
        for batch in doc.take_mutations() {
            for id in batch.added {
                let form = doc.form(id).ok_or(TrackerError::UnknownForm(id))?;
                if !form.is_annotated() {
                    self.annotate_form(doc, id)?;
                    newly_annotated += 1;
                }
            }
        }
        if newly_annotated > 0 {
            tracing::debug!(forms = newly_annotated, "Annotated inserted forms");
        }
        Ok(newly_annotated)
    }

    /// Run the submit-time protocol for one form: re-stamp the last-seen
    /// timestamp to the submit instant, then re-annotate so the serialized
    /// values reflect the latest session state.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::UnknownForm` for an unresolvable id, and a
    /// transition error for a form the engine never annotated (its submit
    /// handler was never attached).
    pub fn submit(
        &mut self,
        doc: &mut Document,
        id: FormId,
    ) -> Result<Vec<PlannedField>, TrackerError> {
        let form = doc.form(id).ok_or(TrackerError::UnknownForm(id))?;
        let from = form.phase;
        if !from.can_transition_to(FormPhase::ReAnnotated) {
            return Err(CoreError::InvalidTransition {
                form: id.index(),
                from: from.to_string(),
                to: FormPhase::ReAnnotated.to_string(),
            }
            .into());
        }

        if self.config.annotate.stamp_timestamps {
            writer::stamp_last_seen(&mut self.store, self.clock.now())?;
        }

        let plan = self.annotate_form(doc, id)?;
        if let Some(form) = doc.form_mut(id) {
            form.phase = FormPhase::ReAnnotated;
        }
        tracing::debug!(form = %id, "Form re-annotated at submit");
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_dom::Form;
    use beacon_store::MemoryStore;

    fn tracker() -> Tracker<MemoryStore> {
        Tracker::new(BeaconConfig::default(), MemoryStore::new())
    }

    #[test]
    fn submitting_an_unseen_form_is_a_transition_error() {
        let mut doc = Document::new("https://site.example/");
        let id = doc.add_form(Form::new());

        let mut t = tracker();
        let err = t.submit(&mut doc, id).unwrap_err();
        assert!(matches!(err, TrackerError::Core(_)));
    }

    #[test]
    fn unknown_form_id_is_reported() {
        let mut doc = Document::new("https://site.example/");
        let id = doc.add_form(Form::new());
        let mut other = Document::new("https://site.example/");

        let mut t = tracker();
        t.page_load(&mut other).unwrap();
        let err = t.annotate_form(&mut other, id).unwrap_err();
        assert!(matches!(err, TrackerError::UnknownForm(_)));
    }

    #[test]
    fn annotation_advances_phase_once() {
        let mut doc = Document::new("https://site.example/");
        let id = doc.add_form(Form::new());

        let mut t = tracker();
        t.annotate_form(&mut doc, id).unwrap();
        assert_eq!(doc.form(id).unwrap().phase, FormPhase::Annotated);

        // Re-annotation refreshes values but does not move the phase.
        t.annotate_form(&mut doc, id).unwrap();
        assert_eq!(doc.form(id).unwrap().phase, FormPhase::Annotated);
    }
}
