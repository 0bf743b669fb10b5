//! # beacon-tracker
//!
//! The attribution engine: one page view at a time, it records where the
//! visitor came from, captures UTM query parameters into the session store,
//! and keeps every form's hidden attribution fields current, including
//! forms inserted after the initial load and re-annotation at submit time.
//!
//! Execution is single-threaded and event-driven, mirroring the browser
//! page lifecycle: [`Tracker::page_load`] runs once per page view,
//! [`Tracker::observe`] reacts to DOM insertions, and [`Tracker::submit`]
//! runs synchronously before a form's default submission proceeds.

mod annotate;
mod clock;
mod error;
mod extract;
mod tracker;
pub mod test_support;

pub use annotate::{PlannedField, apply_plan, plan_form};
pub use clock::{Clock, SystemClock};
pub use error::TrackerError;
pub use extract::{extract, url_carries_utm};
pub use tracker::Tracker;
