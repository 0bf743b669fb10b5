//! # beacon-dom
//!
//! Headless stand-ins for the ambient browser state the capture logic reads
//! and mutates: the page URL (path and query string), the document with its
//! forms, hidden inputs, and a queue of mutation batches for forms inserted
//! after the initial load.
//!
//! Everything here is plain owned state, with no browser and no event loop, so the
//! annotation logic can be driven and inspected directly in tests.

mod document;
mod form;
mod mutation;
mod url;

pub use document::{Document, FormId};
pub use form::{Field, Form};
pub use mutation::MutationBatch;
pub use url::PageUrl;
