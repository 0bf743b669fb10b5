//! Fault-degrading store wrapper.
//!
//! Browser session storage can be unavailable (private browsing, quota).
//! Capture is best-effort enrichment and must never block the page, so the
//! first failed write flips the wrapper into in-memory-only operation for
//! the rest of the page view. Values written to the primary before the
//! fault remain readable.

use crate::{MemoryStore, SessionStore, StoreError};

/// Wraps a fallible primary store with an in-memory overlay.
///
/// Until the first `set` failure every operation goes to the primary. After
/// it, writes land in the overlay and reads consult the overlay first, so a
/// write-then-read in the same page view still round-trips.
#[derive(Debug)]
pub struct DegradingStore<S> {
    primary: S,
    overlay: MemoryStore,
    degraded: bool,
}

impl<S: SessionStore> DegradingStore<S> {
    #[must_use]
    pub fn new(primary: S) -> Self {
        Self {
            primary,
            overlay: MemoryStore::new(),
            degraded: false,
        }
    }

    /// Whether a write failure has switched this store to in-memory-only.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// The wrapped primary store.
    pub const fn primary(&self) -> &S {
        &self.primary
    }

    /// Unwrap back into the primary store.
    pub fn into_primary(self) -> S {
        self.primary
    }
}

impl<S: SessionStore> SessionStore for DegradingStore<S> {
    fn get(&self, key: &str) -> Option<String> {
        if self.degraded {
            self.overlay.get(key).or_else(|| self.primary.get(key))
        } else {
            self.primary.get(key)
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.degraded {
            return self.overlay.set(key, value);
        }
        match self.primary.set(key, value) {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::warn!("Session storage write failed, degrading to memory: {e}");
                self.degraded = true;
                self.overlay.set(key, value)
            }
        }
    }

    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn remove(&mut self, key: &str) {
        self.overlay.remove(key);
        self.primary.remove(key);
    }
}
