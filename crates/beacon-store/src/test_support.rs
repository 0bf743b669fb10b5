//! Shared test fixtures for store behavior.
//!
//! Public (not `cfg(test)`) so integration tests and downstream crates can
//! exercise degraded-storage paths.

use crate::{MemoryStore, SessionStore, StoreError};

/// An in-memory store whose writes can be made to fail on demand.
#[derive(Debug, Default)]
pub struct FaultyStore {
    inner: MemoryStore,
    fail_writes: bool,
}

impl FaultyStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail (or succeed again).
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl SessionStore for FaultyStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Unavailable("quota exceeded".to_string()));
        }
        self.inner.set(key, value)
    }

    fn has(&self, key: &str) -> bool {
        self.inner.has(key)
    }

    fn remove(&mut self, key: &str) {
        self.inner.remove(key);
    }
}
