//! # beacon-store
//!
//! The session-scoped key-value store Beacon captures into, modeled as an
//! injected dependency so the capture and annotation logic is testable
//! without a real browser environment.
//!
//! - [`SessionStore`]: the storage seam (`get`/`set`/`has`/`remove`)
//! - [`MemoryStore`]: infallible in-memory implementation
//! - [`DegradingStore`]: wraps a fallible primary; on the first write
//!   failure it degrades to in-memory-only operation for the rest of the
//!   page view instead of surfacing the fault
//! - [`bundle`]: the JSON bundle codec, where malformed stored JSON decodes
//!   to the empty mapping
//! - [`writer`]: write-once session initializers and the two UTM overwrite
//!   policies

pub mod bundle;
mod degrading;
mod error;
mod memory;
pub mod test_support;
pub mod writer;

pub use degrading::DegradingStore;
pub use error::StoreError;
pub use memory::MemoryStore;

/// Session-scoped key-value storage, visible to every script in the tab.
///
/// Keys and values are plain strings, mirroring browser session storage.
/// Reads are infallible (an unreadable store reads as empty); only writes
/// can fail.
pub trait SessionStore {
    /// The stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage rejects the write
    /// (unavailable, quota exceeded).
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Whether `key` currently holds a value.
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key` if present.
    fn remove(&mut self, key: &str);
}
