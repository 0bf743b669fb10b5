//! The time source seam.

use chrono::{DateTime, Utc};

/// Where the engine reads "now" from.
///
/// Timestamps must be orderable in tests (two submits produce strictly
/// increasing `last_seen_ts` values), so the wall clock is injected rather
/// than read ambiently.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
