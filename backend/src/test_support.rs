//! Test utilities for the backend crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`,
//! through the `test-support` feature).

use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

/// Fixed instant used by deterministic clocks.
pub fn fixture_timestamp() -> DateTime<Utc> {
    match Utc.with_ymd_and_hms(2026, 2, 24, 10, 30, 0).single() {
        Some(timestamp) => timestamp,
        None => panic!("tracker fixture timestamp must be unambiguous"),
    }
}

/// Clock for task timestamps that only moves when a test advances it.
pub struct MutableClock {
    now: RwLock<DateTime<Utc>>,
}

impl MutableClock {
    /// Start the clock at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Start the clock at [`fixture_timestamp`].
    pub fn at_fixture() -> Self {
        Self::new(fixture_timestamp())
    }

    /// Move the clock forward by `delta`.
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.write().unwrap_or_else(PoisonError::into_inner);
        *now += delta;
    }

    /// Move the clock forward by whole seconds.
    pub fn advance_seconds(&self, seconds: i64) {
        self.advance(TimeDelta::seconds(seconds));
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.read().unwrap_or_else(PoisonError::into_inner)
    }
}
