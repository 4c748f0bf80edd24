//! Time sources for scan events
//!
//! Checkpoint timestamps come from an injected [`Clock`] rather than from
//! `Utc::now()` directly, so that tests can drive time deterministically
//! (including stepping it backwards to exercise monotonicity guards).

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

/// A source of capture times
pub trait Clock: Send + Sync + 'static {
    /// Returns the current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A manually driven clock for tests and simulations
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Creates a clock frozen at `start`
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    /// Moves the clock by `delta` (may be negative)
    pub fn advance(&self, delta: Duration) {
        let mut current = self.current.lock();
        *current += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock()
    }
}
