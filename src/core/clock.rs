//! Wall-clock sources.
//!
//! The session clock never reads the system time directly; it asks a [`Clock`]
//! so tests can drive time by hand.

use std::cell::Cell;
use std::rc::Rc;

use chrono::Utc;

/// A source of wall-clock time in milliseconds since the Unix epoch.
pub trait Clock {
    /// Current time in epoch milliseconds.
    fn now_millis(&self) -> i64;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A hand-driven clock.
///
/// Clones share the same instant, so a test can keep one handle and give the
/// other to the code under test.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    /// Create a clock frozen at `start_millis`.
    #[must_use]
    pub fn new(start_millis: i64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_millis)),
        }
    }

    /// Move the clock forward (or backward, for negative values).
    pub fn advance_millis(&self, delta: i64) {
        self.now.set(self.now.get() + delta);
    }

    /// Move the clock forward by whole seconds.
    pub fn advance_secs(&self, secs: i64) {
        self.advance_millis(secs * 1000);
    }

    /// Jump to an absolute instant.
    pub fn set_millis(&self, millis: i64) {
        self.now.set(millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}
