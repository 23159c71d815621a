//! Periodic tick scheduling.
//!
//! A [`TickTask`] is the cancellation handle for the session's 1 Hz tick:
//! holding it means the tick is scheduled, dropping it cancels it. Deadlines
//! are anchored to the start instant so they never drift.

use std::time::Duration;

/// Tick period in milliseconds (1 Hz).
pub const TICK_PERIOD_MILLIS: i64 = 1000;

/// A scheduled periodic tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickTask {
    anchor_millis: i64,
    period_millis: i64,
    next_due_millis: i64,
}

impl TickTask {
    /// Schedule a tick every `period_millis`, the first one a full period
    /// after `anchor_millis`.
    #[must_use]
    pub fn start(anchor_millis: i64, period_millis: i64) -> Self {
        let period_millis = period_millis.max(1);
        Self {
            anchor_millis,
            period_millis,
            next_due_millis: anchor_millis + period_millis,
        }
    }

    /// Schedule the standard 1 Hz tick.
    #[must_use]
    pub fn every_second(anchor_millis: i64) -> Self {
        Self::start(anchor_millis, TICK_PERIOD_MILLIS)
    }

    /// Report whether a tick is due at `now_millis`, advancing the deadline
    /// if so.
    ///
    /// Missed periods collapse into a single tick.
    pub fn poll(&mut self, now_millis: i64) -> bool {
        if now_millis < self.next_due_millis {
            return false;
        }
        let periods = (now_millis - self.anchor_millis) / self.period_millis;
        self.next_due_millis = self.anchor_millis + (periods + 1) * self.period_millis;
        true
    }

    /// Next deadline in epoch milliseconds.
    #[must_use]
    pub const fn next_due_millis(&self) -> i64 {
        self.next_due_millis
    }

    /// Time left until the next deadline (zero if already due).
    #[must_use]
    pub fn remaining(&self, now_millis: i64) -> Duration {
        let millis = self.next_due_millis.saturating_sub(now_millis).max(0);
        Duration::from_millis(u64::try_from(millis).unwrap_or(0))
    }
}
