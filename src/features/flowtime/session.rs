//! The flowtime session value.
//!
//! A [`Session`] is owned by the [`SessionClock`](super::SessionClock) and
//! lent to observers by reference; there is no ambient timer state.

use serde::{Deserialize, Serialize};

/// Work time is divided by this to get the recommended break.
pub const BREAK_DIVISOR: u64 = 5;

/// Recommended break for a stretch of work: `ceil(work_seconds / 5)`.
#[must_use]
pub const fn recommended_break(work_seconds: u64) -> u64 {
    work_seconds.div_ceil(BREAK_DIVISOR)
}

/// Whole seconds between two epoch-millisecond instants, floored.
///
/// A negative delta (wall clock stepped backwards) counts as zero.
#[must_use]
pub fn elapsed_seconds_between(started_at_millis: i64, now_millis: i64) -> u64 {
    u64::try_from(now_millis.saturating_sub(started_at_millis) / 1000).unwrap_or(0)
}

/// Where the session is in the work/break cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Nothing is being timed.
    #[default]
    Idle,
    /// A work stretch is being timed.
    Working,
    /// A break is being timed.
    OnBreak,
}

impl SessionState {
    /// Short label for the "current session" field.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Idle => "-",
            Self::Working => "Work",
            Self::OnBreak => "Break",
        }
    }

    /// Whether a timer is running in this state.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Working => write!(f, "working"),
            Self::OnBreak => write!(f, "on a break"),
        }
    }
}

/// A single work/break session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    state: SessionState,
    task_label: Option<String>,
    started_at_millis: Option<i64>,
    elapsed_seconds: u64,
    last_work_duration_seconds: u64,
    recommended_break_seconds: u64,
}

impl Session {
    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Label of the task being worked on, if a work stretch was started.
    #[must_use]
    pub fn task_label(&self) -> Option<&str> {
        self.task_label.as_deref()
    }

    /// When the running stretch started, in epoch milliseconds.
    #[must_use]
    pub const fn started_at_millis(&self) -> Option<i64> {
        self.started_at_millis
    }

    /// Seconds elapsed in the running stretch (0 while idle).
    #[must_use]
    pub const fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Length of the most recently finished work stretch.
    #[must_use]
    pub const fn last_work_duration_seconds(&self) -> u64 {
        self.last_work_duration_seconds
    }

    /// Recommended break: a live preview while working, the captured value
    /// once on a break.
    #[must_use]
    pub const fn recommended_break_seconds(&self) -> u64 {
        self.recommended_break_seconds
    }

    pub(crate) fn begin_work(&mut self, label: String, now_millis: i64) {
        self.state = SessionState::Working;
        self.task_label = Some(label);
        self.started_at_millis = Some(now_millis);
        self.elapsed_seconds = 0;
        self.recommended_break_seconds = 0;
    }

    /// Recompute elapsed time from the start timestamp.
    pub(crate) fn refresh(&mut self, now_millis: i64) {
        let Some(started) = self.started_at_millis else {
            return;
        };
        self.elapsed_seconds = elapsed_seconds_between(started, now_millis);
        if self.state == SessionState::Working {
            self.recommended_break_seconds = recommended_break(self.elapsed_seconds);
        }
    }

    pub(crate) fn begin_break(&mut self, now_millis: i64) {
        self.refresh(now_millis);
        self.last_work_duration_seconds = self.elapsed_seconds;
        self.recommended_break_seconds = recommended_break(self.last_work_duration_seconds);
        self.started_at_millis = Some(now_millis);
        self.elapsed_seconds = 0;
        self.state = SessionState::OnBreak;
    }

    pub(crate) fn end(&mut self, now_millis: i64) {
        self.refresh(now_millis);
        if self.state == SessionState::Working {
            self.last_work_duration_seconds = self.elapsed_seconds;
        }
        self.state = SessionState::Idle;
        self.started_at_millis = None;
        self.elapsed_seconds = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommended_break_rounds_up() {
        assert_eq!(recommended_break(0), 0);
        assert_eq!(recommended_break(1), 1);
        assert_eq!(recommended_break(5), 1);
        assert_eq!(recommended_break(25), 5);
        assert_eq!(recommended_break(26), 6);
        assert_eq!(recommended_break(130), 26);
    }

    #[test]
    fn test_elapsed_seconds_floors() {
        assert_eq!(elapsed_seconds_between(0, 999), 0);
        assert_eq!(elapsed_seconds_between(0, 1_000), 1);
        assert_eq!(elapsed_seconds_between(500, 2_499), 1);
        assert_eq!(elapsed_seconds_between(10_000, 9_000), 0);
    }

    #[test]
    fn test_default_session_is_idle() {
        let session = Session::default();
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.elapsed_seconds(), 0);
        assert!(session.task_label().is_none());
        assert!(session.started_at_millis().is_none());
    }

    #[test]
    fn test_refresh_updates_live_preview_only_while_working() {
        let mut session = Session::default();
        session.begin_work("Write report".to_string(), 0);
        session.refresh(26_000);
        assert_eq!(session.elapsed_seconds(), 26);
        assert_eq!(session.recommended_break_seconds(), 6);

        session.begin_break(26_000);
        session.refresh(40_000);
        assert_eq!(session.elapsed_seconds(), 14);
        assert_eq!(session.recommended_break_seconds(), 6);
    }

    #[test]
    fn test_end_keeps_last_work_duration() {
        let mut session = Session::default();
        session.begin_work("Email".to_string(), 1_000);
        session.end(61_500);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.last_work_duration_seconds(), 60);
        assert_eq!(session.elapsed_seconds(), 0);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(SessionState::Idle.to_string(), "idle");
        assert_eq!(SessionState::OnBreak.to_string(), "on a break");
        assert_eq!(SessionState::Working.display_name(), "Work");
    }
}
