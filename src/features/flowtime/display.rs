//! Text shown by a display surface for a session.

use serde::Serialize;

use super::session::{recommended_break, Session, SessionState};
use crate::core::format_time;

/// Window/terminal title when no timer runs.
pub const APP_TITLE: &str = "Flowtime Timer";

/// Every string a display surface needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySnapshot {
    /// Elapsed time of the running stretch, `HH:MM:SS`.
    pub timer: String,
    /// Status line.
    pub status: String,
    /// "Work", "Break" or "-".
    pub current_session: String,
    /// Length of the last finished work stretch.
    pub work_duration: String,
    /// Recommended break (live while working).
    pub break_time: String,
    /// Title for the window or terminal.
    pub title: String,
    /// Hint shown next to the break control while working.
    pub break_hint: Option<String>,
}

impl DisplaySnapshot {
    /// Project a session onto display strings.
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let timer = format_time(session.elapsed_seconds());
        let break_time = format_time(session.recommended_break_seconds());

        let status = match session.state() {
            SessionState::Idle => "Ready to start".to_string(),
            SessionState::Working => {
                format!("Working on: {}", session.task_label().unwrap_or_default())
            }
            SessionState::OnBreak => format!("Taking a break ({break_time} recommended)"),
        };

        let title = if session.state().is_active() {
            format!("({timer}) {APP_TITLE}")
        } else {
            APP_TITLE.to_string()
        };

        let break_hint =
            (session.state() == SessionState::Working).then(|| format!("({break_time})"));

        Self {
            status,
            current_session: session.state().display_name().to_string(),
            work_duration: format_time(session.last_work_duration_seconds()),
            title,
            break_hint,
            break_time,
            timer,
        }
    }
}

/// Work time paired with the break it earns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakRecommendation {
    /// Work time in seconds.
    pub work_seconds: u64,
    /// Recommended break in seconds.
    pub break_seconds: u64,
    /// Work time, `HH:MM:SS`.
    pub work: String,
    /// Recommended break, `HH:MM:SS`.
    pub recommended_break: String,
}

impl BreakRecommendation {
    /// Recommendation for `work_seconds` of work.
    #[must_use]
    pub fn for_work(work_seconds: u64) -> Self {
        let break_seconds = recommended_break(work_seconds);
        Self {
            work_seconds,
            break_seconds,
            work: format_time(work_seconds),
            recommended_break: format_time(break_seconds),
        }
    }
}
