//! Error types for flowtime.

use thiserror::Error;

use crate::features::flowtime::SessionState;

/// Errors produced by flowtime operations.
///
/// Every failure is terminal for the single call that produced it and leaves
/// the session and noise state as it was.
#[derive(Debug, Error)]
pub enum FlowtimeError {
    /// Caller supplied a value the operation cannot accept (empty task label,
    /// volume outside `[0, 1]`).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No audio output could be opened, or the device refused the stream.
    #[error("Audio unavailable: {0}")]
    AudioUnavailable(String),

    /// The requested transition is not allowed from the current state.
    #[error("Cannot {action} while {from}")]
    IllegalTransition {
        /// State the session was in.
        from: SessionState,
        /// What was requested.
        action: &'static str,
    },

    /// Configuration could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A value on the command line could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Terminal setup or drawing failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for FlowtimeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(format!("JSON error: {e}"))
    }
}

impl FlowtimeError {
    /// Shorthand for an [`FlowtimeError::IllegalTransition`].
    #[must_use]
    pub const fn illegal(from: SessionState, action: &'static str) -> Self {
        Self::IllegalTransition { from, action }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_transition_message() {
        let err = FlowtimeError::illegal(SessionState::Idle, "start a break");
        assert_eq!(err.to_string(), "Cannot start a break while idle");
    }

    #[test]
    fn test_invalid_input_message() {
        let err = FlowtimeError::InvalidInput("task label is empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: task label is empty");
    }
}
