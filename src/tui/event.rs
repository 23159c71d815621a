//! Event handling for the TUI.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Clock;
use crate::error::FlowtimeError;
use crate::features::noise::NoiseKind;
use crate::tui::app::{App, InputMode, VOLUME_STEP};

/// Keys shown by `?`.
pub const HELP: &str =
    "s:start | b:break | x:stop | 1/2/3:white/pink/brown | 0:silence | +/-:volume | q:quit";

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start typing a task.
    StartEditing,
    /// Start working on the typed task.
    Submit,
    /// Leave the task input.
    CancelEditing,
    /// Take a break.
    Break,
    /// Stop the timer.
    Stop,
    /// Toggle a noise.
    ToggleNoise(NoiseKind),
    /// Stop any noise.
    Silence,
    /// Change the volume by this much.
    Volume(f32),
}

/// Wait for a terminal event until the next tick is due.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<C: Clock>(app: &mut App<C>) -> Result<Option<Action>, FlowtimeError> {
    if !event::poll(app.poll_timeout())
        .map_err(|e| FlowtimeError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    match event::read().map_err(|e| FlowtimeError::Terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(handle_key(app, key)),
        _ => Ok(None),
    }
}

/// Map one key press to an action, editing the task input in place.
pub fn handle_key<C: Clock>(app: &mut App<C>, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match app.mode {
        InputMode::Editing => match key.code {
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Esc => Some(Action::CancelEditing),
            KeyCode::Backspace => {
                app.input.pop();
                None
            }
            KeyCode::Char(c) => {
                app.input.push(c);
                None
            }
            _ => None,
        },
        InputMode::Normal => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('s') | KeyCode::Enter => Some(Action::StartEditing),
            KeyCode::Char('b') => Some(Action::Break),
            KeyCode::Char('x') => Some(Action::Stop),
            KeyCode::Char('1') => Some(Action::ToggleNoise(NoiseKind::White)),
            KeyCode::Char('2') => Some(Action::ToggleNoise(NoiseKind::Pink)),
            KeyCode::Char('3') => Some(Action::ToggleNoise(NoiseKind::Brown)),
            KeyCode::Char('0') => Some(Action::Silence),
            KeyCode::Char('+' | '=') => Some(Action::Volume(VOLUME_STEP)),
            KeyCode::Char('-') => Some(Action::Volume(-VOLUME_STEP)),
            KeyCode::Char('?') => {
                app.message = Some(HELP.to_string());
                None
            }
            _ => None,
        },
    }
}
