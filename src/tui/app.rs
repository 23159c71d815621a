//! Application state for the TUI.

use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::core::{Clock, SystemClock};
use crate::error::FlowtimeError;
use crate::features::flowtime::{DisplaySnapshot, Session, SessionClock, SessionState};
use crate::features::noise::{NoiseGenerator, NoiseKind};

/// Longest wait for input when no tick is due sooner.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Volume change per key press.
pub const VOLUME_STEP: f32 = 0.05;

/// Whether keys go to commands or to the task input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are commands.
    Normal,
    /// Keys edit the task label.
    Editing,
}

/// Application state.
pub struct App<C: Clock = SystemClock> {
    clock: SessionClock<C>,
    noise: NoiseGenerator,
    /// Latest display strings, fed by the session clock.
    display: Rc<RefCell<DisplaySnapshot>>,
    /// Task label being typed.
    pub input: String,
    /// Current input mode.
    pub mode: InputMode,
    /// Message to display in the status bar.
    pub message: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<C: Clock> App<C> {
    /// Create an app around a clock and a noise generator.
    pub fn new(mut clock: SessionClock<C>, noise: NoiseGenerator) -> Self {
        let display = Rc::new(RefCell::new(clock.snapshot()));
        let feed = Rc::clone(&display);
        clock.subscribe(move |_, session: &Session| {
            *feed.borrow_mut() = DisplaySnapshot::from_session(session);
        });

        Self {
            clock,
            noise,
            display,
            input: String::new(),
            mode: InputMode::Normal,
            message: None,
            should_quit: false,
        }
    }

    /// Display strings as of the last tick or transition.
    pub fn display(&self) -> Ref<'_, DisplaySnapshot> {
        self.display.borrow()
    }

    /// The current session.
    pub const fn session(&self) -> &Session {
        self.clock.session()
    }

    /// Noise currently playing.
    pub fn noise_playing(&self) -> Option<NoiseKind> {
        self.noise.playing()
    }

    /// Current noise volume.
    pub fn volume(&self) -> f32 {
        self.noise.volume()
    }

    /// How long the event loop may wait for input.
    pub fn poll_timeout(&self) -> Duration {
        self.clock
            .time_until_tick()
            .map_or(IDLE_POLL, |due| due.min(IDLE_POLL))
    }

    /// Run the session tick if it is due.
    pub fn poll_tick(&mut self) -> bool {
        self.clock.poll()
    }

    /// Start typing a task label.
    pub fn begin_editing(&mut self) {
        if self.clock.state() == SessionState::Working {
            self.message = Some("Already working. Press b for a break or x to stop".to_string());
            return;
        }
        self.input = self
            .clock
            .session()
            .task_label()
            .unwrap_or_default()
            .to_string();
        self.mode = InputMode::Editing;
        self.message = Some("Type the task, Enter to start, Esc to cancel".to_string());
    }

    /// Leave the task input without starting.
    pub fn cancel_editing(&mut self) {
        self.mode = InputMode::Normal;
        self.message = None;
    }

    /// Start working on the typed task.
    pub fn submit_task(&mut self) {
        match self.clock.start_work(&self.input) {
            Ok(()) => {
                self.mode = InputMode::Normal;
                self.message = None;
            }
            Err(FlowtimeError::InvalidInput(_)) => {
                self.message = Some("Enter a task to start working".to_string());
            }
            Err(e) => {
                self.mode = InputMode::Normal;
                self.message = Some(e.to_string());
            }
        }
    }

    /// Start working on `label` directly.
    ///
    /// # Errors
    ///
    /// Same as [`SessionClock::start_work`].
    pub fn start_work(&mut self, label: &str) -> Result<(), FlowtimeError> {
        self.clock.start_work(label)
    }

    /// Take a break.
    pub fn take_break(&mut self) {
        self.message = self.clock.start_break().err().map(|e| e.to_string());
    }

    /// Stop the timer.
    pub fn stop_timer(&mut self) {
        self.clock.stop();
        self.message = None;
    }

    /// Play `kind`, or stop it if it is already playing.
    pub fn toggle_noise(&mut self, kind: NoiseKind) {
        self.message = self.noise.toggle(kind).err().map(|e| e.to_string());
    }

    /// Play `kind`.
    ///
    /// # Errors
    ///
    /// Same as [`NoiseGenerator::play`].
    pub fn play_noise(&mut self, kind: NoiseKind) -> Result<(), FlowtimeError> {
        self.noise.play(kind)
    }

    /// Stop any noise.
    pub fn stop_noise(&mut self) {
        self.noise.stop();
    }

    /// Set the volume directly.
    ///
    /// # Errors
    ///
    /// Same as [`NoiseGenerator::set_volume`].
    pub fn set_volume(&mut self, level: f32) -> Result<(), FlowtimeError> {
        self.noise.set_volume(level)
    }

    /// Nudge the volume by `delta`, staying within `[0, 1]`.
    pub fn change_volume(&mut self, delta: f32) {
        let target = ((self.noise.volume() + delta) / VOLUME_STEP).round() * VOLUME_STEP;
        let level = target.clamp(0.0, 1.0);
        match self.noise.set_volume(level) {
            Ok(()) => self.message = Some(format!("Volume {:.0}%", level * 100.0)),
            Err(e) => self.message = Some(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManualClock;
    use crate::features::noise::UnavailableSink;

    fn app() -> (ManualClock, App<ManualClock>) {
        let time = ManualClock::new(0);
        let noise = NoiseGenerator::seeded(Box::new(UnavailableSink::new(100, "no device")), 1);
        (time.clone(), App::new(SessionClock::new(time), noise))
    }

    #[test]
    fn test_editing_and_submit() {
        let (_, mut app) = app();
        app.begin_editing();
        assert_eq!(app.mode, InputMode::Editing);

        app.submit_task();
        assert_eq!(app.mode, InputMode::Editing);
        assert_eq!(app.message.as_deref(), Some("Enter a task to start working"));

        app.input = "Write report".to_string();
        app.submit_task();
        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(app.display().status, "Working on: Write report");
    }

    #[test]
    fn test_display_follows_ticks() {
        let (time, mut app) = app();
        app.start_work("Write report").unwrap();
        time.advance_secs(130);
        assert!(app.poll_tick());
        assert_eq!(app.display().timer, "00:02:10");
        assert_eq!(app.display().break_hint.as_deref(), Some("(00:00:26)"));

        app.take_break();
        assert_eq!(app.display().timer, "00:00:00");
        assert_eq!(app.display().status, "Taking a break (00:00:26 recommended)");
    }

    #[test]
    fn test_break_while_idle_shows_message() {
        let (_, mut app) = app();
        app.take_break();
        assert_eq!(app.message.as_deref(), Some("Cannot start a break while idle"));
        assert_eq!(app.session().state(), SessionState::Idle);
    }

    #[test]
    fn test_noise_unavailable_shows_message() {
        let (_, mut app) = app();
        app.toggle_noise(NoiseKind::Pink);
        assert!(app.noise_playing().is_none());
        assert_eq!(app.message.as_deref(), Some("Audio unavailable: no device"));
    }

    #[test]
    fn test_volume_steps_and_clamps() {
        let (_, mut app) = app();
        app.change_volume(VOLUME_STEP);
        assert!((app.volume() - 0.55).abs() < 1e-5);
        for _ in 0..30 {
            app.change_volume(VOLUME_STEP);
        }
        assert!((app.volume() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_poll_timeout_tracks_tick() {
        let (time, mut app) = app();
        assert_eq!(app.poll_timeout(), IDLE_POLL);
        app.start_work("a").unwrap();
        time.advance_millis(900);
        assert_eq!(app.poll_timeout(), Duration::from_millis(100));
    }
}
