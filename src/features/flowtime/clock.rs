//! The session clock: state transitions and the periodic tick.

use std::time::Duration;

use tracing::{debug, info, trace};

use super::display::DisplaySnapshot;
use super::session::{Session, SessionState};
use super::ticker::TickTask;
use crate::core::{Clock, SystemClock};
use crate::error::FlowtimeError;

/// What just happened to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A work stretch started.
    WorkStarted,
    /// Work ended and a break started.
    BreakStarted,
    /// The running stretch was stopped.
    Stopped,
    /// Elapsed time was recomputed.
    Tick,
}

/// Receives every tick and transition along with the updated session.
pub trait SessionObserver {
    /// Called after the session has been updated.
    fn on_event(&mut self, event: SessionEvent, session: &Session);
}

impl<F> SessionObserver for F
where
    F: FnMut(SessionEvent, &Session),
{
    fn on_event(&mut self, event: SessionEvent, session: &Session) {
        self(event, session);
    }
}

/// Times work and break stretches and derives the recommended break.
///
/// The clock owns its [`Session`] and the handle of the pending tick. Every
/// transition drops the previous tick before arming the next one, so at most
/// one tick is ever scheduled and none survives a stop.
pub struct SessionClock<C: Clock = SystemClock> {
    clock: C,
    session: Session,
    tick: Option<TickTask>,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl SessionClock<SystemClock> {
    /// Create a clock reading the system wall clock.
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> SessionClock<C> {
    /// Create an idle clock.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            session: Session::default(),
            tick: None,
            observers: Vec::new(),
        }
    }

    /// Register an observer for ticks and transitions.
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The current session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Display strings for the current session.
    #[must_use]
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot::from_session(&self.session)
    }

    /// Whether a periodic tick is scheduled.
    #[must_use]
    pub const fn is_ticking(&self) -> bool {
        self.tick.is_some()
    }

    /// Start a work stretch on `task_label`.
    ///
    /// Allowed while idle or on a break (which ends the break).
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the label is blank, or `IllegalTransition`
    /// if work is already being timed.
    pub fn start_work(&mut self, task_label: &str) -> Result<(), FlowtimeError> {
        let label = task_label.trim();
        if label.is_empty() {
            return Err(FlowtimeError::InvalidInput(
                "task label must not be empty".to_string(),
            ));
        }
        if self.session.state() == SessionState::Working {
            return Err(FlowtimeError::illegal(SessionState::Working, "start work"));
        }

        let now = self.clock.now_millis();
        self.tick = None;
        self.session.begin_work(label.to_string(), now);
        self.tick = Some(TickTask::every_second(now));

        info!(task = label, "work started");
        self.notify(SessionEvent::WorkStarted);
        Ok(())
    }

    /// End the work stretch and start a break.
    ///
    /// # Errors
    ///
    /// Returns `IllegalTransition` unless work is being timed.
    pub fn start_break(&mut self) -> Result<(), FlowtimeError> {
        let state = self.session.state();
        if state != SessionState::Working {
            return Err(FlowtimeError::illegal(state, "start a break"));
        }

        let now = self.clock.now_millis();
        self.tick = None;
        self.session.begin_break(now);
        self.tick = Some(TickTask::every_second(now));

        info!(
            worked_seconds = self.session.last_work_duration_seconds(),
            break_seconds = self.session.recommended_break_seconds(),
            "break started"
        );
        self.notify(SessionEvent::BreakStarted);
        Ok(())
    }

    /// Stop whatever is being timed. A no-op while idle.
    pub fn stop(&mut self) {
        if !self.session.state().is_active() {
            debug!("stop requested while idle");
            return;
        }

        let now = self.clock.now_millis();
        self.tick = None;
        self.session.end(now);

        info!(
            worked_seconds = self.session.last_work_duration_seconds(),
            "session stopped"
        );
        self.notify(SessionEvent::Stopped);
    }

    /// Recompute elapsed time from the start timestamp and notify observers.
    ///
    /// Does nothing while idle.
    pub fn tick(&mut self) {
        if !self.session.state().is_active() {
            return;
        }
        self.session.refresh(self.clock.now_millis());
        trace!(elapsed = self.session.elapsed_seconds(), "tick");
        self.notify(SessionEvent::Tick);
    }

    /// Run the scheduled tick if its deadline has passed.
    ///
    /// Returns true if a tick ran.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now_millis();
        let due = self.tick.as_mut().is_some_and(|task| task.poll(now));
        if due {
            self.tick();
        }
        due
    }

    /// Time until the next scheduled tick, or `None` when nothing is timed.
    #[must_use]
    pub fn time_until_tick(&self) -> Option<Duration> {
        self.tick
            .as_ref()
            .map(|task| task.remaining(self.clock.now_millis()))
    }

    fn notify(&mut self, event: SessionEvent) {
        for observer in &mut self.observers {
            observer.on_event(event, &self.session);
        }
    }
}

impl<C: Clock> std::fmt::Debug for SessionClock<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionClock")
            .field("session", &self.session)
            .field("tick", &self.tick)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
