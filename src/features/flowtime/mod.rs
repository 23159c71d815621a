//! Flowtime sessions.
//!
//! Work until you are done, then take a break one fifth as long:
//! - [`SessionClock`] times work and break stretches
//! - [`Session`] is the owned state it lends to observers
//! - [`DisplaySnapshot`] renders a session as display strings

mod clock;
mod display;
mod session;
mod ticker;

pub use clock::{SessionClock, SessionEvent, SessionObserver};
pub use display::{BreakRecommendation, DisplaySnapshot, APP_TITLE};
pub use session::{
    elapsed_seconds_between, recommended_break, Session, SessionState, BREAK_DIVISOR,
};
pub use ticker::{TickTask, TICK_PERIOD_MILLIS};
