//! Core abstractions for flowtime.
//!
//! Time sources and duration helpers shared by the session clock, the CLI and
//! the terminal UI.

mod clock;
mod duration;

pub use clock::{Clock, ManualClock, SystemClock};
pub use duration::{format_duration, format_time, parse_duration};
