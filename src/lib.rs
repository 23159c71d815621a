//! flowtime - A flowtime work/break timer for the terminal
//!
//! Times work stretches, recommends a break of one fifth of the work time,
//! and plays white, pink or brown noise in the background.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::FlowtimeError;
pub use features::flowtime::SessionClock;
pub use features::noise::NoiseGenerator;
