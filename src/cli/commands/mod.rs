//! Command implementations for flowtime.
//!
//! Each command returns the text to print; `main` prints it.

mod completions;
mod config;
mod noise;
mod recommend;

pub use completions::{completion_install_instructions, completions, generate_completions, shell_from_str};
pub use config::config;
pub use noise::noise;
pub use recommend::recommend;
