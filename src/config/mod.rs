//! Configuration management for flowtime.
//!
//! This module handles loading and saving configuration from `~/.flowtime/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, LoggingConfig, NoiseConfig};
