//! Configuration settings for flowtime.
//!
//! Settings are loaded from `~/.flowtime/config.yaml`. Every field has a
//! default, so a partial file (or none at all) is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::FlowtimeError;
use crate::features::noise::{NoiseKind, MAX_SAMPLE_RATE, MIN_SAMPLE_RATE};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Background noise settings.
    pub noise: NoiseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    pub default_output: OutputFormat,
    /// Color output setting.
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to the `colored` crate's global override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Background noise settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NoiseConfig {
    /// Sample rate used when no audio device reports one.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Initial volume, 0.0 - 1.0.
    #[serde(default = "default_volume")]
    pub volume: f32,
    /// Noise to start automatically with the terminal UI.
    #[serde(default)]
    pub default_kind: Option<NoiseKind>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `warn` or `flowtime=debug`. `RUST_LOG` wins.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the terminal UI. Defaults to `~/.flowtime/flowtime.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

// Default value functions for serde
const fn default_sample_rate() -> u32 {
    44_100
}

const fn default_volume() -> f32 {
    0.5
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: OutputFormat::Pretty,
            color: ColorSetting::Auto,
        }
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            volume: default_volume(),
            default_kind: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, FlowtimeError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// holds out-of-range values.
    pub fn load_from_path(path: &Path) -> Result<Self, FlowtimeError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            FlowtimeError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            FlowtimeError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `Config` naming the offending field.
    pub fn validate(&self) -> Result<(), FlowtimeError> {
        if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&self.noise.sample_rate) {
            return Err(FlowtimeError::Config(format!(
                "noise.sample_rate must be between {MIN_SAMPLE_RATE} and {MAX_SAMPLE_RATE}, got {}",
                self.noise.sample_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.noise.volume) {
            return Err(FlowtimeError::Config(format!(
                "noise.volume must be between 0 and 1, got {}",
                self.noise.volume
            )));
        }
        Ok(())
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), FlowtimeError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &Path) -> Result<(), FlowtimeError> {
        let contents = self.to_yaml()?;

        std::fs::write(path, contents).map_err(|e| {
            FlowtimeError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, FlowtimeError> {
        serde_yaml::to_string(self)
            .map_err(|e| FlowtimeError::Config(format!("Failed to serialize config: {e}")))
    }
}
