//! Logging setup.
//!
//! Log events are emitted with `tracing` throughout the crate. The binary
//! installs a `tracing-subscriber` formatter here: to stderr for one-shot
//! commands, to a file for the terminal UI (which owns the screen).

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::FlowtimeError;

/// Where log lines go.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// Standard error.
    Stderr,
    /// Append to a file.
    File(&'a Path),
}

/// Build the event filter: `RUST_LOG` if set, otherwise the configured level.
///
/// # Errors
///
/// Returns `Config` if the configured directive is malformed.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, FlowtimeError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            FlowtimeError::Config(format!("Invalid logging.level '{}': {e}", config.level))
        }),
    }
}

/// Install the global subscriber.
///
/// Installing twice is harmless; the first subscriber stays.
///
/// # Errors
///
/// Returns an error if the filter is malformed or the log file cannot be
/// opened.
pub fn init(config: &LoggingConfig, target: LogTarget<'_>) -> Result<(), FlowtimeError> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    if installed.is_err() {
        tracing::debug!("subscriber already installed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig {
            level: "flowtime=loudest".to_string(),
            file: None,
        };
        assert!(matches!(env_filter(&config), Err(FlowtimeError::Config(_))));
    }

    #[test]
    fn test_file_target_creates_log() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("logs").join("flowtime.log");
        init(&LoggingConfig::default(), LogTarget::File(&path)).unwrap();
        assert!(path.exists());
    }
}
