//! Configuration commands.

use std::path::Path;

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::FlowtimeError;
use crate::output::{format_config, to_json};

/// Execute config subcommands against the file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written.
pub fn config(
    cmd: &ConfigCommands,
    config: &Config,
    path: &Path,
    format: OutputFormat,
) -> Result<String, FlowtimeError> {
    match cmd {
        ConfigCommands::Show => format_config(config, path, format),
        ConfigCommands::Path => match format {
            OutputFormat::Json => to_json(&serde_json::json!({ "path": path })),
            OutputFormat::Pretty => Ok(path.display().to_string()),
        },
        ConfigCommands::Init { force } => init(path, *force, format),
    }
}

fn init(path: &Path, force: bool, format: OutputFormat) -> Result<String, FlowtimeError> {
    if path.exists() && !force {
        return Err(FlowtimeError::Config(format!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        Paths::with_root(parent.to_path_buf()).ensure_dirs()?;
    }
    Config::default().save_to_path(path)?;

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({ "path": path, "created": true })),
        OutputFormat::Pretty => Ok(format!(
            "{} {}",
            "Wrote default config to".green(),
            path.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cfg").join("config.yaml");

        config(&ConfigCommands::Init { force: false }, &Config::default(), &path, OutputFormat::Json)
            .unwrap();
        assert_eq!(Config::load_from_path(&path).unwrap(), Config::default());

        let again = config(
            &ConfigCommands::Init { force: false },
            &Config::default(),
            &path,
            OutputFormat::Json,
        );
        assert!(matches!(again, Err(FlowtimeError::Config(_))));

        config(&ConfigCommands::Init { force: true }, &Config::default(), &path, OutputFormat::Json)
            .unwrap();
    }

    #[test]
    fn test_path_pretty() {
        let path = Path::new("/tmp/flowtime/config.yaml");
        let out = config(&ConfigCommands::Path, &Config::default(), path, OutputFormat::Pretty)
            .unwrap();
        assert_eq!(out, "/tmp/flowtime/config.yaml");
    }
}
