//! Path resolution for flowtime configuration and log files.
//!
//! All flowtime data is stored in `~/.flowtime/`:
//! - `config.yaml` - Main configuration file
//! - `flowtime.log` - Log output of the terminal UI

use std::path::PathBuf;

use crate::error::FlowtimeError;

/// Paths to flowtime configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.flowtime/`
    pub root: PathBuf,
    /// Config file: `~/.flowtime/config.yaml`
    pub config_file: PathBuf,
    /// Log file: `~/.flowtime/flowtime.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FlowtimeError> {
        let home = std::env::var("HOME")
            .map_err(|_| FlowtimeError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".flowtime")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            log_file: root.join("flowtime.log"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), FlowtimeError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                FlowtimeError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::with_root(PathBuf::from(".flowtime")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-flowtime");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.log_file, root.join("flowtime.log"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join(".flowtime"));

        paths.ensure_dirs().unwrap();
        assert!(paths.root.exists());

        // Second call is a no-op.
        paths.ensure_dirs().unwrap();
    }
}
