//! Path resolution for besober configuration and data files.
//!
//! All besober data is stored in `~/.besober/` (or `$BESOBER_HOME`):
//! - `config.yaml` - Main configuration file
//! - `besober.db` - SQLite database with counters and the default streak
//! - `besober.log` - Log file written while the dashboard is running

use std::path::PathBuf;

use crate::error::BeSoberError;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "BESOBER_HOME";

/// Paths to besober configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.besober/`
    pub root: PathBuf,
    /// Config file: `~/.besober/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.besober/besober.db`
    pub database: PathBuf,
    /// Log file: `~/.besober/besober.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Resolve paths from `$BESOBER_HOME`, falling back to `~/.besober`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, BeSoberError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            BeSoberError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".besober")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("besober.db"),
            log_file: root.join("besober.log"),
            root,
        }
    }

    /// Ensure the data directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), BeSoberError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                BeSoberError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-besober");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.database, root.join("besober.db"));
        assert_eq!(paths.log_file, root.join("besober.log"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join("data"));

        paths.ensure_dirs().unwrap();
        assert!(paths.root.exists());

        // Second call is a no-op
        paths.ensure_dirs().unwrap();
    }
}
