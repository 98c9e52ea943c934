//! Logging setup.
//!
//! `RUST_LOG` takes precedence; otherwise the configured level applies.
//! Command-line runs log to stderr. The dashboard logs to a file so the
//! alternate screen stays clean.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{LoggingConfig, Paths};
use crate::error::BeSoberError;

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error.
    Stderr,
    /// The log file under the data directory.
    File,
}

fn filter(config: &LoggingConfig) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    build_filter(from_env.as_deref(), config)
}

/// Use `directives` when they parse, else the configured level.
fn build_filter(directives: Option<&str>, config: &LoggingConfig) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(&config.level))
}

/// Install the global subscriber.
///
/// Calling it again after a subscriber is installed is a no-op.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(config: &LoggingConfig, paths: &Paths, target: LogTarget) -> Result<(), BeSoberError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_target(false);

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File => {
            paths.ensure_dirs()?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&paths.log_file)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    if let Err(e) = result {
        tracing::debug!("logging already initialized: {e}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_filter_falls_back_to_config_level() {
        let config = LoggingConfig {
            level: "besober=debug".to_string(),
        };

        let filter = build_filter(None, &config);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = build_filter(Some("besober=loud"), &config);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_env_directives_win_over_config() {
        let config = LoggingConfig {
            level: "trace".to_string(),
        };

        let filter = build_filter(Some("error"), &config);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_file_target_creates_log_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("logs"));

        init(&LoggingConfig::default(), &paths, LogTarget::File).unwrap();
        assert!(paths.log_file.exists());
    }
}
