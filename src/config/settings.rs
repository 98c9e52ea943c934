//! Configuration settings for besober.
//!
//! Settings are loaded from `~/.besober/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::core::DayCounting;
use crate::error::BeSoberError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Streak arithmetic settings.
    pub streak: StreakConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
    /// Insert the example counters the first time an empty database is opened.
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
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

/// Streak settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StreakConfig {
    /// How days are counted between the streak start and now.
    #[serde(default)]
    pub day_counting: DayCounting,
    /// Streak length that fills the progress gauge.
    #[serde(default = "default_goal_days")]
    pub progress_goal_days: u32,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_true() -> bool {
    true
}

const fn default_goal_days() -> u32 {
    100
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
            seed_demo_data: default_true(),
        }
    }
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            day_counting: DayCounting::default(),
            progress_goal_days: default_goal_days(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ColorSetting {
    /// Apply this setting to the global `colored` override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
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
    pub fn load(paths: &Paths) -> Result<Self, BeSoberError> {
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, BeSoberError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            BeSoberError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            BeSoberError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert!(config.general.seed_demo_data);
        assert_eq!(config.streak.day_counting, DayCounting::Calendar);
        assert_eq!(config.streak.progress_goal_days, 100);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let yaml = r"
general:
  default_output: json
  color: never
  seed_demo_data: false
streak:
  day_counting: elapsed
  progress_goal_days: 30
logging:
  level: debug
";
        std::fs::write(&config_path, yaml).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.general.default_output, OutputFormat::Json);
        assert_eq!(loaded.general.color, ColorSetting::Never);
        assert!(!loaded.general.seed_demo_data);
        assert_eq!(loaded.streak.day_counting, DayCounting::Elapsed);
        assert_eq!(loaded.streak.progress_goal_days, 30);
        assert_eq!(loaded.logging.level, "debug");
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r"
streak:
  day_counting: elapsed
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.streak.day_counting, DayCounting::Elapsed);
        assert_eq!(config.streak.progress_goal_days, 100);
        assert!(config.general.seed_demo_data);
    }

    #[test]
    fn test_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "streak: [not, a, map]").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, BeSoberError::Config(_)));
    }
}
