//! Configuration management for besober.
//!
//! This module handles loading configuration from `~/.besober/`.

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{ColorSetting, Config, GeneralConfig, LoggingConfig, StreakConfig};
