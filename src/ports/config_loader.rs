// src/ports/config_loader.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::config::AppConfig;

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Could not determine the configuration directory: {0}")]
    NoConfigDir(String),
}

impl From<config::ConfigError> for ConfigLoadError {
    fn from(value: config::ConfigError) -> Self {
        ConfigLoadError::ParseError(value.to_string())
    }
}

/// Port for loading application configuration
pub trait ConfigLoader {
    /// Load configuration from the standard location, falling back to
    /// defaults when no file exists
    fn load_config(&self) -> Result<AppConfig, ConfigLoadError>;

    /// Where the configuration file is expected to live
    fn config_path(&self) -> Result<PathBuf, ConfigLoadError>;
}
