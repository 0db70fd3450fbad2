// src/adapters/config_loader/yaml.rs
use std::path::{Path, PathBuf};

use config::{Environment, File, FileFormat};
use etcetera::BaseStrategy;
use tracing::debug;

use crate::{
    domain::config::{AppConfig, CONVERTER_PROGRAM_DEFAULT, USE_COLORS_DEFAULT},
    ports::config_loader::{ConfigLoadError, ConfigLoader},
};

const APP_DIR: &str = "ludown";
const CONFIG_FILE: &str = "config.yaml";
const ENV_PREFIX: &str = "LUDOWN";

/// Loads `AppConfig` from defaults, a YAML file and `LUDOWN_*` variables
pub struct Yaml {
    config_dir: Option<PathBuf>,
    read_env: bool,
}

impl Yaml {
    /// Loader using the platform configuration directory
    pub fn new() -> Self {
        Self {
            config_dir: None,
            read_env: true,
        }
    }

    /// Loader rooted at an explicit directory, ignoring the environment
    pub fn with_config_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            config_dir: Some(dir.as_ref().to_path_buf()),
            read_env: false,
        }
    }

    fn build<S>(&self, file: S) -> Result<AppConfig, ConfigLoadError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let mut builder = config::Config::builder()
            .set_default("validation_mode", "fail-fast")?
            .set_default("use_colors", USE_COLORS_DEFAULT)?
            .set_default("converter.program", CONVERTER_PROGRAM_DEFAULT)?
            .add_source(file);

        if self.read_env {
            builder = builder.add_source(
                // LUDOWN_VALIDATION_MODE, LUDOWN_CONVERTER__PROGRAM
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        }

        let app_config: AppConfig = builder.build()?.try_deserialize()?;
        Ok(app_config)
    }
}

impl Default for Yaml {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for Yaml {
    fn load_config(&self) -> Result<AppConfig, ConfigLoadError> {
        let path = self.config_path()?;
        debug!(path = %path.display(), "loading configuration");

        self.build(File::from(path.as_path()).format(FileFormat::Yaml).required(false))
    }

    fn config_path(&self) -> Result<PathBuf, ConfigLoadError> {
        let config_dir = match &self.config_dir {
            Some(dir) => dir.clone(),
            None => etcetera::choose_base_strategy()
                .map_err(|e| ConfigLoadError::NoConfigDir(e.to_string()))?
                .config_dir()
                .join(APP_DIR),
        };

        Ok(config_dir.join(CONFIG_FILE))
    }
}
