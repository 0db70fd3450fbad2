// src/domain/config.rs

use serde::Deserialize;

pub const CONVERTER_PROGRAM_DEFAULT: &str = "ludown-toluis";
pub const USE_COLORS_DEFAULT: bool = true;

/// How the outcomes of concurrently running validators are aggregated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// Surface the first failure to settle
    #[default]
    FailFast,
    /// Wait for every validator and surface all failures
    CollectAll,
}

/// External program that performs the LUIS conversion
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConverterConfig {
    #[serde(default = "default_converter_program")]
    pub program: String,

    /// Arguments placed before the rendered options
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: default_converter_program(),
            args: Vec::new(),
        }
    }
}

fn default_converter_program() -> String {
    CONVERTER_PROGRAM_DEFAULT.to_string()
}

const fn default_use_colors() -> bool {
    USE_COLORS_DEFAULT
}

/// Application configuration, merged from defaults, the config file and
/// `LUDOWN_*` environment variables
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub validation_mode: ValidationMode,

    #[serde(default = "default_use_colors")]
    pub use_colors: bool,

    /// Tracing filter directive, e.g. `debug` or `ludown=trace`
    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub converter: ConverterConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            validation_mode: ValidationMode::default(),
            use_colors: USE_COLORS_DEFAULT,
            log_level: None,
            converter: ConverterConfig::default(),
        }
    }
}

/// Builder pattern for testing
#[derive(Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn validation_mode(mut self, mode: ValidationMode) -> Self {
        self.config.validation_mode = mode;
        self
    }

    pub fn use_colors(mut self, use_colors: bool) -> Self {
        self.config.use_colors = use_colors;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.validation_mode, ValidationMode::FailFast);
        assert!(config.use_colors);
        assert_eq!(config.converter.program, "ludown-toluis");
        assert!(config.converter.args.is_empty());
    }

    #[test]
    fn test_deserialize_partial_yaml() {
        let yaml = r#"
            validation_mode: collect-all
            converter:
              args: ["parse", "toluis"]
        "#;

        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.validation_mode, ValidationMode::CollectAll);
        assert!(config.use_colors);
        assert_eq!(config.converter.program, "ludown-toluis");
        assert_eq!(config.converter.args, vec!["parse", "toluis"]);
    }
}
