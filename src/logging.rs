// src/logging.rs
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::Directive, EnvFilter};

/// The filter used when `RUST_LOG` is not set. `--verbose` wins over the
/// configured level.
pub fn default_directive(config_level: Option<&str>, verbose: bool) -> Directive {
    if verbose {
        return LevelFilter::DEBUG.into();
    }

    config_level
        .and_then(|level| level.parse::<Directive>().ok())
        .unwrap_or_else(|| LevelFilter::WARN.into())
}

pub fn init_tracing(config_level: Option<&str>, verbose: bool) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_directive(config_level, verbose))
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_warn() {
        assert_eq!(default_directive(None, false).to_string(), "warn");
    }

    #[test]
    fn test_verbose_overrides_config() {
        assert_eq!(default_directive(Some("info"), true).to_string(), "debug");
    }

    #[test]
    fn test_config_level_used() {
        assert_eq!(default_directive(Some("info"), false).to_string(), "info");
    }

    #[test]
    fn test_unparseable_config_level_falls_back() {
        assert_eq!(
            default_directive(Some("ludown=loud"), false).to_string(),
            "warn"
        );
    }
}
