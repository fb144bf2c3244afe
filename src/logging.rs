//! Logging setup for the `tokenlex` binary.
//!
//! Logs go to stderr so they never mix with parse output on stdout.

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

fn filter_from_config(config: &AppConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Installs a global `tracing` subscriber at the configured level.
///
/// A subscriber that is already installed is left in place, so calling this
/// more than once (as tests do) is harmless.
pub fn init_logging(config: &AppConfig) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn test_init_logging_is_idempotent() {
        let config = AppConfig::default();
        init_logging(&config);
        init_logging(&config);
    }

    #[test]
    fn test_filter_uses_config_log_level() {
        let config = AppConfig::default().apply_overrides(Some(LogLevel::Debug), None);
        assert_eq!(filter_from_config(&config).to_string(), "debug");
    }
}
