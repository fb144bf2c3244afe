//! Parser limits and command-line configuration.
//!
//! `LexerConfig` bounds the parser. `AppConfig` holds the binary's settings,
//! loaded from environment variables prefixed with `TOKENLEX_` and then
//! overridden by command-line flags.

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Default maximum nesting depth of tokens inside token arguments.
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log level '{0}', expected one of: trace, debug, info, warn, error")]
    UnknownLogLevel(String),
    #[error("invalid max depth '{0}', expected a non-negative integer")]
    InvalidMaxDepth(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Deepest allowed nesting of `{{...}}` inside token arguments. A token
    /// directly in another token's arguments is at depth 1; with 0 no token
    /// may appear in arguments at all.
    pub max_depth: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::UnknownLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Parses a nesting limit from the environment or the command line.
pub fn parse_max_depth(value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidMaxDepth(value.to_string()))
}

/// Settings for the `tokenlex` binary.
///
/// # Environment Variables
///
/// - `TOKENLEX_LOG_LEVEL`: trace, debug, info, warn, or error
/// - `TOKENLEX_MAX_DEPTH`: maximum token nesting depth
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: LogLevel,
    pub lexer: LexerConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("TOKENLEX_LOG_LEVEL").ok().as_deref(),
            env::var("TOKENLEX_MAX_DEPTH").ok().as_deref(),
        )
    }

    fn from_vars(log_level: Option<&str>, max_depth: Option<&str>) -> Result<Self, ConfigError> {
        let log_level = match log_level {
            Some(value) => value.parse()?,
            None => LogLevel::default(),
        };

        let max_depth = match max_depth {
            Some(value) => parse_max_depth(value)?,
            None => DEFAULT_MAX_DEPTH,
        };

        Ok(AppConfig {
            log_level,
            lexer: LexerConfig { max_depth },
        })
    }

    /// Applies command-line values, which take precedence over the environment.
    pub fn apply_overrides(mut self, log_level: Option<LogLevel>, max_depth: Option<usize>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if let Some(depth) = max_depth {
            self.lexer.max_depth = depth;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parses_case_insensitively() {
        assert_eq!("trace".parse::<LogLevel>(), Ok(LogLevel::Trace));
        assert_eq!("DEBUG".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("Info".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("error".parse::<LogLevel>(), Ok(LogLevel::Error));
    }

    #[test]
    fn test_log_level_rejects_unknown() {
        let error = "loud".parse::<LogLevel>().unwrap_err();
        assert!(error.to_string().contains("unknown log level"));
    }

    #[test]
    fn test_from_vars_defaults() {
        let config = AppConfig::from_vars(None, None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.lexer.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_from_vars_reads_values() {
        let config = AppConfig::from_vars(Some("debug"), Some("8")).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.lexer.max_depth, 8);
    }

    #[test]
    fn test_from_vars_rejects_bad_depth() {
        assert_eq!(
            AppConfig::from_vars(None, Some("-1")),
            Err(ConfigError::InvalidMaxDepth(String::from("-1")))
        );
        assert!(AppConfig::from_vars(None, Some("deep")).is_err());
    }

    #[test]
    fn test_max_depth_zero_is_accepted() {
        let config = AppConfig::from_vars(None, Some("0")).unwrap();
        assert_eq!(config.lexer.max_depth, 0);
        assert_eq!(parse_max_depth(" 0 "), Ok(0));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = AppConfig::default().apply_overrides(Some(LogLevel::Trace), Some(3));
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.lexer.max_depth, 3);

        let untouched = AppConfig::default().apply_overrides(None, None);
        assert_eq!(untouched, AppConfig::default());
    }
}
