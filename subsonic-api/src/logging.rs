//! Optional tracing subscriber setup for applications using the client
//!
//! The library itself only emits `tracing` events and never installs a
//! subscriber. Applications that have no logging setup of their own can call
//! [`init_logging`] or [`init_logging_from_env`] once at startup.

use std::str::FromStr;

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Environment variable selecting the [`LoggingMode`]
pub const LOG_MODE_ENV: &str = "SUBSONIC_LOG_MODE";

/// Environment variable overriding the filter directives
pub const LOG_LEVEL_ENV: &str = "SUBSONIC_LOG_LEVEL";

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoggingMode {
    /// No subscriber is installed
    #[default]
    Silent,
    /// Compact stderr output with request outcomes
    Development,
    /// Verbose output including transport traces and source locations
    Debug,
}

impl LoggingMode {
    fn default_directives(self) -> &'static str {
        match self {
            LoggingMode::Silent => "off",
            LoggingMode::Development => "warn,subsonic_api=debug",
            LoggingMode::Debug => "info,subsonic_api=trace,rest_client=trace",
        }
    }
}

impl FromStr for LoggingMode {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "silent" | "off" => Ok(LoggingMode::Silent),
            "development" | "dev" => Ok(LoggingMode::Development),
            "debug" => Ok(LoggingMode::Debug),
            other => Err(LoggingError::InvalidEnv(format!("{}={}", LOG_MODE_ENV, other))),
        }
    }
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    #[error("Invalid environment variable: {0}")]
    InvalidEnv(String),
}

/// Initialize logging with the specified mode
///
/// # Environment Variables
///
/// - `SUBSONIC_LOG_LEVEL`: filter directives, e.g. `subsonic_api=trace`
/// - `RUST_LOG`: used when `SUBSONIC_LOG_LEVEL` is unset
///
/// # Errors
/// [`LoggingError::TracingInit`] if a global subscriber is already installed,
/// [`LoggingError::InvalidEnv`] if the filter directives do not parse.
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => Registry::default()
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .with(create_env_filter(mode)?)
            .try_init()
            .map_err(|e| LoggingError::TracingInit(e.to_string())),
        LoggingMode::Debug => Registry::default()
            .with(
                fmt::layer()
                    .pretty()
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(create_env_filter(mode)?)
            .try_init()
            .map_err(|e| LoggingError::TracingInit(e.to_string())),
    }
}

/// Initialize logging from `SUBSONIC_LOG_MODE`
///
/// Accepts `silent`, `development` or `debug` (case-insensitive). Unset means
/// silent; any other value is an error.
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    let mode = match std::env::var(LOG_MODE_ENV) {
        Ok(value) => value.parse()?,
        Err(_) => LoggingMode::Silent,
    };

    init_logging(mode)
}

fn create_env_filter(mode: LoggingMode) -> Result<EnvFilter, LoggingError> {
    let directives = std::env::var(LOG_LEVEL_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| mode.default_directives().to_string());

    parse_filter(&directives)
}

fn parse_filter(directives: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directives).map_err(|e| LoggingError::InvalidEnv(format!("{}: {}", directives, e)))
}

/// Check if a global subscriber has been installed
pub fn is_initialized() -> bool {
    tracing::dispatcher::has_been_set()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_silent_mode() {
        assert!(init_logging(LoggingMode::Silent).is_ok());
    }

    #[rstest]
    #[case("silent", LoggingMode::Silent)]
    #[case("", LoggingMode::Silent)]
    #[case("Development", LoggingMode::Development)]
    #[case("dev", LoggingMode::Development)]
    #[case(" DEBUG ", LoggingMode::Debug)]
    fn test_mode_parsing(#[case] value: &str, #[case] expected: LoggingMode) {
        assert_eq!(value.parse::<LoggingMode>().unwrap(), expected);
    }

    #[test]
    fn test_invalid_mode() {
        match "verbose".parse::<LoggingMode>() {
            Err(LoggingError::InvalidEnv(msg)) => assert_eq!(msg, "SUBSONIC_LOG_MODE=verbose"),
            other => panic!("Expected InvalidEnv, got {:?}", other),
        }
    }

    #[test]
    fn test_default_directives_parse() {
        for mode in [LoggingMode::Silent, LoggingMode::Development, LoggingMode::Debug] {
            assert!(parse_filter(mode.default_directives()).is_ok());
        }
    }

    #[test]
    fn test_invalid_filter() {
        assert!(matches!(parse_filter("subsonic_api=loud"), Err(LoggingError::InvalidEnv(_))));
    }
}
