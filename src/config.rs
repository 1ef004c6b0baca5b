//! Configuration management for the contact book.
//!
//! Settings are read from environment variables, optionally seeded from a
//! `.env` file in the working directory. Nothing here writes to stdout, which
//! belongs to the interactive session.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default window for the upcoming-birthdays query, in days.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// Largest accepted birthday window, in days.
pub const MAX_BIRTHDAY_WINDOW_DAYS: u32 = 365;

/// Configuration for the contact book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Force debug logging (default: false)
    pub debug: bool,

    /// Log level used when debug is off (default: "error")
    pub log_level: String,

    /// Days ahead covered by the upcoming-birthdays query (default: 7)
    pub birthday_window_days: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `DEBUG`: `true`, `1` or `yes` enables debug logging (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `BIRTHDAY_WINDOW_DAYS`: Upcoming-birthday window, 0-365 (default: 7)
    pub fn from_env() -> ConfigResult<Self> {
        Self::check_dotenv(dotenvy::dotenv())?;

        let debug = Self::parse_env_flag("DEBUG");
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_BIRTHDAY_WINDOW_DAYS)?;

        if birthday_window_days > MAX_BIRTHDAY_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_BIRTHDAY_WINDOW_DAYS),
            });
        }

        Ok(Config {
            debug,
            log_level,
            birthday_window_days,
        })
    }

    /// The tracing filter to start with: `debug` when forced, else `log_level`.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.log_level
        }
    }

    /// A missing .env file is fine; one that cannot be read or parsed is not.
    fn check_dotenv(result: Result<PathBuf, dotenvy::Error>) -> ConfigResult<()> {
        match result {
            Ok(_) => Ok(()),
            Err(err) if err.not_found() => Ok(()),
            Err(err) => Err(ConfigError::DotenvError(err.to_string())),
        }
    }

    /// Parse an environment variable as a boolean flag, false when unset.
    fn parse_env_flag(var_name: &str) -> bool {
        env::var(var_name)
            .map(|val| matches!(val.trim().to_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false)
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            debug: false,
            log_level: "error".to_string(),
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
        }
    }
}
