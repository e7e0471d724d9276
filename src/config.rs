//! Configuration read from the environment at startup.

use crate::api::DEFAULT_ENDPOINT;
use crate::error::ConfigError;
use crate::poller::PollOptions;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

const DEFAULT_RETRY_TIME_SECS: u64 = 60 * 10;
const DEFAULT_ERROR_RETRY_TIME_SECS: u64 = 60 * 20;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings for the bot. Built once and passed to everything that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the homework API.
    pub practicum_token: String,
    /// Token of the Telegram bot.
    pub telegram_token: String,
    /// The chat to send messages to.
    pub telegram_chat_id: String,
    /// The homework statuses endpoint.
    pub endpoint: Url,
    /// Wait between successful polls.
    pub retry_time: Duration,
    /// Wait after a failed poll.
    pub error_retry_time: Duration,
    /// Timeout for each HTTP request.
    pub request_timeout: Duration,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the configuration using `lookup` to get each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingVariable(name))
        };
        let seconds = |name: &'static str, default: u64| match lookup(name) {
            Some(value) => value.trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|source| ConfigError::InvalidNumber { name, source }),
            None => Ok(Duration::from_secs(default)),
        };
        let endpoint = lookup("PRACTICUM_ENDPOINT")
            .unwrap_or_else(|| DEFAULT_ENDPOINT.into())
            .parse::<Url>()
            .map_err(|source| ConfigError::InvalidUrl {
                name: "PRACTICUM_ENDPOINT",
                source,
            })?;

        Ok(Self {
            practicum_token: required("PRACTICUM_TOKEN")?,
            telegram_token: required("TELEGRAM_TOKEN")?,
            telegram_chat_id: required("TELEGRAM_CHAT_ID")?,
            endpoint,
            retry_time: seconds("RETRY_TIME", DEFAULT_RETRY_TIME_SECS)?,
            error_retry_time: seconds("ERROR_RETRY_TIME", DEFAULT_ERROR_RETRY_TIME_SECS)?,
            request_timeout: seconds("REQUEST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT_SECS)?,
        })
    }

    /// The [`PollOptions`] for these settings.
    pub fn poll_options(&self) -> PollOptions {
        PollOptions {
            retry_time: self.retry_time,
            error_retry_time: self.error_retry_time,
            ..PollOptions::default()
        }
    }
}

/// Settings for the log sink. Always loads so that configuration errors can be logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directives in `env_logger` syntax.
    pub filter: String,
    /// File to append logs to, in addition to standard output.
    pub file: Option<PathBuf>,
}

impl LogConfig {
    /// Reads the log settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the log settings using `lookup` to get each variable.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.into()),
            file: lookup("LOG_FILE")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        }
    }
}
