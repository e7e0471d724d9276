//! Error types.

use reqwest::StatusCode;
use std::num::ParseIntError;

/// Any error that can occur during a poll cycle.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The URL is stripped since it can carry a token.
    #[error("Request error: {}", .0)]
    Reqwest(reqwest::Error),
    #[error("Request middleware error: {}", .0)]
    ReqwestMiddleware(anyhow::Error),
    #[error("Unexpected response status {}", .0)]
    Http(StatusCode),
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    /// The API answered with an `error` or `code` key in the body.
    #[error("API responded with {}: {}", .key, .value)]
    ApiPayload {
        key: &'static str,
        value: String,
    },
    #[error("Missing key \"{}\" in response", .0)]
    MissingKey(&'static str),
    #[error("Expected \"{}\" to be {}", .key, .expected)]
    UnexpectedType {
        key: &'static str,
        expected: &'static str,
    },
    #[error("Missing field \"{}\" in homework", .0)]
    MissingField(&'static str),
    #[error("Unexpected homework status: {}", .0)]
    UnknownStatus(String),
    #[error("No homeworks in response")]
    NoHomeworks,
    /// The message was rejected by Telegram.
    #[error("Telegram error: {}", .0)]
    Telegram(String),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Error {
        Error::Reqwest(error.without_url())
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Error {
        match error {
            reqwest_middleware::Error::Reqwest(e) => e.into(),
            reqwest_middleware::Error::Middleware(e) => Error::ReqwestMiddleware(e),
        }
    }
}

/// Errors reading configuration at startup. These are fatal.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable \"{}\"", .0)]
    MissingVariable(&'static str),
    #[error("Environment variable \"{}\" is not a valid number: {}", .name, .source)]
    InvalidNumber {
        name: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error("Environment variable \"{}\" is not a valid URL: {}", .name, .source)]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
}
