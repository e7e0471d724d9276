use crate::error::Error;
use crate::types::HttpClient;
use std::time::Duration;
use reqwest::{header, StatusCode};
use reqwest_middleware::ClientBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const USER_AGENT_STRING: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Keys the homework API uses to report an error inside a response body.
const API_ERROR_KEYS: [&str; 2] = ["error", "code"];

/// Builds the default client. Every request made with it is bounded by `timeout`.
pub fn get_default_middleware(
    timeout: Duration,
    user_agent_string: &'static str,
) -> Result<HttpClient, Error> {
    let mut headers = header::HeaderMap::new();

    headers.insert(header::USER_AGENT, header::HeaderValue::from_static(user_agent_string));

    let client = reqwest::ClientBuilder::new()
        .default_headers(headers)
        .timeout(timeout)
        .build()?;

    Ok(ClientBuilder::new(client).build())
}

/// Reads the body of a response, failing on any status other than 200. An error the API
/// describes in the body takes precedence over the status.
pub async fn check_status(response: reqwest::Response) -> Result<bytes::Bytes, Error> {
    let status = response.status();
    let body = response.bytes().await;

    if status != StatusCode::OK {
        if let Some(body) = body.ok().and_then(|body| serde_json::from_slice::<Value>(&body).ok()) {
            check_api_errors(&body)?;
        }

        return Err(Error::Http(status));
    }

    Ok(body?)
}

/// Checks the status of a response and deserializes its body.
pub async fn parses_response<D>(response: reqwest::Response) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    let body = check_status(response).await?;

    Ok(serde_json::from_slice::<D>(&body)?)
}

/// Fails if the body carries an `error` or `code` key.
pub fn check_api_errors(body: &Value) -> Result<(), Error> {
    for key in API_ERROR_KEYS {
        if let Some(value) = body.get(key) {
            let value = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };

            return Err(Error::ApiPayload { key, value });
        }
    }

    Ok(())
}
