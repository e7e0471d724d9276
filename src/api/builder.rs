use super::HomeworkAPI;
use crate::error::Error;
use crate::helpers::{get_default_middleware, USER_AGENT_STRING};
use crate::types::HttpClient;
use std::time::Duration;
use url::Url;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for constructing a [`HomeworkAPI`].
#[derive(Debug, Clone)]
pub struct HomeworkAPIBuilder {
    /// The OAuth token for the homework API.
    pub(crate) token: String,
    /// The endpoint to request.
    pub(crate) endpoint: Url,
    /// Timeout for each request. Defaults to 30 seconds.
    pub(crate) timeout: Duration,
    /// Client to use for requests. When set, `timeout` is not applied.
    pub(crate) client: Option<HttpClient>,
    /// User agent for requests.
    pub(crate) user_agent: &'static str,
}

impl HomeworkAPIBuilder {
    /// Creates a new [`HomeworkAPIBuilder`].
    pub fn new(token: String, endpoint: Url) -> Self {
        Self {
            token,
            endpoint,
            timeout: DEFAULT_REQUEST_TIMEOUT,
            client: None,
            user_agent: USER_AGENT_STRING,
        }
    }

    /// The timeout for each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Client to use for requests.
    pub fn client(mut self, client: HttpClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Builds the [`HomeworkAPI`].
    pub fn build(self) -> Result<HomeworkAPI, Error> {
        let client = match self.client {
            Some(client) => client,
            None => get_default_middleware(self.timeout, self.user_agent)?,
        };

        Ok(HomeworkAPI {
            client,
            token: self.token,
            endpoint: self.endpoint,
        })
    }
}
