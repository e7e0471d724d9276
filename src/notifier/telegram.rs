use super::Notifier;
use crate::error::Error;
use crate::helpers::{get_default_middleware, USER_AGENT_STRING};
use crate::types::HttpClient;
use std::time::Duration;
use serde::{Deserialize, Serialize};

const TELEGRAM_API_HOSTNAME: &str = "https://api.telegram.org";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Response envelope of the Telegram Bot API.
#[derive(Deserialize, Debug)]
struct TelegramResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramResponse {
    fn into_result(self) -> Result<(), Error> {
        if self.ok {
            Ok(())
        } else {
            Err(Error::Telegram(self.description.unwrap_or_else(|| "Unknown error".into())))
        }
    }
}

/// Sends messages to one chat through the Telegram Bot API.
#[derive(Debug, Clone)]
pub struct TelegramBot {
    client: HttpClient,
    token: String,
    hostname: String,
    /// The chat messages are sent to.
    pub chat_id: String,
}

impl TelegramBot {
    /// Creates a new [`TelegramBotBuilder`].
    pub fn builder(token: String, chat_id: String) -> TelegramBotBuilder {
        TelegramBotBuilder {
            token,
            chat_id,
            hostname: TELEGRAM_API_HOSTNAME.into(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
            client: None,
        }
    }

    fn get_method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.hostname, self.token, method)
    }
}

impl Notifier for TelegramBot {
    async fn send_message(&self, text: &str) -> Result<(), Error> {
        #[derive(Serialize, Debug)]
        struct SendMessageParams<'a> {
            chat_id: &'a str,
            text: &'a str,
        }

        let uri = self.get_method_url("sendMessage");
        let response = self.client.post(&uri)
            .json(&SendMessageParams {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        // Telegram describes rejected requests in the body, even for 4xx statuses.
        match serde_json::from_slice::<TelegramResponse>(&body) {
            Ok(body) => body.into_result(),
            Err(_) if !status.is_success() => Err(Error::Http(status)),
            Err(error) => Err(error.into()),
        }
    }
}

/// Builder for constructing a [`TelegramBot`].
#[derive(Debug, Clone)]
pub struct TelegramBotBuilder {
    token: String,
    chat_id: String,
    hostname: String,
    timeout: Duration,
    client: Option<HttpClient>,
}

impl TelegramBotBuilder {
    /// The Bot API server, e.g. a self-hosted one. Defaults to `https://api.telegram.org`.
    pub fn hostname(mut self, hostname: String) -> Self {
        self.hostname = hostname.trim_end_matches('/').into();
        self
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

    /// Builds the [`TelegramBot`].
    pub fn build(self) -> Result<TelegramBot, Error> {
        let client = match self.client {
            Some(client) => client,
            None => get_default_middleware(self.timeout, USER_AGENT_STRING)?,
        };

        Ok(TelegramBot {
            client,
            token: self.token,
            hostname: self.hostname,
            chat_id: self.chat_id,
        })
    }
}
