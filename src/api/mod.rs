//! Client for the homework statuses API.

mod builder;

pub use builder::HomeworkAPIBuilder;

use crate::error::Error;
use crate::helpers::{check_api_errors, parses_response};
use crate::time::Timestamp;
use crate::types::HttpClient;
use serde::Serialize;
use serde_json::Value;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// A source of homework statuses.
#[allow(async_fn_in_trait)]
pub trait HomeworkSource {
    /// Gets the statuses of homeworks updated since `from_date`. The returned body has already
    /// been checked for embedded API errors but not for its shape.
    async fn get_homework_statuses(&self, from_date: Timestamp) -> Result<Value, Error>;
}

/// Fetches homework statuses over HTTP.
#[derive(Debug, Clone)]
pub struct HomeworkAPI {
    client: HttpClient,
    /// The OAuth token used to authorize requests.
    token: String,
    /// The URL of the homework statuses endpoint.
    pub endpoint: Url,
}

impl HomeworkAPI {
    /// Creates a new [`HomeworkAPIBuilder`].
    pub fn builder(token: String, endpoint: Url) -> HomeworkAPIBuilder {
        HomeworkAPIBuilder::new(token, endpoint)
    }

    fn authorization(&self) -> String {
        format!("OAuth {}", self.token)
    }
}

impl HomeworkSource for HomeworkAPI {
    async fn get_homework_statuses(&self, from_date: Timestamp) -> Result<Value, Error> {
        #[derive(Serialize, Debug)]
        struct GetHomeworkStatusesParams {
            from_date: Timestamp,
        }

        let response = self.client.get(self.endpoint.clone())
            .header(reqwest::header::AUTHORIZATION, self.authorization())
            .query(&GetHomeworkStatusesParams {
                from_date,
            })
            .send()
            .await?;
        let body: Value = parses_response(response).await?;

        check_api_errors(&body)?;

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::OneShotServer;
    use std::time::Duration;

    fn api(server: &OneShotServer) -> HomeworkAPI {
        let endpoint = format!("{}/api/user_api/homework_statuses/", server.base_url)
            .parse::<Url>()
            .unwrap();

        HomeworkAPI::builder(String::from("tok"), endpoint)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap()
    }

    #[test]
    fn uses_oauth_authorization() {
        let endpoint = DEFAULT_ENDPOINT.parse::<Url>().unwrap();
        let api = HomeworkAPI::builder(String::from("secret"), endpoint).build().unwrap();

        assert_eq!(api.authorization(), "OAuth secret");
        assert_eq!(api.endpoint.as_str(), DEFAULT_ENDPOINT);
    }

    #[tokio::test]
    async fn requests_statuses_since_date_with_token() {
        let server = OneShotServer::start("200 OK", r#"{"homeworks":[],"current_date":1000}"#).await;
        let body = api(&server).get_homework_statuses(1000).await.unwrap();
        let request = server.request().await;

        assert_eq!(body["current_date"], 1000);
        assert!(request.starts_with("GET /api/user_api/homework_statuses/?from_date=1000 HTTP/1.1"));
        assert!(request.to_lowercase().contains("authorization: oauth tok\r\n"));
    }

    #[tokio::test]
    async fn unavailable_service_is_http_error() {
        let server = OneShotServer::start("503 Service Unavailable", "").await;
        let error = api(&server).get_homework_statuses(1000).await.unwrap_err();

        assert!(matches!(error, Error::Http(status) if status.as_u16() == 503));
    }

    #[tokio::test]
    async fn error_in_body_is_api_payload_error() {
        let server = OneShotServer::start("200 OK", r#"{"error":"not found"}"#).await;
        let error = api(&server).get_homework_statuses(1000).await.unwrap_err();

        assert!(matches!(error, Error::ApiPayload { key: "error", .. }));
    }

    #[tokio::test]
    async fn code_in_error_status_body_is_api_payload_error() {
        let server = OneShotServer::start(
            "401 Unauthorized",
            r#"{"code":"not_authenticated","message":"Учетные данные не были предоставлены."}"#,
        ).await;
        let error = api(&server).get_homework_statuses(1000).await.unwrap_err();

        assert!(matches!(
            error,
            Error::ApiPayload { key: "code", ref value } if value == "not_authenticated"
        ));
    }

    #[tokio::test]
    async fn non_json_body_is_parse_error() {
        let server = OneShotServer::start("200 OK", "<html></html>").await;
        let error = api(&server).get_homework_statuses(1000).await.unwrap_err();

        assert!(matches!(error, Error::Parse(_)));
    }
}
