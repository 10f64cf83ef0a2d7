//! Homework status API client

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, error};

use crate::decode_json;
use crate::error::{ClientError, Result};

/// HTTP client for the homework status API
///
/// Issues one authenticated GET per call and returns the decoded JSON body.
/// The body is returned as a raw [`Value`]; checking its shape is up to the
/// caller.
#[derive(Debug, Clone)]
pub struct PracticumClient {
    /// Full URL of the homework statuses endpoint
    endpoint: String,
    /// OAuth token sent in the `Authorization` header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new status API client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the homework statuses endpoint
    /// * `token` - OAuth token of the student
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new status API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn authorization(&self) -> String {
        format!("OAuth {}", self.token)
    }

    /// Fetch homework statuses changed since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp (seconds) of the lower bound of the query window
    ///
    /// # Errors
    /// - [`ClientError::RequestFailed`] on transport failure
    /// - [`ClientError::ApiError`] if the status code is not exactly 200
    /// - [`ClientError::ParseError`] if the body is not JSON
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        debug!("Requesting homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, self.authorization())
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            error!(
                "Endpoint {} is unavailable. API response code: {}",
                self.endpoint,
                status.as_u16()
            );
            return Err(ClientError::api_error(status.as_u16(), &self.endpoint));
        }

        let body = response.text().await?;
        decode_json(&body).inspect_err(|e| error!("Failed to decode status API response: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server;

    #[test]
    fn test_client_creation() {
        let client = PracticumClient::new("https://example.com/statuses/", "token");
        assert_eq!(client.endpoint(), "https://example.com/statuses/");
    }

    #[test]
    fn test_authorization_header_value() {
        let client = PracticumClient::new("https://example.com/statuses/", "abc123");
        assert_eq!(client.authorization(), "OAuth abc123");
    }

    #[test]
    fn test_client_with_custom_client() {
        let client =
            PracticumClient::with_client("https://example.com/statuses/", "token", Client::new());
        assert_eq!(client.endpoint(), "https://example.com/statuses/");
    }

    #[tokio::test]
    async fn test_homework_statuses_sends_cursor_and_token() {
        let (base_url, server) =
            test_server::serve_once("200 OK", r#"{"homeworks": [], "current_date": 1000}"#).await;
        let client = PracticumClient::with_client(
            format!("{}/statuses/", base_url),
            "abc123",
            test_server::local_client(),
        );

        let value = client.homework_statuses(1000).await.unwrap();
        assert_eq!(value["current_date"], 1000);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /statuses/?from_date=1000 HTTP/1.1"));
        assert!(request.to_lowercase().contains("authorization: oauth abc123\r\n"));
    }

    #[tokio::test]
    async fn test_homework_statuses_server_error() {
        let (base_url, server) =
            test_server::serve_once("500 Internal Server Error", "oops").await;
        let endpoint = format!("{}/statuses/", base_url);
        let client = PracticumClient::with_client(
            endpoint.clone(),
            "abc123",
            test_server::local_client(),
        );

        let err = client.homework_statuses(1000).await.unwrap_err();
        server.await.unwrap();

        match err {
            ClientError::ApiError { status, endpoint: reported } => {
                assert_eq!(status, 500);
                assert_eq!(reported, endpoint);
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_homework_statuses_only_accepts_200() {
        let (base_url, server) =
            test_server::serve_once("201 Created", r#"{"homeworks": [], "current_date": 1}"#)
                .await;
        let client = PracticumClient::with_client(
            format!("{}/statuses/", base_url),
            "abc123",
            test_server::local_client(),
        );

        let err = client.homework_statuses(1000).await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, ClientError::ApiError { status: 201, .. }));
    }

    #[tokio::test]
    async fn test_homework_statuses_non_json_body() {
        let (base_url, server) =
            test_server::serve_once("200 OK", "<html>Bad Gateway</html>").await;
        let client = PracticumClient::with_client(
            format!("{}/statuses/", base_url),
            "abc123",
            test_server::local_client(),
        );

        let err = client.homework_statuses(1000).await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, ClientError::ParseError(_)));
    }
}
