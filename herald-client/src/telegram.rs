//! Telegram Bot API client

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decode_json;
use crate::error::{ClientError, Result};

/// Request body of `sendMessage`
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope every Bot API method answers with
#[derive(Debug, Deserialize)]
struct BotResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// HTTP client for the Telegram Bot API
#[derive(Debug, Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org")
    api_url: String,
    /// Bot token
    token: String,
    /// HTTP client instance
    client: Client,
}

impl TelegramClient {
    /// Create a new Bot API client
    ///
    /// # Arguments
    /// * `api_url` - Base URL of the Bot API
    /// * `token` - Bot token issued by BotFather
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(api_url, token, Client::new())
    }

    /// Create a new Bot API client with a custom HTTP client
    pub fn with_client(
        api_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the base URL of the Bot API
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }

    /// Method URL safe to put in logs and error messages
    fn redacted_method_url(&self, method: &str) -> String {
        format!("{}/bot<redacted>/{}", self.api_url, method)
    }

    /// Send a text message to a chat
    ///
    /// # Arguments
    /// * `chat_id` - Target chat identifier
    /// * `text` - Message text
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        debug!("Sending message to chat {}", chat_id);

        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&SendMessage { chat_id, text })
            .send()
            .await
            .map_err(without_url)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::api_error(
                status.as_u16(),
                self.redacted_method_url("sendMessage"),
            ));
        }

        let body = response.text().await.map_err(without_url)?;
        check_bot_response(&body)
    }
}

/// Transport errors carry the request URL, which embeds the bot token.
fn without_url(error: reqwest::Error) -> ClientError {
    ClientError::RequestFailed(error.without_url())
}

fn check_bot_response(body: &str) -> Result<()> {
    let response: BotResponse = decode_json(body)?;
    if response.ok {
        Ok(())
    } else {
        Err(ClientError::Rejected(
            response
                .description
                .unwrap_or_else(|| "Unknown error".to_string()),
        ))
    }
}
