//! Notifier
//!
//! Delivers notification texts to the configured Telegram chat.

use async_trait::async_trait;
use herald_client::TelegramClient;

use crate::error::NotifyError;

/// Repository trait for delivering notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers `text` to the chat
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// Telegram implementation of Notifier
pub struct TelegramNotifier {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramNotifier {
    /// Creates a notifier bound to one chat
    ///
    /// # Arguments
    /// * `client` - Bot API client
    /// * `chat_id` - Chat that receives every message
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        self.client.send_message(&self.chat_id, text).await?;
        Ok(())
    }
}
