//! Herald HTTP Clients
//!
//! Typed HTTP clients for the two remote services the herald talks to:
//! - [`PracticumClient`]: the homework status API that is polled
//! - [`TelegramClient`]: the Telegram Bot API used to deliver notifications
//!
//! Neither client retries. A failed call is returned to the caller as a
//! [`ClientError`] and retrying is left to the polling loop.
//!
//! # Example
//!
//! ```no_run
//! use herald_client::{PracticumClient, TelegramClient};
//!
//! #[tokio::main]
//! async fn main() -> herald_client::Result<()> {
//!     let practicum = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "practicum-token",
//!     );
//!     let statuses = practicum.homework_statuses(0).await?;
//!
//!     let telegram = TelegramClient::new("https://api.telegram.org", "bot-token");
//!     telegram.send_message("12345", &statuses.to_string()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;
#[cfg(test)]
mod test_server;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use practicum::PracticumClient;
pub use telegram::TelegramClient;

use serde::de::DeserializeOwned;

/// Decodes a response body as JSON
///
/// Bodies are read as text first so a malformed body is reported as
/// [`ClientError::ParseError`] rather than as a transport failure.
fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| ClientError::ParseError(e.to_string()))
}
