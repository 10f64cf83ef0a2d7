//! Agent configuration
//!
//! Credentials come from the environment (optionally seeded from a `.env`
//! file). The poll interval is fixed; it lives here only so tests can build
//! a poller without touching the environment.

use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// Fixed delay between two poll cycles
pub const RETRY_TIME: Duration = Duration::from_secs(600);

/// Homework statuses endpoint of the Practicum API
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Telegram Bot API base URL
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
const PRACTICUM_ENDPOINT: &str = "PRACTICUM_ENDPOINT";
const TELEGRAM_API_URL: &str = "TELEGRAM_API_URL";

/// Agent configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the status API
    pub practicum_token: String,

    /// Bot token used to deliver notifications
    pub telegram_token: String,

    /// Chat that receives notifications
    pub telegram_chat_id: String,

    /// Homework statuses endpoint
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Delay between poll cycles
    pub poll_interval: Duration,
}

impl Config {
    /// Creates a configuration with default endpoints
    pub fn new(practicum_token: String, telegram_token: String, telegram_chat_id: String) -> Self {
        Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            poll_interval: RETRY_TIME,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional, default: Practicum homework statuses URL)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable lookup
    ///
    /// Empty values count as missing. Every missing required variable is
    /// reported at once.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let mut missing = Vec::new();
        let mut require = |key: &'static str| {
            let value = read(key);
            if value.is_none() {
                missing.push(key);
            }
            value.unwrap_or_default()
        };

        let practicum_token = require(PRACTICUM_TOKEN);
        let telegram_token = require(TELEGRAM_TOKEN);
        let telegram_chat_id = require(TELEGRAM_CHAT_ID);

        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables(missing));
        }

        let mut config = Self::new(practicum_token, telegram_token, telegram_chat_id);
        if let Some(endpoint) = read(PRACTICUM_ENDPOINT) {
            config.endpoint = endpoint;
        }
        if let Some(api_url) = read(TELEGRAM_API_URL) {
            config.telegram_api_url = api_url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut missing = Vec::new();
        for (name, value) in [
            (PRACTICUM_TOKEN, &self.practicum_token),
            (TELEGRAM_TOKEN, &self.telegram_token),
            (TELEGRAM_CHAT_ID, &self.telegram_chat_id),
        ] {
            if value.is_empty() {
                missing.push(name);
            }
        }
        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables(missing));
        }

        for (name, value) in [
            (PRACTICUM_ENDPOINT, &self.endpoint),
            (TELEGRAM_API_URL, &self.telegram_api_url),
        ] {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(ConfigError::InvalidUrl {
                    name,
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }
}

// Tokens stay out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}
