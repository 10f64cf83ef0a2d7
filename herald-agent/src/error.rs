//! Error taxonomy of the polling agent

use herald_client::ClientError;
use herald_core::{RecordError, SchemaError};
use thiserror::Error;

/// A failure inside one poll cycle
///
/// Every variant is recoverable: the poller reports it to the chat and
/// carries on with the next cycle.
#[derive(Debug, Error)]
pub enum CycleError {
    /// Status API unreachable, non-OK status or undecodable body
    #[error(transparent)]
    Endpoint(#[from] ClientError),

    /// Payload does not have the expected shape
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// First homework record is malformed
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Status notification could not be delivered
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// Delivering a notification failed
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Failed to deliver notification: {0}")]
    Delivery(#[from] ClientError),
}

/// Required configuration is absent or unusable
///
/// This is the only fatal error: the agent stops before polling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),

    #[error("{name} must start with http:// or https:// (got {value})")]
    InvalidUrl { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_error_is_transparent() {
        let err = CycleError::from(SchemaError::MissingKey("homeworks"));
        assert_eq!(err.to_string(), "API response is missing the `homeworks` key");
    }

    #[test]
    fn test_missing_variables_lists_all_names() {
        let err = ConfigError::MissingVariables(vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"]);
        assert_eq!(
            err.to_string(),
            "Missing required environment variables: PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"
        );
    }
}
