//! Error types for the herald clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the status API or the chat API
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Endpoint answered with an unexpected status code
    #[error("Endpoint {endpoint} is unavailable. API response code: {status}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Endpoint that was called (credentials redacted)
        endpoint: String,
    },

    /// Response body is not valid JSON
    #[error("Response body is not valid JSON: {0}")]
    ParseError(String),

    /// Endpoint accepted the request but reported a failure in the body
    #[error("Request rejected: {0}")]
    Rejected(String),
}

impl ClientError {
    /// Create an API error from status code and endpoint
    pub fn api_error(status: u16, endpoint: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            endpoint: endpoint.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message() {
        let err = ClientError::api_error(500, "https://example.com/statuses/");
        assert_eq!(
            err.to_string(),
            "Endpoint https://example.com/statuses/ is unavailable. API response code: 500"
        );
    }
}
