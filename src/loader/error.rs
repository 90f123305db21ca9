//! Typed errors for the people fetch

use thiserror::Error;

/// The one message users see when a fetch fails, whatever the cause
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load people. Please try again later.";

/// Failure modes of a people fetch
///
/// None of these are retried automatically; a reload is always user-driven.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint answered with a non-2xx status
    #[error("HTTP {0}")]
    Status(u16),

    /// Connection refused, DNS failure, timeout
    #[error("Network error: {0}")]
    Network(String),

    /// The body was not a JSON array of people
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Message shown in the error banner
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }

    pub fn from_http_status(status: reqwest::StatusCode) -> Self {
        FetchError::Status(status.as_u16())
    }

    /// Convert network/connection errors into typed FetchError
    pub fn from_network_error(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Network(format!("Request timeout: {}", e))
        } else if e.is_connect() {
            FetchError::Network(format!("Connection failed: {}", e))
        } else if let Some(status) = e.status() {
            Self::from_http_status(status)
        } else if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_http_status() {
        let err = FetchError::from_http_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(err, FetchError::Status(500)));
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn test_user_message_is_fixed() {
        let errors = [
            FetchError::Status(404),
            FetchError::Network("refused".to_string()),
            FetchError::Decode("expected array".to_string()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
        }
    }

    #[test]
    fn test_convert_to_anyhow() {
        let err: anyhow::Error = FetchError::Status(503).into();
        assert!(err.to_string().contains("503"));
    }
}
