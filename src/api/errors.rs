use thiserror::Error;

use super::types::ErrorBody;

/// Typed error enum for media server requests
///
/// The sequencer turns these into status text, so the variants follow what
/// a kiosk visitor can be told: the server answered with an error, the
/// server could not be reached, or the answer made no sense.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-success HTTP status. `message` carries the server supplied text
    /// (`error` or `message` field of the JSON body) when there was one.
    #[error("Server error: {} (status: {status})", message.as_deref().unwrap_or("<no message>"))]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// Network/connection errors (timeout, connection refused, etc.)
    #[error("Network error: {0}")]
    Network(String),

    /// JSON parsing errors on a success response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The configured server address or a derived URL is unusable
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Generic errors for cases not covered above
    #[error("API error: {0}")]
    Other(String),
}

impl ApiError {
    /// Whether no usable HTTP answer came back at all
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Server supplied message for status errors
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Create an error from a reqwest error
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ApiError::Network(format!("Request timeout: {}", error))
        } else if error.is_connect() {
            ApiError::Network(format!("Connection failed: {}", error))
        } else if error.is_request() || error.is_body() {
            ApiError::Network(format!("Request error: {}", error))
        } else if error.is_decode() {
            ApiError::ParseError(error.to_string())
        } else {
            ApiError::Other(error.to_string())
        }
    }

    /// Create an error from an HTTP status code and the raw response body
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message);

        ApiError::Status { status, message }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::ParseError(error.to_string())
    }
}
