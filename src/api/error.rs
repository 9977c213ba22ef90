//! API Errors
//!
//! One error type for every way a backend call can fail.

use serde_json::Value;
use thiserror::Error;

/// Generic text shown instead of an HTML error page
pub const SERVER_ERROR_MESSAGE: &str = "Server error occurred. Please try again later.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never completed or its body could not be read
    #[error("{0}")]
    Network(String),

    /// Non-2xx status with a readable body
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        /// Parsed JSON error body, when the backend sent one
        payload: Option<Value>,
    },

    /// Non-2xx status whose body was an HTML error page
    #[error("Server error occurred. Please try again later.")]
    ServerError { status: u16 },

    /// Body did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Request body could not be built
    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } | ApiError::ServerError { status } => Some(*status),
            _ => None,
        }
    }

    /// The request never got an HTTP answer
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            ApiError::Http { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }

    /// `message` field of a JSON error body, if present
    pub fn payload_message(&self) -> Option<&str> {
        self.payload()?.get("message")?.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display() {
        let err = ApiError::ServerError { status: 502 };
        assert_eq!(err.to_string(), SERVER_ERROR_MESSAGE);
        assert_eq!(err.status(), Some(502));

        let err = ApiError::Http { status: 400, message: "Bad title".into(), payload: Some(json!({"message": "Bad title"})) };
        assert_eq!(err.to_string(), "Bad title");
        assert_eq!(err.payload_message(), Some("Bad title"));

        assert_eq!(ApiError::Network("Failed to fetch".into()).status(), None);
    }
}
