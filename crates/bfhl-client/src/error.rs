//! Error types for the submit client.

use thiserror::Error;

/// Errors that can occur while submitting a payload.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Network request failed.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body text, possibly empty.
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(String),

    /// I/O error while reading the attachment.
    #[error("I/O error: {0}")]
    Io(String),
}

impl ClientError {
    /// Returns a user-friendly message suitable for display in the form's
    /// error slot.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => {
                "Could not reach the endpoint. Check the endpoint URL and your connection."
                    .to_string()
            }
            Self::Status { status, .. } => {
                format!("The endpoint rejected the request (HTTP {status}).")
            }
            Self::Json(_) => "The endpoint returned a response that is not valid JSON.".to_string(),
            Self::Io(_) => "Could not read the attached file.".to_string(),
        }
    }

    /// Returns whether this error is potentially recoverable with a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Io(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for submit operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = ClientError::Network("connection refused".to_string());
        assert!(err.user_message().contains("endpoint URL"));

        let err = ClientError::Status {
            status: 500,
            body: String::new(),
        };
        assert!(err.user_message().contains("HTTP 500"));

        let err = ClientError::Json("expected value".to_string());
        assert!(err.user_message().contains("not valid JSON"));
    }

    #[test]
    fn test_retryable() {
        assert!(ClientError::Network("timeout".to_string()).is_retryable());
        assert!(ClientError::Io("permission denied".to_string()).is_retryable());
        assert!(
            !ClientError::Status {
                status: 400,
                body: String::new()
            }
            .is_retryable()
        );
        assert!(!ClientError::Json("trailing data".to_string()).is_retryable());
    }
}
