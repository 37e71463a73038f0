//! Error types for the API client

use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Message of every failed upload
pub const UPLOAD_FAILED: &str = "Upload failed";

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    ///
    /// Displays as the server-provided `error` string, or `HTTP <status>`
    /// when the body carried none.
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Server-provided error or the `HTTP <status>` fallback
        message: String,
    },

    /// An image upload was rejected. The body is never inspected.
    #[error("Upload failed")]
    Upload {
        /// HTTP status code
        status: u16,
    },

    /// The request could not complete (DNS, connect, body decode)
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Request body serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a file for upload failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Caller supplied a header that is not valid HTTP
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of a rejected request, if there was a response
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Upload { status } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| s >= 500)
    }

    /// Check if the backend reported the resource missing
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_message_only() {
        let err = ApiError::api(404, "Product not found");
        assert_eq!(err.to_string(), "Product not found");
        assert!(err.is_client_error());
        assert!(err.is_not_found());
        assert!(!err.is_server_error());
    }

    #[test]
    fn test_upload_error_message_is_fixed() {
        let err = ApiError::Upload { status: 500 };
        assert_eq!(err.to_string(), UPLOAD_FAILED);
        assert!(err.is_server_error());
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_config_error_has_no_status() {
        let err = ApiError::config("base_url cannot be empty");
        assert_eq!(err.status(), None);
        assert!(!err.is_client_error());
    }
}
