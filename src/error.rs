// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for deepchat
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for deepchat operations
#[derive(Error, Debug)]
pub enum ChatError {
    /// API-related errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client construction errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Terminal UI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

/// API-specific error types
///
/// Every variant that came from an HTTP exchange keeps the status code and the
/// raw response body so the chat transcript can show them verbatim.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Provider answered with a non-success status
    #[error("API error ({status}): {body}")]
    ServerError { status: u16, body: String },

    /// Provider answered 200 but the body had no usable completion
    #[error("Invalid API response ({status}): {body}")]
    InvalidResponse { status: u16, body: String },

    /// Network connectivity error (DNS, TLS, connection refused, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Timeout waiting for response
    #[error("Request timed out")]
    Timeout,
}

impl ApiError {
    /// HTTP status attached to this failure, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::ServerError { status, .. } | ApiError::InvalidResponse { status, .. } => {
                Some(*status)
            }
            ApiError::Network(_) | ApiError::Timeout => None,
        }
    }
}

/// Result type alias for deepchat operations
pub type Result<T> = std::result::Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_config() {
        let err = ChatError::Config("bad config".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("bad config"));
    }

    #[test]
    fn test_chat_error_tui() {
        let err = ChatError::Tui("no tty".to_string());
        assert!(err.to_string().contains("TUI error"));
    }

    #[test]
    fn test_chat_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let chat_err: ChatError = io_err.into();
        assert!(chat_err.to_string().contains("IO error"));
    }

    #[test]
    fn test_chat_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let chat_err: ChatError = json_err.into();
        assert!(chat_err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_chat_error_from_api_error() {
        let chat_err: ChatError = ApiError::Timeout.into();
        assert!(chat_err.to_string().contains("API error"));
    }

    #[test]
    fn test_api_error_server_error() {
        let err = ApiError::ServerError {
            status: 500,
            body: "internal server error".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("internal server error"));
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_api_error_invalid_response() {
        let err = ApiError::InvalidResponse {
            status: 200,
            body: "{}".to_string(),
        };
        assert!(err.to_string().contains("Invalid API response"));
        assert_eq!(err.status(), Some(200));
    }

    #[test]
    fn test_api_error_network_has_no_status() {
        let err = ApiError::Network("connection refused".to_string());
        assert!(err.to_string().contains("Network error"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_api_error_timeout() {
        let err = ApiError::Timeout;
        assert!(err.to_string().contains("timed out"));
        assert_eq!(err.status(), None);
    }
}
