//! Error types for Genie
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.
//!
//! Errors fall into two families. Precondition failures block an action
//! before any request is made and never touch the thread. Transport or
//! status failures come from the inference API and are turned into notices
//! and assistant messages by the chat controller.

use thiserror::Error;

/// Main error type for Genie operations
#[derive(Error, Debug)]
pub enum GenieError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The question was empty after trimming
    #[error("Question cannot be empty")]
    EmptyQuestion,

    /// No model is selected, so no request can be made
    #[error("No model selected")]
    NoModelSelected,

    /// Another exchange is still awaiting its response
    #[error("An exchange is already in progress")]
    ExchangeInFlight,

    /// The requested model is not part of the catalog
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    /// Network, DNS, TLS, or timeout failure talking to the API
    #[error("Connection failed: {0}")]
    Transport(String),

    /// The API answered with a status outside 2xx
    #[error("HTTP error! status: {status}")]
    HttpStatus {
        /// HTTP status code returned by the server
        status: u16,
    },

    /// The API answered 2xx but the body could not be understood
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The model listing answered 2xx with an `error` payload
    #[error("{0}")]
    Upstream(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP client construction errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Line editor errors
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

impl GenieError {
    /// Returns true for errors that block an action before any request
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::EmptyQuestion
                | Self::NoModelSelected
                | Self::ExchangeInFlight
                | Self::UnknownModel(_)
        )
    }

    /// Returns true for errors produced by talking to the inference API
    pub fn is_transport_or_status(&self) -> bool {
        matches!(
            self,
            Self::Transport(_)
                | Self::HttpStatus { .. }
                | Self::MalformedResponse(_)
                | Self::Upstream(_)
        )
    }
}

/// Result type alias for Genie operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = GenieError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_http_status_display_matches_notice_text() {
        let error = GenieError::HttpStatus { status: 500 };
        assert_eq!(error.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn test_upstream_error_display_is_verbatim() {
        let error = GenieError::Upstream("Failed to process request: boom".to_string());
        assert_eq!(error.to_string(), "Failed to process request: boom");
    }

    #[test]
    fn test_precondition_classification() {
        assert!(GenieError::EmptyQuestion.is_precondition());
        assert!(GenieError::NoModelSelected.is_precondition());
        assert!(GenieError::ExchangeInFlight.is_precondition());
        assert!(GenieError::UnknownModel("x".to_string()).is_precondition());
        assert!(!GenieError::Transport("refused".to_string()).is_precondition());
    }

    #[test]
    fn test_transport_classification() {
        assert!(GenieError::Transport("refused".to_string()).is_transport_or_status());
        assert!(GenieError::HttpStatus { status: 404 }.is_transport_or_status());
        assert!(GenieError::MalformedResponse("eof".to_string()).is_transport_or_status());
        assert!(!GenieError::NoModelSelected.is_transport_or_status());
        assert!(!GenieError::Config("x".to_string()).is_transport_or_status());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: GenieError = io_error.into();
        assert!(matches!(error, GenieError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let error: GenieError = json_error.into();
        assert!(matches!(error, GenieError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>("invalid: : yaml").unwrap_err();
        let error: GenieError = yaml_error.into();
        assert!(matches!(error, GenieError::Yaml(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GenieError>();
    }
}
