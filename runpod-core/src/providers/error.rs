//! Provider error types and handling

use crate::config::{ConfigError, ValidationError};
use thiserror::Error;

/// Result type for provider operations
pub type RunPodResult<T> = Result<T, RunPodError>;

/// Errors surfaced by a chat model
#[derive(Debug, Error)]
pub enum RunPodError {
    /// Missing or invalid endpoint configuration
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// The call itself was malformed (e.g. an empty conversation)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Transport failure, timeout, non-success status or undecodable body
    #[error("Request to RunPod failed: {message}")]
    Request {
        message: String,
        status: Option<u16>,
        timed_out: bool,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The service answered but reported an application-level error
    #[error("RunPod error: {0}")]
    Remote(String),
}

impl RunPodError {
    /// Build a request error without an underlying transport error
    pub fn request(message: impl Into<String>, status: Option<u16>) -> Self {
        RunPodError::Request {
            message: message.into(),
            status,
            timed_out: false,
            source: None,
        }
    }

    /// HTTP status of a failed request, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            RunPodError::Request { status, .. } => *status,
            _ => None,
        }
    }

    /// Whether the request was abandoned after the configured timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, RunPodError::Request { timed_out: true, .. })
    }
}

impl From<ValidationError> for RunPodError {
    fn from(err: ValidationError) -> Self {
        RunPodError::Configuration(ConfigError::ValidationError(err))
    }
}

impl From<reqwest::Error> for RunPodError {
    fn from(err: reqwest::Error) -> Self {
        let timed_out = err.is_timeout();
        let status = err.status().map(|s| s.as_u16());
        let message = if timed_out {
            format!("request timed out: {}", err)
        } else if err.is_connect() {
            format!("connection failed: {}", err)
        } else if err.is_decode() {
            format!("invalid response body: {}", err)
        } else {
            err.to_string()
        };

        RunPodError::Request {
            message,
            status,
            timed_out,
            source: Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_message() {
        let err = RunPodError::Remote("quota exceeded".to_string());
        assert_eq!(err.to_string(), "RunPod error: quota exceeded");
    }

    #[test]
    fn test_request_error_accessors() {
        let err = RunPodError::request("HTTP 503: busy", Some(503));
        assert_eq!(err.status(), Some(503));
        assert!(!err.is_timeout());
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[test]
    fn test_validation_error_becomes_configuration() {
        let err: RunPodError = ValidationError::required("api_key").into();
        assert!(matches!(err, RunPodError::Configuration(_)));
    }
}
