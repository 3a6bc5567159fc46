//! Errors raised while loading or checking a RunPod endpoint configuration

use std::fmt;
use thiserror::Error;

/// Failure to produce a usable [`RunPodConfig`](super::RunPodConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read RunPod config file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("RunPod config file '{path}' is malformed (line {}, column {}): {message}",
            .line.unwrap_or(0), .column.unwrap_or(0))]
    ParseError {
        path: String,
        line: Option<usize>,
        column: Option<usize>,
        message: String,
    },

    #[error("invalid RunPod config: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("environment variable '{var}' is not set")]
    EnvVarNotFound { var: String },

    #[error("environment variable '{var}' cannot be used: {message}")]
    InvalidEnvVar { var: String, message: String },

    #[error("cannot build HTTP client for RunPod: {message}")]
    HttpClient { message: String },
}

/// A single rejected setting, named by its config key
#[derive(Debug, Error)]
pub struct ValidationError {
    /// Config key that was rejected, e.g. `endpoint_id`
    pub field_path: String,
    pub kind: ValidationErrorKind,
    /// Hint for the operator, such as which variable to set
    pub context: Option<String>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "setting '{}' {}", self.field_path, self.kind)?;
        if let Some(hint) = &self.context {
            write!(f, "; {}", hint)?;
        }
        Ok(())
    }
}

/// Why a setting was rejected
#[derive(Debug, Error)]
pub enum ValidationErrorKind {
    #[error("is empty")]
    RequiredFieldMissing,

    /// Numeric setting outside what the RunPod worker accepts
    #[error("is out of bounds: {message}")]
    OutOfRange { message: String },

    /// Text that cannot be placed into the runsync path
    #[error("is not a usable identifier: {message}")]
    InvalidFormat { message: String },

    #[error("is not an http(s) base URL: {message}")]
    InvalidUrl { message: String },
}

impl ValidationError {
    pub fn new(field_path: impl Into<String>, kind: ValidationErrorKind) -> Self {
        Self {
            field_path: field_path.into(),
            kind,
            context: None,
        }
    }

    /// Attach an operator hint
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn required(field_path: impl Into<String>) -> Self {
        Self::new(field_path, ValidationErrorKind::RequiredFieldMissing)
    }

    pub fn out_of_range(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            field_path,
            ValidationErrorKind::OutOfRange {
                message: message.into(),
            },
        )
    }

    pub fn invalid_format(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            field_path,
            ValidationErrorKind::InvalidFormat {
                message: message.into(),
            },
        )
    }

    pub fn invalid_url(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            field_path,
            ValidationErrorKind::InvalidUrl {
                message: message.into(),
            },
        )
    }
}
