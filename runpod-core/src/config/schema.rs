//! Configuration schema for a RunPod endpoint

use super::env::{optional_var, required_var};
use super::error::{ConfigError, ValidationError};
use super::secrets::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default public API host
pub const DEFAULT_BASE_URL: &str = "https://api.runpod.ai";

/// Default number of tokens to generate
pub const DEFAULT_MAX_TOKENS: u32 = 512;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default request timeout (5 minutes)
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Connection and generation settings for one RunPod serverless endpoint
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RunPodConfig {
    /// Endpoint identifier of the deployed worker
    pub endpoint_id: String,

    /// API key (supports environment variable interpolation in files)
    pub api_key: SecretString,

    /// Default maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Default sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Base URL of the RunPod API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl RunPodConfig {
    /// Create a configuration with default generation parameters
    pub fn new(endpoint_id: impl Into<String>, api_key: impl Into<SecretString>) -> Self {
        Self {
            endpoint_id: endpoint_id.into(),
            api_key: api_key.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Build a configuration from `RUNPOD_*` environment variables
    ///
    /// `RUNPOD_ENDPOINT_ID` and `RUNPOD_API_KEY` are required.
    /// `RUNPOD_MAX_TOKENS`, `RUNPOD_TEMPERATURE`, `RUNPOD_BASE_URL` and
    /// `RUNPOD_TIMEOUT_SECS` override the defaults when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::new(
            required_var("RUNPOD_ENDPOINT_ID")?,
            required_var("RUNPOD_API_KEY")?,
        );

        if let Some(max_tokens) = optional_var("RUNPOD_MAX_TOKENS")? {
            config.max_tokens = max_tokens;
        }
        if let Some(temperature) = optional_var("RUNPOD_TEMPERATURE")? {
            config.temperature = temperature;
        }
        if let Some(base_url) = optional_var::<String>("RUNPOD_BASE_URL")? {
            config.base_url = base_url;
        }
        if let Some(timeout_secs) = optional_var("RUNPOD_TIMEOUT_SECS")? {
            config.timeout_secs = timeout_secs;
        }

        config.validate()?;
        Ok(config)
    }

    /// Set the default max tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the default temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Point the client at a different API host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the synchronous run route for this endpoint
    pub fn runsync_url(&self) -> String {
        format!(
            "{}/v2/{}/runsync",
            self.base_url.trim_end_matches('/'),
            self.endpoint_id
        )
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.endpoint_id.trim().is_empty() {
            return Err(ValidationError::required("endpoint_id")
                .with_context("RunPod endpoint ID must be a non-empty string"));
        }

        // The endpoint ID is spliced into the URL path
        if self
            .endpoint_id
            .chars()
            .any(|c| c == '/' || c == '?' || c == '#' || c.is_whitespace())
        {
            return Err(ValidationError::invalid_format(
                "endpoint_id",
                format!("'{}' is not a valid endpoint ID", self.endpoint_id),
            ));
        }

        if self.api_key.expose_secret().trim().is_empty() {
            return Err(ValidationError::required("api_key")
                .with_context("RunPod API key must be a non-empty string"));
        }

        if self.max_tokens == 0 {
            return Err(ValidationError::out_of_range(
                "max_tokens",
                "Must be greater than 0",
            ));
        }

        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(ValidationError::out_of_range(
                "temperature",
                format!("Must be a non-negative number, got {}", self.temperature),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(ValidationError::out_of_range(
                "timeout_secs",
                "Must be greater than 0",
            ));
        }

        match url::Url::parse(&self.base_url) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    return Err(ValidationError::invalid_url(
                        "base_url",
                        format!("URL scheme must be http or https, got: {}", url.scheme()),
                    ));
                }
            }
            Err(e) => {
                return Err(ValidationError::invalid_url(
                    "base_url",
                    format!("'{}': {}", self.base_url, e),
                ));
            }
        }

        Ok(())
    }
}
