//! RunPod client implementation

use super::converter::{from_runsync_response, to_runsync_request, validate_options};
use crate::config::{ConfigError, RunPodConfig, ValidationError};
use crate::http::error::map_http_error;
use crate::http::{RequestOptions, REQUEST_ID_HEADER, USER_AGENT};
use crate::protocol::{ChatResult, GenerateOptions, Message};
use crate::providers::adapter::{ChatModel, IdentifyingParams};
use crate::providers::error::{RunPodError, RunPodResult};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Model type reported by [`ChatModel::llm_type`]
pub const LLM_TYPE: &str = "runpod-chat";

/// Chat model backed by a RunPod serverless endpoint
#[derive(Debug, Clone)]
pub struct RunPodChatModel {
    config: RunPodConfig,
    client: Client,
    auth_header: HeaderValue,
}

impl RunPodChatModel {
    /// Create a chat model, validating the configuration up front
    pub fn new(config: RunPodConfig) -> RunPodResult<Self> {
        config.validate()?;

        let mut auth_header =
            HeaderValue::from_str(&format!("Bearer {}", config.api_key.expose_secret()))
                .map_err(|_| {
                    ValidationError::invalid_format(
                        "api_key",
                        "contains characters not allowed in an HTTP header",
                    )
                })?;
        auth_header.set_sensitive(true);

        let client = ClientBuilder::new()
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()
            .map_err(|e| ConfigError::HttpClient {
                message: e.to_string(),
            })?;

        debug!(
            endpoint_id = %config.endpoint_id,
            max_tokens = config.max_tokens,
            temperature = config.temperature,
            "Created RunPod chat model"
        );

        Ok(Self {
            config,
            client,
            auth_header,
        })
    }

    /// Create a chat model from `RUNPOD_*` environment variables
    pub fn from_env() -> RunPodResult<Self> {
        Self::new(RunPodConfig::from_env()?)
    }

    /// The configuration this model was built with
    pub fn config(&self) -> &RunPodConfig {
        &self.config
    }

    /// POST a `runsync` body and decode the JSON response
    async fn post_runsync(
        &self,
        body: &super::types::RunSyncRequest,
        options: &RequestOptions,
    ) -> RunPodResult<Value> {
        let request_id = options.request_id;
        let url = self.config.runsync_url();
        debug!("Request URL: {} [request_id: {}]", url, request_id);

        let response = self
            .client
            .post(&url)
            .timeout(options.timeout)
            .header(AUTHORIZATION, self.auth_header.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!(
                        "Request timeout for endpoint {} [request_id: {}]",
                        self.config.endpoint_id, request_id
                    );
                } else {
                    error!(
                        "Request error for endpoint {} [request_id: {}]: {}",
                        self.config.endpoint_id, request_id, e
                    );
                }
                RunPodError::from(e)
            })?;

        let status = response.status();
        debug!("Response status: {} [request_id: {}]", status, request_id);

        if !status.is_success() {
            let body = response.text().await.ok();
            warn!(
                "Request failed with status {} for endpoint {} [request_id: {}]",
                status, self.config.endpoint_id, request_id
            );
            return Err(map_http_error(status, body, request_id));
        }

        let text = response.text().await.map_err(RunPodError::from)?;
        serde_json::from_str(&text).map_err(|e| {
            error!(
                "Failed to parse response from endpoint {} [request_id: {}]: {}",
                self.config.endpoint_id, request_id, e
            );
            RunPodError::request(
                format!("invalid JSON in response body: {} [request_id: {}]", e, request_id),
                Some(status.as_u16()),
            )
        })
    }
}

#[async_trait]
impl ChatModel for RunPodChatModel {
    fn llm_type(&self) -> &str {
        LLM_TYPE
    }

    fn identifying_params(&self) -> IdentifyingParams {
        IdentifyingParams {
            endpoint_id: self.config.endpoint_id.clone(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        }
    }

    async fn generate(
        &self,
        messages: &[Message],
        options: GenerateOptions,
    ) -> RunPodResult<ChatResult> {
        if messages.is_empty() {
            return Err(RunPodError::InvalidRequest(
                "conversation must contain at least one message".to_string(),
            ));
        }

        validate_options(&options)?;

        let request_options = RequestOptions::new(self.config.timeout());
        let request_id = request_options.request_id;
        let body = to_runsync_request(messages, &self.config, &options);

        info!(
            "Executing runsync request to endpoint {} [request_id: {}]",
            self.config.endpoint_id, request_id
        );
        debug!(
            messages = messages.len(),
            max_tokens = body.input.max_tokens,
            temperature = body.input.temperature,
            stop = body.input.stop.as_ref().map_or(0, Vec::len),
            "Generation parameters [request_id: {}]",
            request_id
        );

        let response = self.post_runsync(&body, &request_options).await?;
        let result = from_runsync_response(response)?;

        info!(
            "Request completed successfully for endpoint {} [request_id: {}]",
            self.config.endpoint_id, request_id
        );

        Ok(result)
    }
}
