//! Conversion between chat protocol types and the RunPod wire format

use super::types::{RunSyncInput, RunSyncRequest, RunSyncResponse};
use crate::config::RunPodConfig;
use crate::protocol::{ChatResult, GenerateOptions, Message};
use crate::providers::error::{RunPodError, RunPodResult};
use crate::providers::extract::{stringify, Extraction};
use crate::providers::prompt::render_prompt;
use serde_json::Value;
use tracing::warn;

/// Check per-call overrides against the same bounds as the configured defaults
pub fn validate_options(options: &GenerateOptions) -> RunPodResult<()> {
    if options.max_tokens == Some(0) {
        return Err(RunPodError::InvalidRequest(
            "max_tokens override must be greater than 0".to_string(),
        ));
    }

    if let Some(temperature) = options.temperature {
        if !temperature.is_finite() || temperature < 0.0 {
            return Err(RunPodError::InvalidRequest(format!(
                "temperature override must be a non-negative number, got {}",
                temperature
            )));
        }
    }

    Ok(())
}

/// Build a `runsync` body from a conversation, configured defaults and overrides
///
/// Overrides win over defaults; `config` is never modified. An empty stop
/// list is treated as no stop list.
pub fn to_runsync_request(
    messages: &[Message],
    config: &RunPodConfig,
    options: &GenerateOptions,
) -> RunSyncRequest {
    RunSyncRequest {
        input: RunSyncInput {
            prompt: render_prompt(messages),
            max_tokens: options.max_tokens.unwrap_or(config.max_tokens),
            temperature: options.temperature.unwrap_or(config.temperature),
            stop: options.stop.clone().filter(|stop| !stop.is_empty()),
        },
    }
}

/// Turn a decoded response body into a single-generation result
pub fn from_runsync_response(body: Value) -> RunPodResult<ChatResult> {
    let response = RunSyncResponse::from_body(body);

    if let Some(error) = response.remote_error() {
        return Err(RunPodError::Remote(stringify(error)));
    }

    let extraction = Extraction::from_output(&response.output);
    let matched = extraction.is_matched();
    if !matched {
        let job_id = response
            .envelope
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        warn!(
            job_id = %job_id,
            "Could not parse output format, falling back to its string form"
        );
    }

    let mut result = ChatResult::new(extraction.into_text(), matched);
    for (key, value) in response.envelope {
        result = result.with_metadata(key, value);
    }
    Ok(result)
}
