//! RunPod serverless API types
//!
//! These types match the `/v2/{endpoint_id}/runsync` request body and the
//! envelope of its response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a `runsync` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSyncRequest {
    pub input: RunSyncInput,
}

/// Worker input for text generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSyncInput {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

/// Envelope fields copied into result metadata when present
pub const METADATA_FIELDS: [&str; 4] = ["id", "status", "delayTime", "executionTime"];

/// Decoded `runsync` response envelope
#[derive(Debug, Clone, PartialEq)]
pub struct RunSyncResponse {
    /// Worker output; the whole body when no `output` field was returned
    pub output: Value,

    /// Whether `output` came from an `output` field rather than the whole body
    pub has_output_field: bool,

    /// Job bookkeeping fields (`id`, `status`, timings)
    pub envelope: serde_json::Map<String, Value>,
}

impl RunSyncResponse {
    /// Split a response body into worker output and envelope metadata
    pub fn from_body(body: Value) -> Self {
        let mut envelope = serde_json::Map::new();
        if let Value::Object(map) = &body {
            for field in METADATA_FIELDS {
                if let Some(value) = map.get(field) {
                    envelope.insert(field.to_string(), value.clone());
                }
            }
        }

        let (output, has_output_field) = match body.get("output") {
            Some(output) => (output.clone(), true),
            None => (body, false),
        };

        Self {
            output,
            has_output_field,
            envelope,
        }
    }

    /// Application-level error embedded in the `output` field, if any
    ///
    /// A body without an `output` field never reports a remote error; its
    /// top-level fields are job bookkeeping, not worker output.
    pub fn remote_error(&self) -> Option<&Value> {
        if !self.has_output_field {
            return None;
        }
        self.output.as_object()?.get("error")
    }
}
