//! HTTP error mapping utilities

use crate::providers::error::RunPodError;
use reqwest::StatusCode;
use serde_json::Value;
use uuid::Uuid;

/// Longest body excerpt kept in an error message
const MAX_BODY_EXCERPT: usize = 512;

/// Map a non-success status and response body to a request error
pub fn map_http_error(status: StatusCode, body: Option<String>, request_id: Uuid) -> RunPodError {
    let detail = body
        .as_deref()
        .and_then(|b| serde_json::from_str::<Value>(b).ok())
        .and_then(|v| extract_error_message(&v))
        .or_else(|| body.as_deref().map(excerpt))
        .filter(|d| !d.is_empty());

    let reason = status.canonical_reason().unwrap_or("Unknown");
    let message = match detail {
        Some(detail) => format!(
            "HTTP {} {}: {} [request_id: {}]",
            status.as_u16(),
            reason,
            detail,
            request_id
        ),
        None => format!(
            "HTTP {} {} [request_id: {}]",
            status.as_u16(),
            reason,
            request_id
        ),
    };

    RunPodError::Request {
        message,
        status: Some(status.as_u16()),
        timed_out: status == StatusCode::REQUEST_TIMEOUT || status == StatusCode::GATEWAY_TIMEOUT,
        source: None,
    }
}

/// Pull a human-readable message out of a JSON error body
fn extract_error_message(json: &Value) -> Option<String> {
    // { "error": { "message": "..." } }
    if let Some(message) = json
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
    {
        return Some(message.to_string());
    }

    // { "error": "..." }
    if let Some(error) = json.get("error").and_then(|v| v.as_str()) {
        return Some(error.to_string());
    }

    // { "message": "..." }
    json.get("message")
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_BODY_EXCERPT) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
