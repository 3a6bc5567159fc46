//! HTTP plumbing shared by providers
//!
//! This module holds the per-request options used for correlation and
//! timeouts, and the mapping from failed HTTP responses to errors.

pub mod error;

use std::time::Duration;
use uuid::Uuid;

/// Default user agent
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Header carrying the request ID for correlation
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Options for an HTTP request
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Unique request ID for correlation
    pub request_id: Uuid,

    /// Request timeout
    pub timeout: Duration,
}

impl RequestOptions {
    /// Create new request options with a generated request ID
    pub fn new(timeout: Duration) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique() {
        let a = RequestOptions::new(Duration::from_secs(300));
        let b = RequestOptions::new(Duration::from_secs(300));
        assert_ne!(a.request_id, b.request_id);
        assert_eq!(a.timeout, Duration::from_secs(300));
    }

    #[test]
    fn test_user_agent() {
        assert!(USER_AGENT.starts_with("runpod-core/"));
    }
}
