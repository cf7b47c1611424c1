//! Mintsoft fulfillment API client.
//!
//! Read-only access to Mintsoft's order search. Authentication is a static
//! API key sent as the `ms-apikey` header on every request.
//!
//! # Architecture
//!
//! - One `reqwest::Client` per process, shared through application state
//! - One attempt per call: no retries, no caching
//! - Response bodies are handed back as raw JSON for the caller to relay

pub mod client;

pub use client::{MintsoftClient, SearchResponse};

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when interacting with the Mintsoft API.
#[derive(Debug, Error)]
pub enum MintsoftError {
    /// HTTP request failed before a response was read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Mintsoft answered with a non-success status.
    #[error("API error: {status} - {body}")]
    Api {
        /// Upstream HTTP status code.
        status: u16,
        /// Upstream body; raw text becomes a JSON string.
        body: Value,
    },

    /// A success response did not contain JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The API key cannot be sent as a header value.
    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    /// The search endpoint URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_display() {
        let err = MintsoftError::Api {
            status: 401,
            body: json!({"MessageDetail": "Invalid key"}),
        };
        assert_eq!(
            err.to_string(),
            r#"API error: 401 - {"MessageDetail":"Invalid key"}"#
        );
    }

    #[test]
    fn test_invalid_api_key_display() {
        let err = MintsoftError::InvalidApiKey("contains newline".to_string());
        assert_eq!(err.to_string(), "Invalid API key: contains newline");
    }
}
