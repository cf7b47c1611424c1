//! Gateway error handling with Sentry integration.
//!
//! Every failure of an order lookup becomes a `GatewayError`, which renders
//! as a JSON body of the form `{ "error": ... }`. Upstream failures are
//! relayed as Mintsoft reported them; local transport failures are captured
//! to Sentry before responding.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

use crate::mintsoft::MintsoftError;

/// Message returned when no order number was supplied.
pub const MISSING_ORDER_NUMBER: &str = "Order number is required";

/// Error type for the order lookup gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The `ordernumber` query parameter is absent or blank.
    #[error("Order number is required")]
    MissingParameter,

    /// Mintsoft answered with a non-success status.
    #[error("Upstream error: {status}")]
    Upstream {
        /// Mintsoft's status code, relayed to the caller.
        status: StatusCode,
        /// Mintsoft's body, relayed to the caller unmodified.
        body: Value,
    },

    /// Mintsoft could not be reached or its answer could not be read.
    #[error("{0}")]
    Network(String),
}

impl From<MintsoftError> for GatewayError {
    fn from(err: MintsoftError) -> Self {
        match err {
            MintsoftError::Api { status, body } => Self::Upstream {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                body,
            },
            MintsoftError::Http(e) => Self::Network(e.to_string()),
            MintsoftError::Parse(e) => Self::Network(e.to_string()),
            other @ (MintsoftError::InvalidApiKey(_) | MintsoftError::InvalidUrl(_)) => {
                Self::Network(other.to_string())
            }
        }
    }
}

impl GatewayError {
    /// HTTP status this error responds with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => *status,
            Self::Network(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::Network(_) => {
                let event_id = sentry::capture_error(&self);
                tracing::error!(
                    error = %self,
                    sentry_event_id = %event_id,
                    "Mintsoft request failed"
                );
            }
            Self::Upstream { body, .. } => {
                tracing::warn!(status = status.as_u16(), body = %body, "Mintsoft returned an error");
            }
            Self::MissingParameter => {}
        }

        let error = match self {
            Self::MissingParameter => Value::String(MISSING_ORDER_NUMBER.to_string()),
            Self::Upstream { body, .. } => body,
            Self::Network(message) => Value::String(message),
        };

        (status, Json(json!({ "error": error }))).into_response()
    }
}

/// Result type alias for `GatewayError`.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    async fn render(err: GatewayError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_gateway_error_display() {
        assert_eq!(
            GatewayError::MissingParameter.to_string(),
            "Order number is required"
        );
        assert_eq!(
            GatewayError::Network("connection refused".to_string()).to_string(),
            "connection refused"
        );
    }

    #[tokio::test]
    async fn test_missing_parameter_response() {
        let (status, body) = render(GatewayError::MissingParameter).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Order number is required"}));
    }

    #[tokio::test]
    async fn test_upstream_response_is_relayed() {
        let err = GatewayError::Upstream {
            status: StatusCode::UNAUTHORIZED,
            body: json!({"MessageDetail": "Invalid key"}),
        };
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"error": {"MessageDetail": "Invalid key"}}));
    }

    #[tokio::test]
    async fn test_network_response() {
        let (status, body) = render(GatewayError::Network("timed out".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "timed out"}));
    }

    #[test]
    fn test_from_mintsoft_api_error() {
        let err = GatewayError::from(MintsoftError::Api {
            status: 404,
            body: json!("Not Found"),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(matches!(err, GatewayError::Upstream { ref body, .. } if body == "Not Found"));
    }

    #[test]
    fn test_from_mintsoft_parse_error() {
        let parse = serde_json::from_str::<Value>("<html>").unwrap_err();
        let err = GatewayError::from(MintsoftError::Parse(parse));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
