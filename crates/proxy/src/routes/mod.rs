//! HTTP route handlers for the proxy.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                                 - Liveness check
//! GET  /api/order?ordernumber=<value>          - Relay Mintsoft order search
//! GET  /api/order/resolved?ordernumber=<value> - Exact match + status badge
//! ```

pub mod order;

use std::time::Duration;

use axum::{
    Router,
    extract::Request,
    http::Response,
    routing::get,
};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::{cors_layer, request_id_middleware};
use crate::state::AppState;

/// Create the order API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/order", get(order::lookup))
        .route("/order/resolved", get(order::lookup_resolved))
}

/// Build the full application router with its middleware stack.
///
/// Sentry layers are not included; `main` adds them outermost.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(state.config().allowed_origin.clone());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &Response<_>, latency: Duration, span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .layer(cors)
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check Mintsoft.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::config::ProxyConfig;

    /// State whose Mintsoft base URL points at a closed port.
    fn unreachable_state() -> AppState {
        let config = ProxyConfig::from_vars(|key| match key {
            "MINTSOFT_API_KEY" => Some("5f0c8a2e-91d4-4b7a-a3c6-2e8f1d7b9c40".to_string()),
            "MINTSOFT_BASE_URL" => Some("http://127.0.0.1:1".to_string()),
            _ => None,
        })
        .unwrap();
        AppState::new(config).unwrap()
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app(unreachable_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(unreachable_state())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn test_missing_order_number_is_bad_request() {
        let (status, body) = get_json("/api/order").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Order number is required"}));
    }

    #[tokio::test]
    async fn test_empty_order_number_is_bad_request() {
        let (status, body) = get_json("/api/order?ordernumber=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Order number is required"}));

        let (status, _) = get_json("/api/order/resolved?ordernumber=%20%20").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_repeated_order_number_still_answers_json() {
        let (status, body) = get_json("/api/order?ordernumber=&ordernumber=%20").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Order number is required"}));

        let (status, body) = get_json("/api/order?ordernumber=a&ordernumber=b").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());

        let (status, body) = get_json("/api/order/resolved?ordernumber=a&ordernumber=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Order number is required"}));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_internal_error() {
        let (status, body) = get_json("/api/order?ordernumber=ORD-100").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }
}
