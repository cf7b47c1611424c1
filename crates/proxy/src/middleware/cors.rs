//! Cross-origin policy.
//!
//! The lookup form is served from a different origin than the proxy, so the
//! browser needs CORS. Exactly one origin is allowed, and only to read.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS layer allowing `GET` requests from `origin` only.
#[must_use]
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::exact(origin))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, header::ACCESS_CONTROL_ALLOW_ORIGIN},
        routing::get,
    };
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(cors_layer(HeaderValue::from_static("http://localhost:3000")))
    }

    async fn allow_origin_for(origin: &str) -> Option<HeaderValue> {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).cloned()
    }

    #[tokio::test]
    async fn test_allowed_origin() {
        let header = allow_origin_for("http://localhost:3000").await.unwrap();
        assert_eq!(header, "http://localhost:3000");
    }

    #[tokio::test]
    async fn test_other_origin_gets_no_allow_header() {
        assert!(allow_origin_for("https://evil.example").await.is_none());
    }
}
