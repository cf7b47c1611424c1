//! Integration test harness for Brand Hangar order lookup.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p brand-hangar-integration-tests
//! ```
//!
//! No external services are needed: [`FakeMintsoft`] stands in for the
//! Mintsoft order search API and [`spawn_proxy`] runs the real proxy router,
//! both on ephemeral localhost ports.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use brand_hangar_proxy::{AppState, ProxyConfig, app};
use tokio::net::TcpListener;

/// API key the proxy under test is configured with.
pub const TEST_API_KEY: &str = "5f0c8a2e-91d4-4b7a-a3c6-2e8f1d7b9c40";

/// One request received by [`FakeMintsoft`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Decoded `ordernumber` query parameter.
    pub order_number: Option<String>,
    /// Value of the `ms-apikey` header.
    pub api_key: Option<String>,
}

#[derive(Clone)]
struct FakeState {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// In-process stand-in for `GET /api/order/search`.
pub struct FakeMintsoft {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeMintsoft {
    /// Start a fake that answers every search with `status` and `body`.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: body.into(),
            requests: Arc::clone(&requests),
        };

        let router = Router::new()
            .route("/api/order/search", get(search))
            .with_state(state);

        let addr = serve(router).await;
        Self { addr, requests }
    }

    /// Start a fake that answers with a JSON value.
    pub async fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::start(status, body.to_string()).await
    }

    /// Base URL to configure the proxy with.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received so far.
    ///
    /// # Panics
    ///
    /// Panics if the request log lock is poisoned.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("request log lock").clone()
    }
}

async fn search(
    State(state): State<FakeState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    state
        .requests
        .lock()
        .expect("request log lock")
        .push(RecordedRequest {
            order_number: params.get("ordernumber").cloned(),
            api_key: headers
                .get("ms-apikey")
                .and_then(|v| v.to_str().ok())
                .map(String::from),
        });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

/// Start the proxy against `mintsoft_base_url` and return its base URL.
///
/// # Panics
///
/// Panics if the proxy cannot be configured or bound.
pub async fn spawn_proxy(mintsoft_base_url: &str) -> String {
    let base_url = mintsoft_base_url.to_string();
    let config = ProxyConfig::from_vars(move |key| match key {
        "MINTSOFT_API_KEY" => Some(TEST_API_KEY.to_string()),
        "MINTSOFT_BASE_URL" => Some(base_url.clone()),
        "MINTSOFT_TIMEOUT_SECS" => Some("5".to_string()),
        _ => None,
    })
    .expect("test configuration");

    let state = AppState::new(config).expect("application state");
    let addr = serve(app(state)).await;
    format!("http://{addr}")
}

/// Base URL of a port nothing is listening on.
#[must_use]
pub fn unreachable_base_url() -> String {
    "http://127.0.0.1:1".to_string()
}

async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    addr
}
