//! HTTP middleware stack for the proxy.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. CORS (single allow-listed origin)
//! 3. `TraceLayer` (request span with method, uri, status, latency)
//! 4. Request ID (span, Sentry tag, request extension, response header)

pub mod cors;
pub mod request_id;

pub use cors::cors_layer;
pub use request_id::{RequestId, request_id_middleware};
