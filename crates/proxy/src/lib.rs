//! Brand Hangar order lookup proxy library.
//!
//! This crate provides the proxy functionality as a library, allowing it to
//! be tested and embedded.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod gateway;
pub mod middleware;
pub mod mintsoft;
pub mod routes;
pub mod state;

pub use config::ProxyConfig;
pub use error::GatewayError;
pub use gateway::OrderGateway;
pub use routes::app;
pub use state::AppState;
