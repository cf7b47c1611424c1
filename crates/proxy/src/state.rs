//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ProxyConfig;
use crate::gateway::OrderGateway;
use crate::mintsoft::MintsoftError;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It holds no mutable state;
/// every request sees the same configuration and gateway.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ProxyConfig,
    gateway: OrderGateway,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the Mintsoft client cannot be built.
    pub fn new(config: ProxyConfig) -> Result<Self, MintsoftError> {
        let gateway = OrderGateway::new(&config.mintsoft)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, gateway }),
        })
    }

    /// Get a reference to the proxy configuration.
    #[must_use]
    pub fn config(&self) -> &ProxyConfig {
        &self.inner.config
    }

    /// Get a reference to the order lookup gateway.
    #[must_use]
    pub fn gateway(&self) -> &OrderGateway {
        &self.inner.gateway
    }
}
