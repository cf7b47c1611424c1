//! Order lookup gateway.
//!
//! The one operation the proxy offers: take an order number from a caller,
//! ask Mintsoft, and hand back whatever Mintsoft said. The gateway validates
//! the input, holds the API credential and translates client failures into
//! [`GatewayError`]; it never retries and never caches.

use brand_hangar_core::OrderNumber;
use tracing::instrument;

use crate::config::MintsoftConfig;
use crate::error::GatewayError;
use crate::mintsoft::{MintsoftClient, MintsoftError, SearchResponse};

/// Gateway in front of the Mintsoft order search.
#[derive(Clone)]
pub struct OrderGateway {
    mintsoft: MintsoftClient,
}

impl OrderGateway {
    /// Create a gateway from Mintsoft configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the Mintsoft client cannot be built.
    pub fn new(config: &MintsoftConfig) -> Result<Self, MintsoftError> {
        Ok(Self {
            mintsoft: MintsoftClient::new(config)?,
        })
    }

    /// Look up an order number upstream.
    ///
    /// A missing or blank order number fails with
    /// [`GatewayError::MissingParameter`] before any request is made.
    /// Otherwise the number is forwarded verbatim and the upstream body is
    /// returned unchanged together with its status.
    ///
    /// # Errors
    ///
    /// - `GatewayError::MissingParameter` for absent or blank input
    /// - `GatewayError::Upstream` when Mintsoft answers non-2xx
    /// - `GatewayError::Network` when Mintsoft cannot be reached or read
    #[instrument(skip(self))]
    pub async fn lookup_order(
        &self,
        order_number: Option<&str>,
    ) -> Result<SearchResponse, GatewayError> {
        let order_number = order_number
            .and_then(|n| OrderNumber::parse(n).ok())
            .ok_or(GatewayError::MissingParameter)?;

        let response = self.mintsoft.search_orders(order_number.as_str()).await?;

        tracing::info!(
            status = response.status,
            candidates = response.body.candidates().len(),
            "Order lookup completed"
        );

        Ok(response)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;
    use url::Url;

    use super::*;

    fn unreachable_gateway() -> OrderGateway {
        OrderGateway::new(&MintsoftConfig {
            base_url: Url::parse("http://127.0.0.1:1/").unwrap(),
            api_key: SecretString::from("5f0c8a2e-91d4-4b7a-a3c6-2e8f1d7b9c40"),
            timeout: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_missing_order_number() {
        let gateway = unreachable_gateway();
        let result = gateway.lookup_order(None).await;
        assert!(matches!(result, Err(GatewayError::MissingParameter)));
    }

    #[tokio::test]
    async fn test_blank_order_number_fails_before_any_request() {
        // Upstream is unreachable, so reaching it would be a Network error.
        let gateway = unreachable_gateway();
        for input in ["", " ", "\t\n"] {
            let result = gateway.lookup_order(Some(input)).await;
            assert!(matches!(result, Err(GatewayError::MissingParameter)));
        }
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_network_error() {
        let gateway = unreachable_gateway();
        let result = gateway.lookup_order(Some("ORD-100")).await;
        assert!(matches!(result, Err(GatewayError::Network(_))));
    }
}
