//! Mintsoft REST API client.

use brand_hangar_core::RawOrderResponse;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use super::MintsoftError;
use crate::config::MintsoftConfig;

/// Header carrying the Mintsoft API key.
pub const API_KEY_HEADER: &str = "ms-apikey";

/// Order search endpoint, relative to the API root.
const ORDER_SEARCH_PATH: &str = "api/order/search";

/// Successful order search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponse {
    /// Upstream HTTP status code (always 2xx).
    pub status: u16,
    /// Upstream body, untouched.
    pub body: RawOrderResponse,
}

/// Mintsoft API client.
#[derive(Clone)]
pub struct MintsoftClient {
    client: reqwest::Client,
    search_url: Url,
}

impl MintsoftClient {
    /// Create a new Mintsoft API client.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(config: &MintsoftConfig) -> Result<Self, MintsoftError> {
        let mut headers = HeaderMap::new();

        let mut api_key = HeaderValue::from_str(config.api_key.expose_secret())
            .map_err(|e| MintsoftError::InvalidApiKey(e.to_string()))?;
        api_key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert("Accept", HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            search_url: config.base_url.join(ORDER_SEARCH_PATH)?,
        })
    }

    /// Search Mintsoft for orders by order number.
    ///
    /// The order number is sent exactly as given, URL-encoded.
    ///
    /// # Errors
    ///
    /// - `MintsoftError::Api` if Mintsoft answers with a non-2xx status
    /// - `MintsoftError::Parse` if a 2xx body is not JSON
    /// - `MintsoftError::Http` on connection, DNS or timeout failures
    #[instrument(skip(self))]
    pub async fn search_orders(&self, order_number: &str) -> Result<SearchResponse, MintsoftError> {
        let url = self.search_url_for(order_number);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        tracing::debug!(
            status = status.as_u16(),
            body_bytes = bytes.len(),
            "Mintsoft order search responded"
        );

        if !status.is_success() {
            let body = serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
            return Err(MintsoftError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = serde_json::from_slice(&bytes)?;

        Ok(SearchResponse {
            status: status.as_u16(),
            body: RawOrderResponse::from(body),
        })
    }

    fn search_url_for(&self, order_number: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut().append_pair("ordernumber", order_number);
        url
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn config(base_url: &str) -> MintsoftConfig {
        MintsoftConfig {
            base_url: Url::parse(base_url).unwrap(),
            api_key: SecretString::from("5f0c8a2e-91d4-4b7a-a3c6-2e8f1d7b9c40"),
            timeout: None,
        }
    }

    #[test]
    fn test_search_url_encodes_order_number() {
        let client = MintsoftClient::new(&config("https://api.mintsoft.co.uk/")).unwrap();
        let url = client.search_url_for("ORD 1&x=2");
        assert_eq!(
            url.as_str(),
            "https://api.mintsoft.co.uk/api/order/search?ordernumber=ORD+1%26x%3D2"
        );
    }

    #[test]
    fn test_search_url_keeps_base_path() {
        let client = MintsoftClient::new(&config("http://127.0.0.1:9000/mintsoft/")).unwrap();
        let url = client.search_url_for("ORD-100");
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:9000/mintsoft/api/order/search?ordernumber=ORD-100"
        );
    }

    #[test]
    fn test_api_key_with_control_characters_is_rejected() {
        let mut config = config("https://api.mintsoft.co.uk/");
        config.api_key = SecretString::from("bad\nkey");
        let result = MintsoftClient::new(&config);
        assert!(matches!(result, Err(MintsoftError::InvalidApiKey(_))));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_http_error() {
        let client = MintsoftClient::new(&config("http://127.0.0.1:1/")).unwrap();
        let result = client.search_orders("ORD-100").await;
        assert!(matches!(result, Err(MintsoftError::Http(_))));
    }
}
