//! Look up an order through the proxy and print what a customer would see.

use std::io::{self, Write};

use brand_hangar_core::{LookupSession, LookupView, OrderPanel};
use serde_json::Value;
use thiserror::Error;
use tracing::instrument;
use url::Url;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Invalid proxy URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Run one lookup and print the resulting view.
///
/// Returns `true` when an order was shown.
///
/// # Errors
///
/// Returns an error if the proxy URL cannot be joined or stdout cannot be
/// written. Proxy and network failures are shown as messages, not errors.
#[instrument(skip(proxy_url), fields(proxy = %proxy_url))]
pub async fn run(proxy_url: &Url, order_number: &str) -> Result<bool, LookupError> {
    let url = order_url(proxy_url, order_number)?;

    let mut session = LookupSession::new();
    let ticket = session.begin(order_number);

    let view = match fetch(url).await {
        Ok((status, body)) => LookupView::from_proxy_response(status, &body, ticket.query()),
        Err(e) => {
            tracing::warn!(error = %e, "Proxy request failed");
            LookupView::network_error(e)
        }
    };
    session.complete(&ticket, view);

    let mut out = io::stdout().lock();
    write_view(&mut out, session.view())?;
    Ok(session.view().order().is_some())
}

/// Build `<proxy>/api/order?ordernumber=<value>`.
fn order_url(proxy_url: &Url, order_number: &str) -> Result<Url, url::ParseError> {
    let mut base = proxy_url.clone();
    if !base.path().ends_with('/') {
        base.set_path(&format!("{}/", base.path()));
    }

    let mut url = base.join("api/order")?;
    url.query_pairs_mut()
        .append_pair("ordernumber", order_number);
    Ok(url)
}

/// GET the lookup URL and return the status with the parsed body.
///
/// A body that is not JSON is treated as `null`.
async fn fetch(url: Url) -> Result<(u16, Value), reqwest::Error> {
    let response = reqwest::get(url).await?;
    let status = response.status().as_u16();
    let bytes = response.bytes().await?;
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    tracing::debug!(status, "Proxy responded");
    Ok((status, body))
}

fn write_view(out: &mut impl Write, view: &LookupView) -> io::Result<()> {
    match view {
        LookupView::Idle => Ok(()),
        LookupView::Order(order) => writeln!(out, "{}", OrderPanel(order)),
        LookupView::Message(message) => writeln!(out, "{message}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use brand_hangar_core::NOT_FOUND_MESSAGE;
    use serde_json::json;

    use super::*;

    fn render(view: &LookupView) -> String {
        let mut buf = Vec::new();
        write_view(&mut buf, view).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_order_url() {
        let base = Url::parse("http://localhost:3001").unwrap();
        assert_eq!(
            order_url(&base, "ORD-100").unwrap().as_str(),
            "http://localhost:3001/api/order?ordernumber=ORD-100"
        );
    }

    #[test]
    fn test_order_url_keeps_base_path() {
        let base = Url::parse("https://example.com/proxy").unwrap();
        assert_eq!(
            order_url(&base, "A1").unwrap().as_str(),
            "https://example.com/proxy/api/order?ordernumber=A1"
        );
    }

    #[test]
    fn test_order_url_encodes_value() {
        let base = Url::parse("http://localhost:3001/").unwrap();
        let url = order_url(&base, "Ord & 1").unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("ordernumber".into(), "Ord & 1".into())]);
    }

    #[test]
    fn test_write_order_view() {
        let view = LookupView::from_proxy_response(
            200,
            &json!([{"OrderNumber": "ORD-100", "OrderStatusId": 4}]),
            "ord-100",
        );
        let output = render(&view);
        assert!(output.contains("ORD-100"));
        assert!(output.contains("DESPATCHED"));
    }

    #[test]
    fn test_write_message_view() {
        let view = LookupView::from_proxy_response(200, &json!([]), "ORD-1");
        assert_eq!(render(&view), format!("{NOT_FOUND_MESSAGE}\n"));
    }

    #[test]
    fn test_write_idle_view_is_empty() {
        assert!(render(&LookupView::Idle).is_empty());
    }
}
