//! Client-side lookup state.
//!
//! A lookup client shows exactly one thing at a time: nothing yet, one
//! order, or a one-line message. [`LookupSession`] holds that state and
//! makes sure a slow answer to an earlier search cannot replace the answer
//! to a later one.

use std::fmt;

use serde_json::Value;

use crate::resolver::resolve;
use crate::types::{OrderRecord, RawOrderResponse};

/// Message shown when the search succeeded but no order matched.
pub const NOT_FOUND_MESSAGE: &str = "No order found with that number.";

/// Message shown when an error body carries nothing readable.
pub const GENERIC_ERROR_MESSAGE: &str = "Error fetching order";

/// What a lookup client currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LookupView {
    /// No search has completed yet.
    #[default]
    Idle,
    /// The one order matching the last search.
    Order(Box<OrderRecord>),
    /// Not-found or error text.
    Message(String),
}

impl LookupView {
    /// Build the view for a proxy response to `GET /api/order`.
    ///
    /// A 2xx body is resolved against `requested`. Any other status shows
    /// the upstream `MessageDetail` (or `Message`) when the proxy relayed
    /// one, the error string for local failures, or a generic message.
    #[must_use]
    pub fn from_proxy_response(status: u16, body: &Value, requested: &str) -> Self {
        if (200..300).contains(&status) {
            let raw = RawOrderResponse::from(body.clone());
            return resolve(&raw, requested).map_or_else(
                || Self::Message(NOT_FOUND_MESSAGE.to_owned()),
                |order| Self::Order(Box::new(order)),
            );
        }
        Self::Message(error_message(body))
    }

    /// View for a request that never got an HTTP response.
    #[must_use]
    pub fn network_error(message: impl fmt::Display) -> Self {
        Self::Message(format!("Network error: {message}"))
    }

    /// The order being shown, if any.
    #[must_use]
    pub fn order(&self) -> Option<&OrderRecord> {
        match self {
            Self::Order(order) => Some(order.as_ref()),
            _ => None,
        }
    }

    /// The message being shown, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message),
            _ => None,
        }
    }
}

fn error_message(body: &Value) -> String {
    let error = body.get("error");
    let upstream_detail = |key: &str| error.and_then(|e| e.get(key)).and_then(Value::as_str);

    upstream_detail("MessageDetail")
        .or_else(|| upstream_detail("Message"))
        .or_else(|| error.and_then(Value::as_str))
        .unwrap_or(GENERIC_ERROR_MESSAGE)
        .to_owned()
}

/// Handle for one in-flight search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    seq: u64,
    query: String,
}

impl LookupTicket {
    /// The order number this search was started with.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// State of one lookup form.
#[derive(Debug, Default)]
pub struct LookupSession {
    latest: u64,
    pending: bool,
    view: LookupView,
}

impl LookupSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search, superseding any search still in flight.
    pub fn begin(&mut self, query: &str) -> LookupTicket {
        self.latest = self.latest.wrapping_add(1);
        self.pending = true;
        LookupTicket {
            seq: self.latest,
            query: query.to_owned(),
        }
    }

    /// Apply the result of a search.
    ///
    /// Returns `false` and leaves the view alone if `ticket` has been
    /// superseded by a later [`begin`](Self::begin) or was already applied.
    pub fn complete(&mut self, ticket: &LookupTicket, view: LookupView) -> bool {
        if !self.pending || ticket.seq != self.latest {
            return false;
        }
        self.pending = false;
        self.view = view;
        true
    }

    /// Whether the latest search is still waiting for its result.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub const fn view(&self) -> &LookupView {
        &self.view
    }
}

/// Plain-text order details panel.
///
/// ```text
/// Order: ORD-100
/// Name: Ada Lovelace
/// Email: ada@example.com
/// Status: DESPATCHED
/// Total Items: 3
/// Value: £42.50
/// Shipping: 1 Analytical Way, London, N1 1AA
/// Track your order: https://track.example/1
/// ```
pub struct OrderPanel<'a>(pub &'a OrderRecord);

impl fmt::Display for OrderPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = self.0;
        writeln!(f, "Order: {}", order.order_number)?;
        writeln!(f, "Name: {}", or_dash(&order.customer_name()))?;
        writeln!(f, "Email: {}", order.email.as_deref().unwrap_or("-"))?;
        writeln!(f, "Status: {}", order.status().label)?;
        match order.total_items {
            Some(items) => writeln!(f, "Total Items: {items}")?,
            None => writeln!(f, "Total Items: -")?,
        }
        match order.order_value {
            Some(value) => writeln!(f, "Value: £{value:.2}")?,
            None => writeln!(f, "Value: -")?,
        }
        write!(f, "Shipping: {}", or_dash(&order.shipping_address()))?;
        if let Some(url) = &order.tracking_url {
            write!(f, "\nTrack your order: {url}")?;
        }
        Ok(())
    }
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}
