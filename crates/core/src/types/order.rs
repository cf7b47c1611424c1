//! Mintsoft order payloads.
//!
//! The order search endpoint answers with either a single order object or an
//! array of candidate orders. [`RawOrderResponse`] holds that body untouched
//! so the proxy can relay it as-is; [`OrderRecord`] is the typed view of one
//! order used once a match has been picked.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use super::status::{StatusDisplay, status_label, unknown_status};

/// Body returned by the Mintsoft order search endpoint.
///
/// Serializes back to exactly the JSON it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawOrderResponse {
    /// An array of candidate orders.
    Many(Vec<Value>),
    /// Anything else: normally one order object, possibly `null` or junk.
    Single(Value),
}

impl RawOrderResponse {
    /// Parse a response body.
    ///
    /// Bytes that are not JSON become `Single(Value::Null)`, which resolves
    /// to no order.
    #[must_use]
    pub fn parse(bytes: &[u8]) -> Self {
        serde_json::from_slice::<Value>(bytes).map_or(Self::Single(Value::Null), Self::from)
    }

    /// Candidate orders in upstream order.
    #[must_use]
    pub fn candidates(&self) -> &[Value] {
        match self {
            Self::Many(items) => items,
            Self::Single(value) => std::slice::from_ref(value),
        }
    }

    /// Returns the underlying JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Many(items) => Value::Array(items),
            Self::Single(value) => value,
        }
    }
}

impl From<Value> for RawOrderResponse {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::Many(items),
            other => Self::Single(other),
        }
    }
}

/// A single Mintsoft order.
///
/// Only `OrderNumber` is required. Every other field is read leniently: a
/// value of an unexpected type reads as absent rather than rejecting the
/// order. Fields Mintsoft sends that are not modelled here are kept in
/// `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderRecord {
    pub order_number: String,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Status code exactly as Mintsoft sent it, see [`OrderRecord::status_id`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_status_id: Option<Value>,
    #[serde(default, deserialize_with = "lenient_i64", skip_serializing_if = "Option::is_none")]
    pub total_items: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient_decimal",
        serialize_with = "rust_decimal::serde::float_option::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_value: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub post_code: Option<String>,
    /// Absent until the order has been despatched.
    #[serde(
        rename = "TrackingURL",
        default,
        deserialize_with = "non_empty_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub tracking_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrderRecord {
    /// Read a record from one candidate of a [`RawOrderResponse`].
    ///
    /// Returns `None` if the value is not an object with a string
    /// `OrderNumber`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    /// Numeric status id.
    ///
    /// Mintsoft has been seen sending this as an integer, as an integral
    /// float and as a string.
    #[must_use]
    pub fn status_id(&self) -> Option<i64> {
        match self.order_status_id.as_ref()? {
            Value::Number(n) => number_to_i64(n),
            Value::String(s) => {
                let s = s.trim();
                s.parse()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(integral))
            }
            _ => None,
        }
    }

    /// Status badge for this order.
    ///
    /// A code that is not a number is shown as received; a missing code is
    /// shown as plain unknown.
    #[must_use]
    pub fn status(&self) -> StatusDisplay {
        if let Some(id) = self.status_id() {
            return status_label(id);
        }
        match &self.order_status_id {
            Some(Value::String(s)) => unknown_status(Some(s.trim())),
            Some(other) => unknown_status(Some(&other.to_string())),
            None => unknown_status(None),
        }
    }

    /// Customer name, `First Last`, skipping missing parts.
    #[must_use]
    pub fn customer_name(&self) -> String {
        join_present(&[self.first_name.as_deref(), self.last_name.as_deref()], " ")
    }

    /// Shipping line, `Address1, Town, PostCode`, skipping missing parts.
    #[must_use]
    pub fn shipping_address(&self) -> String {
        join_present(
            &[
                self.address1.as_deref(),
                self.town.as_deref(),
                self.post_code.as_deref(),
            ],
            ", ",
        )
    }
}

fn join_present(parts: &[Option<&str>], separator: &str) -> String {
    parts
        .iter()
        .filter_map(|p| p.map(str::trim).filter(|p| !p.is_empty()))
        .collect::<Vec<_>>()
        .join(separator)
}

fn number_to_i64(n: &Number) -> Option<i64> {
    n.as_i64().or_else(|| n.as_f64().and_then(integral))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integral(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.is_finite() && f.fract().abs() < f64::EPSILON && in_range).then_some(f as i64)
}

/// Accept an integer, an integral float, or a string holding an integer.
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => number_to_i64(&n),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Accept a number or a numeric string. `"N/A"` and friends read as `None`.
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .to_string()
            .parse()
            .ok()
            .or_else(|| n.as_f64().and_then(Decimal::from_f64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.filter(|s| !s.trim().is_empty()))
}
