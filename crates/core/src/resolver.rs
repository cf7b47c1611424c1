//! Order resolution.
//!
//! Mintsoft's search is fuzzy: asking for `ORD-1` can return `ORD-1`,
//! `ORD-10` and `ORD-100`. [`resolve`] narrows whatever came back to the
//! one order whose number is the one that was asked for, or to nothing.

use serde_json::Value;

use crate::types::order_number::normalize;
use crate::types::{OrderRecord, RawOrderResponse};

/// Pick the order matching `requested` out of a search response.
///
/// Order numbers are compared after trimming and lowercasing both sides;
/// the match is exact, never a prefix or substring. For an array the first
/// matching element wins, and a single object is returned only if it
/// matches.
///
/// Other fields never decide the outcome: an order whose display fields are
/// mistyped is still returned, with those fields absent.
///
/// Returns `None` when nothing matches, including for an empty array, a
/// candidate without a string `OrderNumber`, a non-JSON body, or a blank
/// `requested`.
///
/// ```
/// use brand_hangar_core::{RawOrderResponse, resolve};
/// use serde_json::json;
///
/// let raw = RawOrderResponse::from(json!([
///     {"OrderNumber": "ABC123"},
///     {"OrderNumber": "XYZ999"},
/// ]));
/// let order = resolve(&raw, "xyz999").unwrap();
/// assert_eq!(order.order_number, "XYZ999");
///
/// assert!(resolve(&raw, "XYZ").is_none());
/// ```
#[must_use]
pub fn resolve(raw: &RawOrderResponse, requested: &str) -> Option<OrderRecord> {
    let wanted = normalize(requested);
    if wanted.is_empty() {
        return None;
    }

    raw.candidates()
        .iter()
        .filter(|candidate| order_number_of(candidate).is_some_and(|n| normalize(n) == wanted))
        .find_map(OrderRecord::from_value)
}

fn order_number_of(candidate: &Value) -> Option<&str> {
    candidate.get("OrderNumber").and_then(Value::as_str)
}
