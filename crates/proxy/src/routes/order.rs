//! Order lookup route handlers.

use std::collections::HashMap;

use axum::{
    Extension, Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use brand_hangar_core::{NOT_FOUND_MESSAGE, OrderRecord, StatusDisplay, resolve};
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequestId;
use crate::state::AppState;

/// Query parameter carrying the order number.
pub const ORDER_NUMBER_PARAM: &str = "ordernumber";

/// Query string for order lookups.
///
/// Read from a plain map so no query string is rejected before the handler
/// runs; when `ordernumber` is repeated the last value wins.
#[derive(Debug, Default)]
pub struct OrderLookupParams {
    pub ordernumber: Option<String>,
}

impl From<HashMap<String, String>> for OrderLookupParams {
    fn from(mut query: HashMap<String, String>) -> Self {
        Self {
            ordernumber: query.remove(ORDER_NUMBER_PARAM),
        }
    }
}

/// Body of `GET /api/order/resolved`.
#[derive(Debug, Serialize)]
pub struct ResolvedOrder {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl ResolvedOrder {
    fn found(order: OrderRecord) -> Self {
        Self {
            found: true,
            status: Some(order.status()),
            order: Some(order),
            message: None,
        }
    }

    const fn not_found() -> Self {
        Self {
            found: false,
            order: None,
            status: None,
            message: Some(NOT_FOUND_MESSAGE),
        }
    }
}

/// Relay a Mintsoft order search.
///
/// GET /api/order?ordernumber=<value>
///
/// Responds 200 with Mintsoft's body exactly as received.
#[instrument(skip(state, request_id, query), fields(request_id = %request_id))]
pub async fn lookup(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Response> {
    let params = OrderLookupParams::from(query);
    let response = state
        .gateway()
        .lookup_order(params.ordernumber.as_deref())
        .await?;

    Ok(Json(response.body).into_response())
}

/// Search Mintsoft and return only the order matching the requested number.
///
/// GET /api/order/resolved?ordernumber=<value>
///
/// Errors are the same as for `/api/order`. A search that matches nothing
/// is still a 200, with `found: false`.
#[instrument(skip(state, request_id, query), fields(request_id = %request_id))]
pub async fn lookup_resolved(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<ResolvedOrder>> {
    let params = OrderLookupParams::from(query);
    let requested = params.ordernumber.as_deref();
    let response = state.gateway().lookup_order(requested).await?;

    let resolved = resolve(&response.body, requested.unwrap_or_default())
        .map_or_else(ResolvedOrder::not_found, ResolvedOrder::found);

    if !resolved.found {
        tracing::info!("No exact order number match in search results");
    }

    Ok(Json(resolved))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_params_take_order_number() {
        let params = OrderLookupParams::from(query(&[("ordernumber", "ORD-1"), ("utm", "x")]));
        assert_eq!(params.ordernumber.as_deref(), Some("ORD-1"));
    }

    #[test]
    fn test_params_without_order_number() {
        assert!(OrderLookupParams::from(query(&[("OrderNumber", "ORD-1")])).ordernumber.is_none());
        assert!(OrderLookupParams::from(HashMap::new()).ordernumber.is_none());
    }
}
