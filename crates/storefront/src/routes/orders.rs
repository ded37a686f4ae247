//! Order route handlers.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::Value;

use crystal_harmony_core::OrderStatus;

use crate::agent::tools::summarize_orders;
use crate::error::{AppError, Result};
use crate::middleware::CustomerIdentity;
use crate::state::AppState;

/// Query parameters for the order listing.
#[derive(Debug, Deserialize, Default)]
pub struct OrdersQuery {
    /// Optional status filter; unknown values mean no filter.
    #[serde(default)]
    pub status: Option<String>,
}

/// The signed-in customer's own orders.
pub async fn index(
    State(state): State<AppState>,
    identity: CustomerIdentity,
    Query(query): Query<OrdersQuery>,
) -> Result<Json<Value>> {
    let Some(customer) = identity.customer() else {
        return Err(AppError::Unauthorized(
            "Sign in to view your orders".to_string(),
        ));
    };

    let status = query
        .status
        .as_deref()
        .and_then(|s| OrderStatus::from_str(s).ok());

    let orders = state.sanity().orders_for_customer(customer, status).await?;

    Ok(Json(summarize_orders(&orders)))
}
