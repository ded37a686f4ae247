//! Cart route handlers.
//!
//! The cart itself lives client-side; this endpoint prices a set of product
//! IDs for the cart and checkout views.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::catalog::SearchResultItem;
use crate::error::Result;
use crate::state::AppState;

/// Request body: the product IDs in the cart.
#[derive(Debug, Deserialize)]
pub struct CartItemsRequest {
    pub ids: Vec<String>,
}

/// Price the given products for cart display.
///
/// IDs that no longer resolve are simply absent from the response; the
/// rendering layer treats them as removed from the catalog.
pub async fn items(
    State(state): State<AppState>,
    Json(request): Json<CartItemsRequest>,
) -> Result<Json<Value>> {
    let entries = state.sanity().products_by_ids(&request.ids).await?;

    let context = state.tool_context();
    let items: Vec<SearchResultItem> = entries
        .iter()
        .map(|entry| {
            SearchResultItem::from_entry(
                entry,
                context.low_stock_threshold,
                &context.project_id,
                &context.dataset,
            )
        })
        .collect();

    Ok(Json(json!({
        "count": items.len(),
        "items": items,
    })))
}
