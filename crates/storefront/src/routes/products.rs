//! Product route handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde_json::{Value, json};

use crystal_harmony_core::SearchParams;

use crate::catalog::{SearchResultItem, find_similar, rank_results};
use crate::error::Result;
use crate::state::AppState;

/// Related items shown on a product detail page.
const MIN_RELATED: usize = 3;

/// Filtered product listing.
///
/// Accepts the same parameter bag as the assistant's search tool, so the
/// rendering layer and the assistant see identical projections and ordering.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>> {
    let filters = params.into_filters();
    let entries = state.sanity().search_products(&filters).await?;

    let context = state.tool_context();
    let mut products: Vec<SearchResultItem> = entries
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
    rank_results(&mut products);

    Ok(Json(json!({
        "total": products.len(),
        "products": products,
    })))
}

/// Product detail with related items.
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>> {
    let entry = state.sanity().product_by_slug(&slug).await?;
    let related_entries = find_similar(state.sanity(), &entry, MIN_RELATED).await?;

    let context = state.tool_context();
    let normalize = |e: &crystal_harmony_core::CatalogEntry| {
        SearchResultItem::from_entry(
            e,
            context.low_stock_threshold,
            &context.project_id,
            &context.dataset,
        )
    };

    let product = normalize(&entry);
    let mut related: Vec<SearchResultItem> = related_entries.iter().map(normalize).collect();
    rank_results(&mut related);

    Ok(Json(json!({
        "product": product,
        "related": related,
    })))
}
