//! JSON API routes for the external rendering layer.

mod cart;
mod chat;
mod orders;
mod products;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

/// Build the API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(products::index))
        .route("/api/products/{slug}", get(products::show))
        .route("/api/cart/items", post(cart::items))
        .route("/api/orders", get(orders::index))
        .route("/api/chat", post(chat::send))
}
