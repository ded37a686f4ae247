//! Catalog search pipeline: store abstraction, result shaping, and ranking.
//!
//! The store traits are the seam between the search pipeline and the
//! Content Lake. Production uses [`crate::sanity::SanityClient`]; tests use
//! an in-memory store driven by the same
//! [`SearchFilters::matches`](crystal_harmony_core::SearchFilters::matches)
//! contract.

pub mod results;
pub mod similar;

pub use results::{SearchResultItem, rank_results};
pub use similar::{broadened, find_similar, similarity_filters};

use thiserror::Error;

use crystal_harmony_core::{CatalogEntry, CustomerId, Order, OrderStatus, SearchFilters};

/// A store failure, distinct from an empty result set.
///
/// Carries only a human-readable message: by the time a failure crosses the
/// tool boundary it is rendered conversationally, never retried or matched on.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog store error: {0}")]
    Store(String),
}

impl From<crate::sanity::SanityError> for CatalogError {
    fn from(err: crate::sanity::SanityError) -> Self {
        Self::Store(err.to_string())
    }
}

/// Read access to the product catalog.
///
/// A failed fetch must surface as `Err`, never as an empty `Vec` - callers
/// distinguish "no matches" from "search broken".
pub trait CatalogStore: Send + Sync {
    /// Return every entry matching the filter set, unranked.
    fn search(
        &self,
        filters: &SearchFilters,
    ) -> impl Future<Output = Result<Vec<CatalogEntry>, CatalogError>> + Send;
}

/// Read access to the authenticated customer's own orders.
pub trait OrderStore: Send + Sync {
    /// Return the customer's orders, newest first, optionally filtered by status.
    fn orders_for(
        &self,
        customer: &CustomerId,
        status: Option<OrderStatus>,
    ) -> impl Future<Output = Result<Vec<Order>, CatalogError>> + Send;
}
