//! Sanity Content Lake HTTP client.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, instrument};

use crystal_harmony_core::{CatalogEntry, CustomerId, Order, OrderStatus, SearchFilters};

use crate::catalog::{CatalogError, CatalogStore, OrderStore};
use crate::config::SanityConfig;

use super::SanityError;
use super::queries::{
    ORDERS_FOR_CUSTOMER_QUERY, orders_params, product_by_slug_query, products_by_ids_query,
    search_query,
};

/// Envelope around every query response.
#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
}

/// Client for the Sanity Content Lake query API.
///
/// Provides typed access to catalog entries and customer orders. Product
/// detail lookups are cached for 5 minutes; searches always hit the store.
#[derive(Clone)]
pub struct SanityClient {
    inner: Arc<SanityClientInner>,
}

struct SanityClientInner {
    client: reqwest::Client,
    endpoint: String,
    token: String,
    project_id: String,
    dataset: String,
    product_cache: Cache<String, CatalogEntry>,
}

impl SanityClient {
    /// Create a new Content Lake client.
    #[must_use]
    pub fn new(config: &SanityConfig) -> Self {
        let product_cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        let endpoint = format!(
            "https://{}/v{}/data/query/{}",
            config.api_host(),
            config.api_version,
            config.dataset
        );

        Self {
            inner: Arc::new(SanityClientInner {
                client: reqwest::Client::new(),
                endpoint,
                token: config.api_token.expose_secret().to_string(),
                project_id: config.project_id.clone(),
                dataset: config.dataset.clone(),
                product_cache,
            }),
        }
    }

    /// Sanity project the client is bound to.
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.inner.project_id
    }

    /// Dataset the client is bound to.
    #[must_use]
    pub fn dataset(&self) -> &str {
        &self.inner.dataset
    }

    /// Execute a GROQ query with parameters.
    async fn query<T: DeserializeOwned>(
        &self,
        groq: &str,
        params: Value,
    ) -> Result<T, SanityError> {
        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .bearer_auth(&self.inner.token)
            .json(&json!({ "query": groq, "params": params }))
            .send()
            .await?;

        let status = response.status();

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(SanityError::RateLimited(retry_after));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Sanity API returned non-success status"
            );
            return Err(SanityError::Api {
                status: status.as_u16(),
                message: response_text.chars().take(200).collect(),
            });
        }

        let envelope: QueryResponse<T> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse Sanity query response"
                );
                return Err(SanityError::Parse(e));
            }
        };

        Ok(envelope.result)
    }

    // =========================================================================
    // Catalog Methods
    // =========================================================================

    /// Run a filtered catalog search.
    ///
    /// Structured dimensions are evaluated in GROQ; the free-text constraint
    /// is applied here afterwards to keep exact substring semantics. Not
    /// cached: every invocation queries the store fresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails - never an empty list.
    #[instrument(skip(self, filters))]
    pub async fn search_products(
        &self,
        filters: &SearchFilters,
    ) -> Result<Vec<CatalogEntry>, SanityError> {
        let (groq, params) = search_query(filters);
        let mut entries: Vec<CatalogEntry> = self.query(&groq, params).await?;

        if filters.query.is_some() {
            entries.retain(|entry| filters.matches_text(entry));
        }

        debug!(count = entries.len(), "catalog search complete");
        Ok(entries)
    }

    /// Get a product by its slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found or the API request fails.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn product_by_slug(&self, slug: &str) -> Result<CatalogEntry, SanityError> {
        let cache_key = format!("product:{slug}");

        // Check cache
        if let Some(product) = self.inner.product_cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(product);
        }

        let result: Option<CatalogEntry> = self
            .query(&product_by_slug_query(), json!({ "slug": slug }))
            .await?;

        let product =
            result.ok_or_else(|| SanityError::NotFound(format!("Product not found: {slug}")))?;

        // Cache the result
        self.inner
            .product_cache
            .insert(cache_key, product.clone())
            .await;

        Ok(product)
    }

    /// Get products by document ID (cart/checkout contexts).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn products_by_ids(&self, ids: &[String]) -> Result<Vec<CatalogEntry>, SanityError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.query(&products_by_ids_query(), json!({ "ids": ids }))
            .await
    }

    /// Invalidate a cached product.
    pub async fn invalidate_product(&self, slug: &str) {
        let cache_key = format!("product:{slug}");
        self.inner.product_cache.invalidate(&cache_key).await;
    }

    // =========================================================================
    // Order Methods
    // =========================================================================

    /// Get the customer's own orders, newest first.
    ///
    /// The customer binding lives in the query; there is no way to address
    /// another customer's orders through this method.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, customer))]
    pub async fn orders_for_customer(
        &self,
        customer: &CustomerId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, SanityError> {
        self.query(ORDERS_FOR_CUSTOMER_QUERY, orders_params(customer, status))
            .await
    }

    /// Cheap connectivity probe for readiness checks.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable.
    pub async fn ping(&self) -> Result<(), SanityError> {
        let _count: i64 = self
            .query(r#"count(*[_type == "product"][0...1])"#, json!({}))
            .await?;
        Ok(())
    }
}

impl CatalogStore for SanityClient {
    async fn search(&self, filters: &SearchFilters) -> Result<Vec<CatalogEntry>, CatalogError> {
        Ok(self.search_products(filters).await?)
    }
}

impl OrderStore for SanityClient {
    async fn orders_for(
        &self,
        customer: &CustomerId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, CatalogError> {
        Ok(self.orders_for_customer(customer, status).await?)
    }
}
