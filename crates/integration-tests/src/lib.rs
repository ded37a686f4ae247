//! Integration test support for Crystal Harmony.
//!
//! Provides an in-memory catalog and order store so the search pipeline,
//! similarity search, and tool gateway can be exercised end-to-end without
//! a live content store. Matching follows the same
//! [`SearchFilters::matches`] contract the production adapter honors.

#![cfg_attr(not(test), forbid(unsafe_code))]

use serde_json::{Value, json};

use crystal_harmony_core::{CatalogEntry, CustomerId, Order, OrderStatus, SearchFilters};
use crystal_harmony_storefront::catalog::{CatalogError, CatalogStore, OrderStore};

/// In-memory catalog and order store.
///
/// Orders are stored per customer; lookups can only be made through a
/// `CustomerId`, mirroring the production query's binding.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Vec<CatalogEntry>,
    orders: Vec<(CustomerId, Order)>,
    fail_searches: bool,
}

impl InMemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with catalog entries.
    #[must_use]
    pub fn with_entries(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    /// Add a catalog entry.
    pub fn add_entry(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    /// Add an order for a customer.
    pub fn add_order(&mut self, customer: CustomerId, order: Order) {
        self.orders.push((customer, order));
    }

    /// Make every subsequent search fail, for exercising the failure path.
    pub fn fail_searches(&mut self) {
        self.fail_searches = true;
    }

    /// Number of seeded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Clone a seeded entry by document ID.
    #[must_use]
    pub fn clone_entry(&self, id: &str) -> Option<CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id).cloned()
    }

    /// True when no entries are seeded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CatalogStore for InMemoryStore {
    async fn search(&self, filters: &SearchFilters) -> Result<Vec<CatalogEntry>, CatalogError> {
        if self.fail_searches {
            return Err(CatalogError::Store("content store unreachable".to_string()));
        }
        Ok(self
            .entries
            .iter()
            .filter(|entry| filters.matches(entry))
            .cloned()
            .collect())
    }
}

impl OrderStore for InMemoryStore {
    async fn orders_for(
        &self,
        customer: &CustomerId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, CatalogError> {
        Ok(self
            .orders
            .iter()
            .filter(|(owner, order)| {
                owner == customer && status.is_none_or(|s| order.status == s)
            })
            .map(|(_, order)| order.clone())
            .collect())
    }
}

/// Deserialize a catalog entry fixture from JSON.
///
/// # Panics
///
/// Panics when the fixture is not a valid entry; fixtures are test inputs.
#[must_use]
#[allow(clippy::missing_panics_doc)]
pub fn entry(value: Value) -> CatalogEntry {
    serde_json::from_value(value).expect("catalog entry fixture")
}

/// Deserialize an order fixture from JSON.
///
/// # Panics
///
/// Panics when the fixture is not a valid order; fixtures are test inputs.
#[must_use]
#[allow(clippy::missing_panics_doc)]
pub fn order(value: Value) -> Order {
    serde_json::from_value(value).expect("order fixture")
}

/// A small representative catalog used across the test files.
#[must_use]
pub fn sample_catalog() -> Vec<CatalogEntry> {
    vec![
        entry(json!({
            "_id": "rose-quartz",
            "name": "Rose Quartz",
            "slug": "rose-quartz",
            "description": "The stone of unconditional love",
            "price": 45,
            "stock": 12,
            "category": {"title": "Love & Heart", "slug": "love-heart"},
            "chakras": ["heart"],
            "zodiac": ["taurus", "libra"],
            "properties": ["love", "peace"],
            "mineralFamily": "quartz",
            "rarity": "common",
            "hardness": 7,
            "origin": "Brazil"
        })),
        entry(json!({
            "_id": "amethyst",
            "name": "Amethyst Cluster",
            "slug": "amethyst-cluster",
            "description": "Calming purple quartz for meditation and clarity",
            "price": 62.5,
            "stock": 4,
            "category": {"title": "Quartz", "slug": "quartz"},
            "chakras": ["third_eye", "crown"],
            "zodiac": ["pisces", "aquarius"],
            "properties": ["clarity", "intuition", "peace"],
            "mineralFamily": "quartz",
            "rarity": "uncommon",
            "hardness": 7,
            "origin": "Uruguay"
        })),
        entry(json!({
            "_id": "black-tourmaline",
            "name": "Black Tourmaline",
            "slug": "black-tourmaline",
            "description": "A grounding shield against negative energy",
            "price": 18,
            "stock": 30,
            "category": {"title": "Protection", "slug": "protection"},
            "chakras": ["root"],
            "zodiac": ["capricorn"],
            "properties": ["protection", "grounding"],
            "mineralFamily": "silicate",
            "rarity": "common",
            "hardness": 7.5,
            "origin": "Pakistan",
            "bestSeller": true
        })),
        entry(json!({
            "_id": "moldavite",
            "name": "Moldavite",
            "slug": "moldavite",
            "description": "Rare tektite born of a meteorite impact",
            "price": 240,
            "stock": 1,
            "category": {"title": "Meditation", "slug": "meditation"},
            "chakras": ["heart", "third_eye"],
            "zodiac": [],
            "properties": ["transformation", "energy"],
            "mineralFamily": "silicate",
            "rarity": "collectors",
            "hardness": 5.5,
            "origin": "Czech Republic",
            "featured": true
        })),
        entry(json!({
            "_id": "selenite",
            "name": "Selenite Wand",
            "slug": "selenite-wand",
            "description": "Cleansing white crystal for energy work",
            "stock": 0,
            "chakras": ["crown"],
            "zodiac": ["cancer"],
            "properties": ["healing", "peace"],
            "mineralFamily": "sulfate",
            "rarity": "common",
            "origin": "Morocco",
            "newArrival": true
        })),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconstrained_search_returns_all() {
        let store = InMemoryStore::with_entries(sample_catalog());
        let results = store
            .search(&SearchFilters::default())
            .await
            .expect("search");
        assert_eq!(results.len(), store.len());
    }

    #[tokio::test]
    async fn test_fail_searches_produces_error() {
        let mut store = InMemoryStore::with_entries(sample_catalog());
        store.fail_searches();
        assert!(store.search(&SearchFilters::default()).await.is_err());
    }
}
