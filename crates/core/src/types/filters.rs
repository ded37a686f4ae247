//! Search filter value objects.
//!
//! Two representations exist on purpose. [`SearchParams`] is the wire shape
//! shared by the search tool and the products API: every field defaults to a
//! sentinel (empty string, zero, false) so a language model or a query string
//! can omit anything. [`SearchFilters`] is the normalized form the adapter
//! and matcher work with: each field is an explicit `Option`, so "filter on
//! empty string" and "no filter" can never be conflated.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::CatalogEntry;

/// Wire-level search parameters with sentinel defaults.
///
/// Field names and defaults mirror the search tool's input schema; unknown
/// enum codes are accepted verbatim and simply match nothing downstream.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParams {
    /// Free-text search over name and description.
    pub query: String,
    /// Category slug.
    pub category: String,
    /// Chakra code.
    pub chakras: String,
    /// Healing property code.
    pub properties: String,
    /// Zodiac sign code.
    pub zodiac: String,
    /// Mineral family code.
    pub mineral_family: String,
    /// Rarity code.
    pub rarity: String,
    /// Minimum price in GBP; 0 means no minimum.
    pub min_price: f64,
    /// Maximum price in GBP; 0 means no maximum.
    pub max_price: f64,
    /// Restrict to entries with stock on hand.
    pub in_stock_only: bool,
    /// Restrict to featured entries.
    pub featured_only: bool,
    /// Restrict to best sellers.
    pub best_sellers_only: bool,
    /// Restrict to new arrivals.
    pub new_arrivals_only: bool,
}

impl SearchParams {
    /// Normalize sentinel values into the explicit-optional filter set.
    #[must_use]
    pub fn into_filters(self) -> SearchFilters {
        SearchFilters {
            query: none_if_empty(self.query),
            category: none_if_empty(self.category),
            chakras: none_if_empty(self.chakras),
            properties: none_if_empty(self.properties),
            zodiac: none_if_empty(self.zodiac),
            mineral_family: none_if_empty(self.mineral_family),
            rarity: none_if_empty(self.rarity),
            min_price: price_bound(self.min_price),
            max_price: price_bound(self.max_price),
            in_stock_only: self.in_stock_only,
            featured_only: self.featured_only,
            best_sellers_only: self.best_sellers_only,
            new_arrivals_only: self.new_arrivals_only,
        }
    }
}

fn none_if_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn price_bound(value: f64) -> Option<Decimal> {
    if value > 0.0 {
        Decimal::from_f64_retain(value)
    } else {
        None
    }
}

/// Normalized filter set. Immutable once constructed; `None` means the
/// dimension imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub query: Option<String>,
    pub category: Option<String>,
    pub chakras: Option<String>,
    pub properties: Option<String>,
    pub zodiac: Option<String>,
    pub mineral_family: Option<String>,
    pub rarity: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub in_stock_only: bool,
    pub featured_only: bool,
    pub best_sellers_only: bool,
    pub new_arrivals_only: bool,
}

impl SearchFilters {
    /// True when no dimension constrains the result set.
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.query.is_none()
            && self.category.is_none()
            && self.chakras.is_none()
            && self.properties.is_none()
            && self.zodiac.is_none()
            && self.mineral_family.is_none()
            && self.rarity.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && !self.in_stock_only
            && !self.featured_only
            && !self.best_sellers_only
            && !self.new_arrivals_only
    }

    /// The adapter contract: does `entry` satisfy every set dimension?
    ///
    /// Text matches on a case-insensitive substring of name or description
    /// (never tokenized). Multi-valued entry fields match when the filter
    /// value is a member of the entry's set. Price bounds are inclusive; an
    /// entry without a price fails any present bound. Boolean flags, when
    /// set, require the corresponding entry flag.
    #[must_use]
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        self.matches_text(entry)
            && self.category.as_ref().is_none_or(|slug| {
                entry
                    .category
                    .as_ref()
                    .and_then(|c| c.slug.as_ref())
                    .is_some_and(|s| s == slug)
            })
            && self
                .chakras
                .as_ref()
                .is_none_or(|v| entry.chakras.iter().any(|c| c == v))
            && self
                .properties
                .as_ref()
                .is_none_or(|v| entry.properties.iter().any(|p| p == v))
            && self
                .zodiac
                .as_ref()
                .is_none_or(|v| entry.zodiac.iter().any(|z| z == v))
            && self
                .mineral_family
                .as_ref()
                .is_none_or(|v| entry.mineral_family.as_deref() == Some(v.as_str()))
            && self
                .rarity
                .as_ref()
                .is_none_or(|v| entry.rarity.as_deref() == Some(v.as_str()))
            && self
                .min_price
                .is_none_or(|min| entry.price.is_some_and(|p| p >= min))
            && self
                .max_price
                .is_none_or(|max| entry.price.is_some_and(|p| p <= max))
            && (!self.in_stock_only || entry.stock > 0)
            && (!self.featured_only || entry.featured)
            && (!self.best_sellers_only || entry.best_seller)
            && (!self.new_arrivals_only || entry.new_arrival)
    }

    /// The text-query constraint alone. The store client applies this after
    /// fetching because the store's own text operator tokenizes, and the
    /// contract here is an exact case-insensitive substring.
    #[must_use]
    pub fn matches_text(&self, entry: &CatalogEntry) -> bool {
        self.query.as_ref().is_none_or(|q| {
            let needle = q.to_lowercase();
            let in_name = entry
                .name
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&needle));
            let in_description = entry
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
            in_name || in_description
        })
    }
}
