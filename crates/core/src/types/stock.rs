//! Stock availability bands derived from raw stock counts.

use serde::{Deserialize, Serialize};

/// Availability band for a catalog entry.
///
/// The low-stock threshold is an external configuration value and must be
/// passed in by the caller; it is never hardcoded here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Derive the availability band from a stock count.
    ///
    /// Bands: 0 is out of stock; 1 through `low_stock_threshold` inclusive is
    /// low stock; anything above the threshold is in stock.
    #[must_use]
    pub const fn from_count(count: i64, low_stock_threshold: i64) -> Self {
        if count <= 0 {
            Self::OutOfStock
        } else if count <= low_stock_threshold {
            Self::LowStock
        } else {
            Self::InStock
        }
    }

    /// Wire-level code for API responses.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::OutOfStock => "out_of_stock",
            Self::LowStock => "low_stock",
            Self::InStock => "in_stock",
        }
    }

    /// Human-readable availability message including the remaining count.
    #[must_use]
    pub fn message(self, count: i64) -> String {
        match self {
            Self::OutOfStock => "Out of stock".to_string(),
            Self::LowStock => format!("Low stock - only {count} left"),
            Self::InStock => format!("In stock ({count} available)"),
        }
    }
}
