//! Order records from the order subsystem.
//!
//! Orders are created and mutated by the checkout flow; this crate only
//! reads them on behalf of the authenticated customer.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::OrderRef;

/// Fulfillment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Paid,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Human-readable display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        };
        write!(f, "{code}")
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// One line of an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Product name at purchase time.
    #[serde(default)]
    pub name: Option<String>,
    /// Units ordered.
    #[serde(default)]
    pub quantity: i64,
    /// Unit price at purchase time (GBP).
    #[serde(default)]
    pub price: Option<Decimal>,
}

/// An order belonging to one customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Content-store document ID.
    #[serde(rename = "_id")]
    pub id: OrderRef,
    /// Human-facing order number.
    #[serde(rename = "orderNumber", default)]
    pub order_number: Option<String>,
    /// Current fulfillment state.
    #[serde(default)]
    pub status: OrderStatus,
    /// Order total (GBP).
    #[serde(default)]
    pub total: Option<Decimal>,
    /// When the order was placed.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Ordered items.
    #[serde(default)]
    pub items: Vec<OrderLineItem>,
}
