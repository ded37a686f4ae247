//! Tool definitions and execution for the shopping assistant.
//!
//! Two tools exist: `searchProducts` (always available) and `getMyOrders`
//! (only constructed when a customer identity is present). The executor
//! binds the store handles and the identity at construction time - the
//! order tool has no identity parameter a caller could supply, which is
//! what prevents cross-account lookups.

mod get_my_orders;
mod search_products;

pub use get_my_orders::{run_orders, summarize_orders};
pub use search_products::run_search;

use serde_json::json;
use tracing::instrument;

use crystal_harmony_core::CustomerId;

use crate::catalog::{CatalogStore, OrderStore};

use super::claude::{ClaudeError, Tool};

/// Names the model uses to invoke the tools.
pub const SEARCH_PRODUCTS_TOOL: &str = "searchProducts";
pub const GET_MY_ORDERS_TOOL: &str = "getMyOrders";

/// Ambient values the search pipeline needs beyond its inputs.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Stock count at or below which an entry reports as low stock.
    pub low_stock_threshold: i64,
    /// Sanity project, for image reference expansion.
    pub project_id: String,
    /// Sanity dataset, for image reference expansion.
    pub dataset: String,
}

/// The catalog search tool definition.
#[must_use]
pub fn search_products_tool() -> Tool {
    Tool {
        name: SEARCH_PRODUCTS_TOOL.to_string(),
        description: "Search for healing crystals in the store. Can search by name, \
            description, healing properties, chakra associations, zodiac signs, mineral \
            family, and rarity. Filter by price range and availability. Returns detailed \
            crystal information including metaphysical properties and stock status."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search term to find crystals by name or description (e.g., 'amethyst', 'rose quartz')"
                },
                "category": {
                    "type": "string",
                    "description": "Filter by crystal category slug (e.g., 'quartz', 'chakra-stones', 'protection-crystals')"
                },
                "chakras": {
                    "type": "string",
                    "description": "Filter by associated chakra (e.g., 'heart', 'crown', 'third_eye')"
                },
                "properties": {
                    "type": "string",
                    "description": "Filter by healing property (e.g., 'love', 'protection', 'clarity')"
                },
                "zodiac": {
                    "type": "string",
                    "description": "Filter by zodiac sign association (e.g., 'cancer', 'leo', 'pisces')"
                },
                "mineralFamily": {
                    "type": "string",
                    "description": "Filter by mineral family (e.g., 'quartz', 'silicate', 'carbonate')"
                },
                "rarity": {
                    "type": "string",
                    "description": "Filter by rarity level (e.g., 'rare', 'very_rare', 'collectors')"
                },
                "minPrice": {
                    "type": "number",
                    "description": "Minimum price in GBP (e.g., 10). Use 0 for no minimum."
                },
                "maxPrice": {
                    "type": "number",
                    "description": "Maximum price in GBP (e.g., 200). Use 0 for no maximum."
                },
                "inStockOnly": {
                    "type": "boolean",
                    "description": "Show only crystals currently in stock"
                },
                "featuredOnly": {
                    "type": "boolean",
                    "description": "Show only featured crystals"
                },
                "bestSellersOnly": {
                    "type": "boolean",
                    "description": "Show only best-selling crystals"
                },
                "newArrivalsOnly": {
                    "type": "boolean",
                    "description": "Show only new arrivals"
                }
            }
        }),
    }
}

/// The order lookup tool definition.
///
/// Note the schema: the only parameter is the optional status filter. The
/// customer identity is bound inside the executor.
#[must_use]
pub fn get_my_orders_tool() -> Tool {
    Tool {
        name: GET_MY_ORDERS_TOOL.to_string(),
        description: "Look up the signed-in customer's own crystal orders, optionally \
            filtered by status. Returns order numbers, items, totals, and fulfillment status."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "status": {
                    "type": "string",
                    "enum": ["", "pending", "paid", "shipped", "delivered", "cancelled"],
                    "description": "Optional status filter; empty string for all orders"
                }
            }
        }),
    }
}

/// The toolset for a session: search always, orders only when signed in.
#[must_use]
pub fn toolset_for(authenticated: bool) -> Vec<Tool> {
    let mut tools = vec![search_products_tool()];
    if authenticated {
        tools.push(get_my_orders_tool());
    }
    tools
}

/// Executor for the assistant's tools.
///
/// Holds the store handles, the ambient search context, and the customer
/// identity (when present) for the lifetime of one chat exchange.
pub struct ToolExecutor<'a, C, O> {
    catalog: &'a C,
    orders: &'a O,
    identity: Option<CustomerId>,
    context: ToolContext,
}

impl<'a, C: CatalogStore, O: OrderStore> ToolExecutor<'a, C, O> {
    /// Create a new tool executor bound to an optional customer identity.
    #[must_use]
    pub const fn new(
        catalog: &'a C,
        orders: &'a O,
        identity: Option<CustomerId>,
        context: ToolContext,
    ) -> Self {
        Self {
            catalog,
            orders,
            identity,
            context,
        }
    }

    /// Execute a tool and return the result as a JSON string.
    ///
    /// Catalog failures never escape as `Err`: `searchProducts` folds them
    /// into its structured failure outcome so the model can answer
    /// conversationally. `Err` is reserved for invocations that should not
    /// have happened at all (unknown tool, order tool without identity).
    ///
    /// # Errors
    ///
    /// Returns an error if the tool is unknown or unavailable.
    #[instrument(skip(self, input), fields(tool_name = %name))]
    pub async fn execute(
        &self,
        name: &str,
        input: &serde_json::Value,
    ) -> Result<String, ClaudeError> {
        match name {
            SEARCH_PRODUCTS_TOOL => {
                let outcome = run_search(self.catalog, input, &self.context).await;
                Ok(outcome.to_string())
            }
            GET_MY_ORDERS_TOOL => match &self.identity {
                Some(customer) => {
                    let outcome = run_orders(self.orders, customer, input).await?;
                    Ok(outcome.to_string())
                }
                None => Err(ClaudeError::ToolExecution(
                    "getMyOrders is not available without a signed-in customer".to_string(),
                )),
            },
            _ => Err(ClaudeError::ToolExecution(format!("Unknown tool: {name}"))),
        }
    }
}
