//! The order lookup tool execution path.
//!
//! The customer identity is supplied by the executor from its trusted
//! binding, never from tool input; the only input the model controls is the
//! status filter, and an unrecognized status simply means no filter.

use std::str::FromStr;

use serde_json::{Value, json};
use tracing::debug;

use crystal_harmony_core::{CustomerId, Order, OrderStatus, format_gbp};

use crate::catalog::OrderStore;

use super::super::claude::ClaudeError;

/// Look up the bound customer's orders.
///
/// # Errors
///
/// Returns an error if the order store query fails; the chat loop converts
/// it into an `is_error` tool result.
pub async fn run_orders<O: OrderStore>(
    store: &O,
    customer: &CustomerId,
    input: &Value,
) -> Result<Value, ClaudeError> {
    let status = input
        .get("status")
        .and_then(Value::as_str)
        .and_then(|s| OrderStatus::from_str(s).ok());

    debug!(?status, "order lookup requested");

    let orders = store
        .orders_for(customer, status)
        .await
        .map_err(|e| ClaudeError::ToolExecution(e.to_string()))?;

    Ok(summarize_orders(&orders))
}

/// Shape a list of orders into the summary form shared by the tool and the
/// orders API.
#[must_use]
pub fn summarize_orders(orders: &[Order]) -> Value {
    let summaries: Vec<Value> = orders
        .iter()
        .map(|order| {
            let items: Vec<&str> = order
                .items
                .iter()
                .filter_map(|item| item.name.as_deref())
                .collect();
            json!({
                "orderNumber": order.order_number,
                "status": order.status.to_string(),
                "statusDisplay": order.status.label(),
                "items": items,
                "total": order.total,
                "totalFormatted": order.total.map(format_gbp),
                "createdAt": order.created_at,
                "orderUrl": format!("/orders/{}", order.id),
            })
        })
        .collect();

    json!({
        "count": summaries.len(),
        "orders": summaries,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use crate::catalog::CatalogError;

    struct FixtureOrders {
        orders: Vec<Order>,
    }

    impl OrderStore for FixtureOrders {
        async fn orders_for(
            &self,
            _customer: &CustomerId,
            status: Option<OrderStatus>,
        ) -> Result<Vec<Order>, CatalogError> {
            Ok(self
                .orders
                .iter()
                .filter(|o| status.is_none_or(|s| o.status == s))
                .cloned()
                .collect())
        }
    }

    fn order(value: Value) -> Order {
        serde_json::from_value(value).expect("order fixture")
    }

    fn store() -> FixtureOrders {
        FixtureOrders {
            orders: vec![
                order(json!({
                    "_id": "order-1",
                    "orderNumber": "CH-1001",
                    "status": "shipped",
                    "total": 89.5,
                    "items": [{"name": "Amethyst Cluster", "quantity": 1, "price": 89.5}]
                })),
                order(json!({
                    "_id": "order-2",
                    "orderNumber": "CH-1002",
                    "status": "pending",
                    "total": 12
                })),
            ],
        }
    }

    #[tokio::test]
    async fn test_orders_summarized() {
        let customer = CustomerId::new("customer-1");
        let outcome = run_orders(&store(), &customer, &json!({})).await.unwrap();

        assert_eq!(outcome["count"], json!(2));
        assert_eq!(outcome["orders"][0]["orderNumber"], json!("CH-1001"));
        assert_eq!(outcome["orders"][0]["statusDisplay"], json!("Shipped"));
        assert_eq!(outcome["orders"][0]["totalFormatted"], json!("£89.50"));
        assert_eq!(outcome["orders"][0]["orderUrl"], json!("/orders/order-1"));
        assert_eq!(outcome["orders"][0]["items"], json!(["Amethyst Cluster"]));
    }

    #[tokio::test]
    async fn test_status_filter_applies() {
        let customer = CustomerId::new("customer-1");
        let outcome = run_orders(&store(), &customer, &json!({"status": "pending"}))
            .await
            .unwrap();
        assert_eq!(outcome["count"], json!(1));
        assert_eq!(outcome["orders"][0]["orderNumber"], json!("CH-1002"));
    }

    #[tokio::test]
    async fn test_unknown_status_means_no_filter() {
        let customer = CustomerId::new("customer-1");
        let outcome = run_orders(&store(), &customer, &json!({"status": "returned"}))
            .await
            .unwrap();
        assert_eq!(outcome["count"], json!(2));
    }
}
