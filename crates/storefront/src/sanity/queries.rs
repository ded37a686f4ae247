//! GROQ queries and the catalog filter builder.
//!
//! Filter dimensions that are unset contribute no clause at all, so an empty
//! filter set compiles to a bare `*[_type == "product"]` match-all. The
//! free-text dimension is deliberately absent here: GROQ's `match` operator
//! tokenizes its input, and the search contract is an exact case-insensitive
//! substring, so the client applies that constraint after the fetch.

use rust_decimal::prelude::ToPrimitive;
use serde_json::{Map, Value, json};

use crystal_harmony_core::{CustomerId, OrderStatus, SearchFilters};

/// Shared projection for catalog entries.
///
/// Dereferences the category and image assets so responses are self-contained.
pub const PRODUCT_PROJECTION: &str = r#"{
  _id,
  name,
  "slug": slug.current,
  description,
  price,
  stock,
  category->{title, "slug": slug.current},
  chakras,
  zodiac,
  properties,
  mineralFamily,
  rarity,
  hardness,
  origin,
  "images": images[]{"url": asset->url, "ref": asset._ref, alt},
  featured,
  newArrival,
  bestSeller
}"#;

/// Single product by slug (for product detail pages).
pub fn product_by_slug_query() -> String {
    format!(r#"*[_type == "product" && slug.current == $slug][0] {PRODUCT_PROJECTION}"#)
}

/// Products by document ID (for cart/checkout contexts).
pub fn products_by_ids_query() -> String {
    format!(r#"*[_type == "product" && _id in $ids] {PRODUCT_PROJECTION}"#)
}

/// The authenticated customer's own orders, newest first.
///
/// The customer binding is part of the query itself; there is no variant
/// that returns another customer's orders.
pub const ORDERS_FOR_CUSTOMER_QUERY: &str = r#"*[_type == "order" && customer._ref == $customerId && ($status == "" || status == $status)] | order(createdAt desc) {
  _id,
  orderNumber,
  status,
  total,
  createdAt,
  "items": items[]{"name": product->name, quantity, price}
}"#;

/// Build the parameters for [`ORDERS_FOR_CUSTOMER_QUERY`].
pub fn orders_params(customer: &CustomerId, status: Option<OrderStatus>) -> Value {
    json!({
        "customerId": customer.as_str(),
        "status": status.map_or_else(String::new, |s| s.to_string()),
    })
}

/// Build the catalog search query and its parameter bag from a filter set.
///
/// Returns the GROQ source plus the `$`-parameters it references.
pub fn search_query(filters: &SearchFilters) -> (String, Value) {
    let mut clauses = vec![r#"_type == "product""#.to_string()];
    let mut params = Map::new();

    if let Some(category) = &filters.category {
        clauses.push("category->slug.current == $category".to_string());
        params.insert("category".to_string(), json!(category));
    }
    if let Some(chakra) = &filters.chakras {
        clauses.push("$chakra in chakras".to_string());
        params.insert("chakra".to_string(), json!(chakra));
    }
    if let Some(property) = &filters.properties {
        clauses.push("$property in properties".to_string());
        params.insert("property".to_string(), json!(property));
    }
    if let Some(sign) = &filters.zodiac {
        clauses.push("$zodiac in zodiac".to_string());
        params.insert("zodiac".to_string(), json!(sign));
    }
    if let Some(family) = &filters.mineral_family {
        clauses.push("mineralFamily == $mineralFamily".to_string());
        params.insert("mineralFamily".to_string(), json!(family));
    }
    if let Some(rarity) = &filters.rarity {
        clauses.push("rarity == $rarity".to_string());
        params.insert("rarity".to_string(), json!(rarity));
    }
    if let Some(min) = filters.min_price {
        clauses.push("price >= $minPrice".to_string());
        params.insert("minPrice".to_string(), json!(min.to_f64().unwrap_or(0.0)));
    }
    if let Some(max) = filters.max_price {
        clauses.push("price <= $maxPrice".to_string());
        params.insert("maxPrice".to_string(), json!(max.to_f64().unwrap_or(0.0)));
    }
    if filters.in_stock_only {
        clauses.push("stock > 0".to_string());
    }
    if filters.featured_only {
        clauses.push("featured == true".to_string());
    }
    if filters.best_sellers_only {
        clauses.push("bestSeller == true".to_string());
    }
    if filters.new_arrivals_only {
        clauses.push("newArrival == true".to_string());
    }

    let query = format!("*[{}] {PRODUCT_PROJECTION}", clauses.join(" && "));
    (query, Value::Object(params))
}
