//! End-to-end tests for the catalog search pipeline: filter normalization,
//! store matching, result shaping, ranking, and the three structured
//! outcomes of the search tool.

use serde_json::json;

use crystal_harmony_core::{SearchFilters, SearchParams};
use crystal_harmony_integration_tests::{InMemoryStore, entry, sample_catalog};
use crystal_harmony_storefront::agent::ToolContext;
use crystal_harmony_storefront::agent::tools::run_search;
use crystal_harmony_storefront::catalog::CatalogStore;

fn context() -> ToolContext {
    ToolContext {
        low_stock_threshold: 5,
        project_id: "test-project".to_string(),
        dataset: "test".to_string(),
    }
}

// =============================================================================
// Adapter Contract
// =============================================================================

#[tokio::test]
async fn test_all_sentinel_filters_return_every_entry() {
    let store = InMemoryStore::with_entries(sample_catalog());

    // Wire-level sentinels everywhere must impose no constraint at all.
    let params: SearchParams = serde_json::from_value(json!({
        "query": "",
        "category": "",
        "chakras": "",
        "properties": "",
        "zodiac": "",
        "mineralFamily": "",
        "rarity": "",
        "minPrice": 0,
        "maxPrice": 0,
        "inStockOnly": false,
        "featuredOnly": false,
        "bestSellersOnly": false,
        "newArrivalsOnly": false
    }))
    .expect("params");
    let filters = params.into_filters();
    assert_eq!(filters, SearchFilters::default());

    let results = store.search(&filters).await.expect("search");
    assert_eq!(results.len(), store.len());
}

#[tokio::test]
async fn test_price_bounds_are_inclusive() {
    let store = InMemoryStore::with_entries(sample_catalog());
    let filters = SearchFilters {
        min_price: Some(45.into()),
        max_price: Some(45.into()),
        ..SearchFilters::default()
    };
    let results = store.search(&filters).await.expect("search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name.as_deref(), Some("Rose Quartz"));
}

// =============================================================================
// Search Tool Outcomes
// =============================================================================

#[tokio::test]
async fn test_heart_chakra_under_fifty_scenario() {
    // One heart-chakra stone at £45 and one crown-chakra stone at the same
    // price: the filter must select exactly the former.
    let store = InMemoryStore::with_entries(vec![
        entry(json!({
            "_id": "rose-quartz",
            "name": "Rose Quartz",
            "slug": "rose-quartz",
            "price": 45,
            "stock": 12,
            "chakras": ["heart"],
            "rarity": "common",
            "featured": false
        })),
        entry(json!({
            "_id": "diamond",
            "name": "Diamond",
            "slug": "diamond",
            "price": 45,
            "stock": 1,
            "chakras": ["crown"],
            "rarity": "collectors"
        })),
    ]);

    let input = json!({
        "chakras": "heart",
        "properties": "",
        "zodiac": "",
        "minPrice": 0,
        "maxPrice": 50
    });
    let outcome = run_search(&store, &input, &context()).await;

    assert_eq!(outcome["found"], json!(true));
    assert_eq!(outcome["totalResults"], json!(1));
    let crystals = outcome["crystals"].as_array().expect("crystals");
    assert_eq!(crystals.len(), 1);
    assert_eq!(crystals[0]["name"], json!("Rose Quartz"));
    assert_eq!(crystals[0]["priceFormatted"], json!("£45.00"));
    assert_eq!(crystals[0]["productUrl"], json!("/products/rose-quartz"));
}

#[tokio::test]
async fn test_empty_match_returns_not_found_with_suggestions() {
    let store = InMemoryStore::with_entries(sample_catalog());
    let outcome = run_search(&store, &json!({"rarity": "very_rare"}), &context()).await;

    assert_eq!(outcome["found"], json!(false));
    assert_eq!(outcome["crystals"], json!([]));
    let suggestions = outcome["suggestions"].as_array().expect("suggestions");
    assert!(!suggestions.is_empty());
    assert!(
        outcome.get("error").is_none(),
        "no matches is a conversational outcome, not a failure"
    );
}

#[tokio::test]
async fn test_store_failure_is_a_distinct_outcome() {
    let mut store = InMemoryStore::with_entries(sample_catalog());
    store.fail_searches();

    let outcome = run_search(&store, &json!({}), &context()).await;

    assert_eq!(outcome["found"], json!(false));
    assert!(
        outcome["error"].as_str().is_some(),
        "failure carries an error message"
    );
    assert_eq!(outcome["crystals"], json!([]));
    assert!(
        outcome.get("suggestions").is_none(),
        "failures do not offer alternative searches"
    );
}

#[tokio::test]
async fn test_success_echoes_the_input_filters() {
    let store = InMemoryStore::with_entries(sample_catalog());
    let input = json!({"properties": "peace", "inStockOnly": true});
    let outcome = run_search(&store, &input, &context()).await;

    assert_eq!(outcome["found"], json!(true));
    assert_eq!(outcome["filters"]["properties"], json!("peace"));
    assert_eq!(outcome["filters"]["inStockOnly"], json!(true));
    assert_eq!(outcome["filters"]["query"], json!(""));
}

// =============================================================================
// Ranking
// =============================================================================

#[tokio::test]
async fn test_featured_entries_rank_first_regardless_of_rarity_and_price() {
    let store = InMemoryStore::with_entries(sample_catalog());
    let outcome = run_search(&store, &json!({}), &context()).await;

    let crystals = outcome["crystals"].as_array().expect("crystals");
    // Moldavite is the only featured entry and also the most expensive;
    // featured still wins the primary key.
    assert_eq!(crystals[0]["id"], json!("moldavite"));
    assert_eq!(crystals[0]["featured"], json!(true));
    for crystal in &crystals[1..] {
        assert_eq!(crystal["featured"], json!(false));
    }
}

#[tokio::test]
async fn test_rarity_then_price_orders_the_rest() {
    let store = InMemoryStore::with_entries(vec![
        entry(json!({"_id": "a", "name": "A", "rarity": "common", "price": 30})),
        entry(json!({"_id": "b", "name": "B", "rarity": "rare", "price": 90})),
        entry(json!({"_id": "c", "name": "C", "rarity": "common", "price": 10})),
        entry(json!({"_id": "d", "name": "D", "rarity": "very_rare", "price": 5})),
    ]);
    let outcome = run_search(&store, &json!({}), &context()).await;

    let order: Vec<&str> = outcome["crystals"]
        .as_array()
        .expect("crystals")
        .iter()
        .map(|c| c["id"].as_str().expect("id"))
        .collect();
    assert_eq!(order, vec!["d", "b", "c", "a"]);
}

#[tokio::test]
async fn test_full_ties_keep_store_order() {
    let store = InMemoryStore::with_entries(vec![
        entry(json!({"_id": "first", "name": "First", "rarity": "common", "price": 10})),
        entry(json!({"_id": "second", "name": "Second", "rarity": "common", "price": 10})),
        entry(json!({"_id": "third", "name": "Third", "rarity": "common", "price": 10})),
    ]);
    let outcome = run_search(&store, &json!({}), &context()).await;

    let order: Vec<&str> = outcome["crystals"]
        .as_array()
        .expect("crystals")
        .iter()
        .map(|c| c["id"].as_str().expect("id"))
        .collect();
    assert_eq!(order, vec!["first", "second", "third"]);
}

// =============================================================================
// Normalization details visible through the pipeline
// =============================================================================

#[tokio::test]
async fn test_out_of_stock_and_missing_price_degrade_per_field() {
    let store = InMemoryStore::with_entries(sample_catalog());
    let outcome = run_search(&store, &json!({"chakras": "crown"}), &context()).await;

    let crystals = outcome["crystals"].as_array().expect("crystals");
    let selenite = crystals
        .iter()
        .find(|c| c["id"] == json!("selenite"))
        .expect("selenite in results");

    assert_eq!(selenite["stockStatus"], json!("out_of_stock"));
    assert_eq!(selenite["stockMessage"], json!("Out of stock"));
    assert_eq!(selenite["priceFormatted"], json!(null));
    assert_eq!(selenite["price"], json!(null));
}

#[tokio::test]
async fn test_labels_and_summary_expand() {
    let store = InMemoryStore::with_entries(sample_catalog());
    let outcome = run_search(&store, &json!({"query": "amethyst"}), &context()).await;

    let crystal = &outcome["crystals"][0];
    assert_eq!(crystal["chakras"], json!(["Third Eye", "Crown"]));
    assert_eq!(crystal["healingProperties"], json!(["Clarity", "Intuition", "Peace"]));
    assert_eq!(crystal["rarity"], json!("Uncommon"));
    let summary = crystal["metaphysicalSummary"].as_str().expect("summary");
    assert!(summary.contains("Third Eye, Crown chakras"));
    assert!(summary.contains("clarity, intuition, peace"));
    assert!(summary.contains("Pisces, Aquarius zodiac signs"));
}
