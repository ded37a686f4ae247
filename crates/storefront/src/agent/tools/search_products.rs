//! The catalog search tool execution path.
//!
//! Three mutually exclusive outcomes, all expressed as structured JSON so
//! the model can branch on them:
//!
//! - success: ranked, display-ready crystals plus the echoed filters;
//! - not found: `found: false` with a fixed list of alternative-search
//!   suggestions - a conversational dead end, not an error;
//! - failure: `found: false` with an `error` field - the store broke, which
//!   must never masquerade as an empty result set.

use serde_json::{Value, json};
use tracing::{debug, warn};

use crystal_harmony_core::SearchParams;

use crate::catalog::{CatalogStore, SearchResultItem, rank_results};

use super::ToolContext;

/// Results above this count get refinement tips appended.
const REFINEMENT_TIP_THRESHOLD: usize = 5;

/// Suggestions returned when nothing matches.
const NO_MATCH_SUGGESTIONS: [&str; 5] = [
    "Try searching by chakra (e.g., 'heart chakra crystals')",
    "Search by healing property (e.g., 'crystals for protection')",
    "Browse by zodiac sign (e.g., 'crystals for Gemini')",
    "Explore different mineral families (e.g., 'quartz crystals')",
    "Check our featured crystals or new arrivals",
];

/// Tips appended to large result sets.
const REFINEMENT_TIPS: [&str; 4] = [
    "You can filter by specific chakras to narrow results",
    "Try filtering by healing properties for more targeted results",
    "Check rarity levels for unique or collector's items",
    "Sort by price or availability for quick selection",
];

/// Run a catalog search for the assistant.
///
/// Always returns a structured outcome; store failures are folded in rather
/// than propagated.
pub async fn run_search<C: CatalogStore>(store: &C, input: &Value, context: &ToolContext) -> Value {
    let params: SearchParams = match serde_json::from_value(input.clone()) {
        Ok(params) => params,
        Err(e) => {
            // The model occasionally sends a malformed bag; search wide
            // rather than refuse.
            warn!(error = %e, "unparseable search input, falling back to defaults");
            SearchParams::default()
        }
    };

    debug!(?params, "search query received");

    let filters = params.clone().into_filters();

    let entries = match store.search(&filters).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!(error = %e, "catalog search failed");
            return json!({
                "found": false,
                "message": "An error occurred while searching for healing crystals.",
                "crystals": [],
                "error": e.to_string(),
                "filters": partial_filter_echo(&params),
            });
        }
    };

    debug!(count = entries.len(), "crystals found");

    if entries.is_empty() {
        return json!({
            "found": false,
            "message": "No healing crystals found matching your criteria. Try different \
                search terms, or browse by chakra, healing property, or zodiac sign.",
            "suggestions": NO_MATCH_SUGGESTIONS,
            "crystals": [],
            "filters": partial_filter_echo(&params),
        });
    }

    let mut crystals: Vec<SearchResultItem> = entries
        .iter()
        .map(|entry| {
            SearchResultItem::from_entry(
                entry,
                context.low_stock_threshold,
                &context.project_id,
                &context.dataset,
            )
        })
        .collect();
    rank_results(&mut crystals);

    let total = crystals.len();
    let plural = if total == 1 { "" } else { "s" };
    let suggestions: Vec<&str> = if total > REFINEMENT_TIP_THRESHOLD {
        REFINEMENT_TIPS.to_vec()
    } else {
        Vec::new()
    };

    json!({
        "found": true,
        "message": format!("Found {total} healing crystal{plural} matching your search."),
        "totalResults": total,
        "crystals": crystals,
        "suggestions": suggestions,
        "filters": params,
    })
}

/// Filter echo for the not-found and failure outcomes: the dimensional
/// inputs only, without the boolean flags.
fn partial_filter_echo(params: &SearchParams) -> Value {
    json!({
        "query": params.query,
        "category": params.category,
        "chakras": params.chakras,
        "properties": params.properties,
        "zodiac": params.zodiac,
        "mineralFamily": params.mineral_family,
        "rarity": params.rarity,
        "minPrice": params.min_price,
        "maxPrice": params.max_price,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crystal_harmony_core::{CatalogEntry, SearchFilters};

    use crate::catalog::CatalogError;

    /// Minimal store for exercising the tool path.
    struct FixtureStore {
        entries: Vec<CatalogEntry>,
        fail: bool,
    }

    impl CatalogStore for FixtureStore {
        async fn search(&self, filters: &SearchFilters) -> Result<Vec<CatalogEntry>, CatalogError> {
            if self.fail {
                return Err(CatalogError::Store("store unreachable".to_string()));
            }
            Ok(self
                .entries
                .iter()
                .filter(|e| filters.matches(e))
                .cloned()
                .collect())
        }
    }

    fn context() -> ToolContext {
        ToolContext {
            low_stock_threshold: 5,
            project_id: "proj".to_string(),
            dataset: "prod".to_string(),
        }
    }

    fn entry(value: Value) -> CatalogEntry {
        serde_json::from_value(value).expect("entry fixture")
    }

    fn seeded_store() -> FixtureStore {
        FixtureStore {
            entries: vec![
                entry(json!({
                    "_id": "rose-quartz",
                    "name": "Rose Quartz",
                    "slug": "rose-quartz",
                    "price": 45,
                    "stock": 10,
                    "chakras": ["heart"],
                    "rarity": "common"
                })),
                entry(json!({
                    "_id": "diamond",
                    "name": "Diamond",
                    "slug": "diamond",
                    "price": 45,
                    "stock": 2,
                    "chakras": ["crown"],
                    "rarity": "collectors"
                })),
            ],
            fail: false,
        }
    }

    #[tokio::test]
    async fn test_filtered_search_returns_single_match() {
        let input = json!({
            "chakras": "heart",
            "properties": "",
            "zodiac": "",
            "minPrice": 0,
            "maxPrice": 50
        });
        let outcome = run_search(&seeded_store(), &input, &context()).await;

        assert_eq!(outcome["found"], json!(true));
        assert_eq!(outcome["totalResults"], json!(1));
        assert_eq!(outcome["crystals"][0]["name"], json!("Rose Quartz"));
        assert_eq!(outcome["message"], json!("Found 1 healing crystal matching your search."));
        assert_eq!(outcome["filters"]["chakras"], json!("heart"));
    }

    #[tokio::test]
    async fn test_no_matches_is_not_found_with_suggestions() {
        let input = json!({"chakras": "sacral"});
        let outcome = run_search(&seeded_store(), &input, &context()).await;

        assert_eq!(outcome["found"], json!(false));
        assert!(outcome.get("error").is_none(), "not found is not a failure");
        assert_eq!(outcome["crystals"], json!([]));
        assert_eq!(
            outcome["suggestions"].as_array().unwrap().len(),
            NO_MATCH_SUGGESTIONS.len()
        );
    }

    #[tokio::test]
    async fn test_store_failure_is_distinct_from_empty() {
        let store = FixtureStore {
            entries: Vec::new(),
            fail: true,
        };
        let outcome = run_search(&store, &json!({}), &context()).await;

        assert_eq!(outcome["found"], json!(false));
        assert!(
            outcome["error"].as_str().unwrap().contains("store unreachable"),
            "failure carries the error"
        );
        assert!(outcome.get("suggestions").is_none());
    }

    #[tokio::test]
    async fn test_results_are_ranked() {
        let outcome = run_search(&seeded_store(), &json!({}), &context()).await;
        // The collector's item outranks the common stone.
        assert_eq!(outcome["crystals"][0]["id"], json!("diamond"));
        assert_eq!(outcome["crystals"][1]["id"], json!("rose-quartz"));
    }

    #[tokio::test]
    async fn test_malformed_input_degrades_to_match_all() {
        let outcome = run_search(&seeded_store(), &json!({"minPrice": "cheap"}), &context()).await;
        assert_eq!(outcome["found"], json!(true));
        assert_eq!(outcome["totalResults"], json!(2));
    }
}
