//! Similar-item search built from an entry's own metaphysical attributes.
//!
//! The filter set is derived from what the crystal *is* (chakra, healing
//! property, mineral family), never from its name, and the source entry is
//! always excluded from the results. When a filter set is too narrow it is
//! broadened by dropping the most specific dimension first, bounded at two
//! broadening attempts.

use crystal_harmony_core::{CatalogEntry, SearchFilters};

use super::{CatalogError, CatalogStore};

/// Broadening attempts after the initial search.
const MAX_BROADENING_ATTEMPTS: usize = 2;

/// Build the similarity filter set from an entry's own attributes.
///
/// Single-valued filter dimensions take the entry's first chakra and first
/// property (editorial order puts the defining association first).
#[must_use]
pub fn similarity_filters(entry: &CatalogEntry) -> SearchFilters {
    SearchFilters {
        chakras: entry.chakras.first().cloned(),
        properties: entry.properties.first().cloned(),
        mineral_family: entry.mineral_family.clone(),
        ..SearchFilters::default()
    }
}

/// Produce a strictly broader filter set by dropping the most specific
/// dimension still present: mineral family (the narrowest, scientific
/// dimension) first, then chakra, leaving the healing property as the last
/// anchor. Returns `None` once there is nothing further to drop.
#[must_use]
pub fn broadened(filters: &SearchFilters) -> Option<SearchFilters> {
    if filters.mineral_family.is_some() {
        Some(SearchFilters {
            mineral_family: None,
            ..filters.clone()
        })
    } else if filters.chakras.is_some() {
        Some(SearchFilters {
            chakras: None,
            ..filters.clone()
        })
    } else {
        None
    }
}

/// Find items similar to `entry`, excluding the entry itself.
///
/// Retries with strictly broader filters until at least `min_useful` results
/// are found or the broadening attempts are exhausted; the best result set
/// seen so far is returned either way.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub async fn find_similar<C: CatalogStore>(
    store: &C,
    entry: &CatalogEntry,
    min_useful: usize,
) -> Result<Vec<CatalogEntry>, CatalogError> {
    let mut filters = similarity_filters(entry);
    let mut best: Vec<CatalogEntry> = Vec::new();

    for attempt in 0..=MAX_BROADENING_ATTEMPTS {
        if attempt > 0 {
            match broadened(&filters) {
                Some(wider) => filters = wider,
                None => break,
            }
        }

        let mut matches = store.search(&filters).await?;
        matches.retain(|candidate| candidate.id != entry.id);

        if matches.len() >= min_useful {
            return Ok(matches);
        }
        if matches.len() > best.len() {
            best = matches;
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(value: serde_json::Value) -> CatalogEntry {
        serde_json::from_value(value).expect("entry fixture")
    }

    #[test]
    fn test_filters_come_from_attributes_not_name() {
        let amethyst = entry(json!({
            "_id": "amethyst",
            "name": "Amethyst",
            "chakras": ["third_eye", "crown"],
            "properties": ["clarity", "intuition"],
            "mineralFamily": "quartz"
        }));
        let filters = similarity_filters(&amethyst);
        assert_eq!(filters.chakras.as_deref(), Some("third_eye"));
        assert_eq!(filters.properties.as_deref(), Some("clarity"));
        assert_eq!(filters.mineral_family.as_deref(), Some("quartz"));
        assert!(filters.query.is_none(), "never searches by name");
    }

    #[test]
    fn test_broadening_drops_mineral_family_then_chakra() {
        let filters = SearchFilters {
            chakras: Some("heart".to_string()),
            properties: Some("love".to_string()),
            mineral_family: Some("quartz".to_string()),
            ..SearchFilters::default()
        };

        let first = broadened(&filters).expect("first broadening");
        assert!(first.mineral_family.is_none());
        assert_eq!(first.chakras.as_deref(), Some("heart"));

        let second = broadened(&first).expect("second broadening");
        assert!(second.chakras.is_none());
        assert_eq!(second.properties.as_deref(), Some("love"));

        assert!(broadened(&second).is_none());
    }

    #[test]
    fn test_broadening_skips_absent_dimensions() {
        let filters = SearchFilters {
            chakras: Some("heart".to_string()),
            properties: Some("love".to_string()),
            ..SearchFilters::default()
        };
        let wider = broadened(&filters).expect("broadening");
        assert!(wider.chakras.is_none(), "chakra dropped when no mineral family");
    }

    #[test]
    fn test_broadening_stops_at_property_anchor() {
        let filters = SearchFilters {
            properties: Some("love".to_string()),
            ..SearchFilters::default()
        };
        assert!(broadened(&filters).is_none());
    }
}
