//! Result shaping and ranking for catalog searches.
//!
//! Normalization is a pure per-entry function: vocabulary codes expand to
//! display labels (unknown codes pass through), stock counts collapse into
//! availability bands, prices format as GBP, and a one-paragraph
//! metaphysical summary is composed. Ranking is a total order over the
//! normalized set: featured entries first, then rarity (collector's items
//! before common stones), then price ascending, with input order as the
//! final tie-break.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crystal_harmony_core::{
    CatalogEntry, Rarity, StockStatus, chakra_label, format_gbp, mineral_family_label,
    property_label, zodiac_label,
};

use crate::sanity::resolve_image_url;

/// Display-ready projection of a catalog entry.
///
/// Transient: recomputed on every query, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItem {
    pub id: String,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    /// GBP display string ("£29.90"); absent when the entry has no price.
    pub price_formatted: Option<String>,
    pub category: Option<String>,
    pub category_slug: Option<String>,
    /// Chakra display labels in the entry's own order.
    pub chakras: Vec<String>,
    /// Zodiac display labels in the entry's own order.
    pub zodiac: Vec<String>,
    /// Healing property display labels in the entry's own order.
    pub healing_properties: Vec<String>,
    pub mineral_family: Option<String>,
    pub hardness: Option<f64>,
    pub origin: Option<String>,
    pub stock_count: i64,
    pub stock_status: StockStatus,
    pub stock_message: String,
    pub featured: bool,
    pub new_arrival: bool,
    pub best_seller: bool,
    /// Rarity display label; unknown codes pass through.
    pub rarity: Option<String>,
    pub image_url: Option<String>,
    pub all_images: Vec<String>,
    /// Relative product detail path, absent when the entry has no slug.
    pub product_url: Option<String>,
    pub metaphysical_summary: String,
}

impl SearchResultItem {
    /// Normalize one catalog entry into its display projection.
    ///
    /// `low_stock_threshold` comes from configuration; `project_id`/`dataset`
    /// anchor image reference expansion.
    #[must_use]
    pub fn from_entry(
        entry: &CatalogEntry,
        low_stock_threshold: i64,
        project_id: &str,
        dataset: &str,
    ) -> Self {
        let chakras: Vec<String> = entry.chakras.iter().map(|c| chakra_label(c)).collect();
        let zodiac: Vec<String> = entry.zodiac.iter().map(|z| zodiac_label(z)).collect();
        let healing_properties: Vec<String> =
            entry.properties.iter().map(|p| property_label(p)).collect();
        let rarity = entry.rarity.as_deref().map(|r| Rarity::label_for_code(r));

        let stock_status = StockStatus::from_count(entry.stock, low_stock_threshold);
        let all_images: Vec<String> = entry
            .images
            .iter()
            .filter_map(|img| resolve_image_url(project_id, dataset, img))
            .collect();

        let metaphysical_summary =
            compose_summary(entry.name.as_deref(), &chakras, &healing_properties, &zodiac);

        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            slug: entry.slug.clone(),
            description: entry.description.clone(),
            price: entry.price,
            price_formatted: entry.price.map(format_gbp),
            category: entry.category.as_ref().and_then(|c| c.title.clone()),
            category_slug: entry.category.as_ref().and_then(|c| c.slug.clone()),
            chakras,
            zodiac,
            healing_properties,
            mineral_family: entry.mineral_family.as_deref().map(mineral_family_label),
            hardness: entry.hardness,
            origin: entry.origin.clone(),
            stock_count: entry.stock,
            stock_status,
            stock_message: stock_status.message(entry.stock),
            featured: entry.featured,
            new_arrival: entry.new_arrival,
            best_seller: entry.best_seller,
            rarity,
            image_url: all_images.first().cloned(),
            all_images,
            product_url: entry.slug.as_ref().map(|slug| format!("/products/{slug}")),
            metaphysical_summary,
        }
    }
}

/// Compose the one-paragraph metaphysical summary.
///
/// Chakras fall back to "various", properties to "spiritual healing", and
/// the zodiac clause is appended only when the sign set is non-empty.
fn compose_summary(
    name: Option<&str>,
    chakras: &[String],
    properties: &[String],
    zodiac: &[String],
) -> String {
    let name = name.unwrap_or("crystal");
    let chakra_list = if chakras.is_empty() {
        "various".to_string()
    } else {
        chakras.join(", ")
    };
    let chakra_plural = if chakras.len() == 1 { "" } else { "s" };
    let property_list = if properties.is_empty() {
        "spiritual healing".to_string()
    } else {
        properties.join(", ").to_lowercase()
    };
    let zodiac_clause = if zodiac.is_empty() {
        String::new()
    } else {
        format!(
            " It's particularly beneficial for {} zodiac signs.",
            zodiac.join(", ")
        )
    };

    format!(
        "This {name} is associated with {chakra_list} chakra{chakra_plural} and helps with {property_list}.{zodiac_clause}"
    )
}

/// Rank a normalized result set in place.
///
/// Featured entries first; then rarity, collector's items before common
/// stones and unknown rarities last; then price ascending with an absent
/// price treated as zero. The sort is stable, so entries equal on all three
/// keys keep their input order.
pub fn rank_results(results: &mut [SearchResultItem]) {
    results.sort_by(|a, b| {
        b.featured
            .cmp(&a.featured)
            .then_with(|| {
                Rarity::rank_of_label(a.rarity.as_deref())
                    .cmp(&Rarity::rank_of_label(b.rarity.as_deref()))
            })
            .then_with(|| {
                a.price
                    .unwrap_or(Decimal::ZERO)
                    .cmp(&b.price.unwrap_or(Decimal::ZERO))
            })
    });
}
