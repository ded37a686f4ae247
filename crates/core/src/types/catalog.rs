//! Catalog entry records as projected from the content store.
//!
//! Entries are created and edited exclusively in the CMS; this side only
//! reads them. Every field except the document ID tolerates absence so that
//! a half-filled draft degrades per field instead of failing the whole
//! result set.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reference to the category a crystal belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Category display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Category slug for filter queries and URLs.
    #[serde(default)]
    pub slug: Option<String>,
}

/// A catalog image as projected from the store.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ImageRef {
    /// Dereferenced CDN URL, when the asset document resolves.
    #[serde(default)]
    pub url: Option<String>,
    /// Raw asset reference (`image-<id>-<WxH>-<fmt>`), for documents whose
    /// asset was not dereferenced or predates the asset pipeline.
    #[serde(rename = "ref", default)]
    pub asset_ref: Option<String>,
    /// Alt text for accessibility.
    #[serde(default)]
    pub alt: Option<String>,
}

/// A healing crystal product as stored in the CMS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Content-store document ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Crystal name.
    #[serde(default)]
    pub name: Option<String>,
    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Short description and benefits.
    #[serde(default)]
    pub description: Option<String>,
    /// Starting price in GBP.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Units in stock.
    #[serde(default)]
    pub stock: i64,
    /// Category reference.
    #[serde(default)]
    pub category: Option<CategoryRef>,
    /// Associated chakra codes, in editorial order.
    #[serde(default)]
    pub chakras: Vec<String>,
    /// Associated zodiac sign codes, in editorial order.
    #[serde(default)]
    pub zodiac: Vec<String>,
    /// Healing property codes, in editorial order.
    #[serde(default)]
    pub properties: Vec<String>,
    /// Mineral family code.
    #[serde(rename = "mineralFamily", default)]
    pub mineral_family: Option<String>,
    /// Rarity code.
    #[serde(default)]
    pub rarity: Option<String>,
    /// Mohs hardness (1-10).
    #[serde(default)]
    pub hardness: Option<f64>,
    /// Geographic origin.
    #[serde(default)]
    pub origin: Option<String>,
    /// Product images.
    #[serde(default)]
    pub images: Vec<ImageRef>,
    /// Shown on the homepage and featured sections.
    #[serde(default)]
    pub featured: bool,
    /// Recently added to the collection.
    #[serde(rename = "newArrival", default)]
    pub new_arrival: bool,
    /// Popular choice.
    #[serde(rename = "bestSeller", default)]
    pub best_seller: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_entry_deserializes() {
        let json = r#"{"_id": "product-1"}"#;
        let entry: CatalogEntry = serde_json::from_str(json).expect("deserialize");
        assert_eq!(entry.id, "product-1");
        assert!(entry.name.is_none());
        assert_eq!(entry.stock, 0);
        assert!(entry.chakras.is_empty());
        assert!(!entry.featured);
    }

    #[test]
    fn test_full_entry_deserializes() {
        let json = r#"{
            "_id": "product-2",
            "name": "Rose Quartz",
            "slug": "rose-quartz",
            "description": "The stone of unconditional love",
            "price": 45,
            "stock": 12,
            "category": {"title": "Love & Heart", "slug": "love-heart"},
            "chakras": ["heart"],
            "zodiac": ["taurus", "libra"],
            "properties": ["love", "peace"],
            "mineralFamily": "quartz",
            "rarity": "common",
            "hardness": 7,
            "origin": "Brazil",
            "images": [{"url": "https://cdn.example/rose.jpg", "alt": "Rose quartz"}],
            "featured": false,
            "newArrival": true,
            "bestSeller": true
        }"#;
        let entry: CatalogEntry = serde_json::from_str(json).expect("deserialize");
        assert_eq!(entry.name.as_deref(), Some("Rose Quartz"));
        assert_eq!(entry.price, Some(Decimal::from(45)));
        assert_eq!(entry.chakras, vec!["heart"]);
        assert_eq!(entry.mineral_family.as_deref(), Some("quartz"));
        assert!(entry.new_arrival);
        assert!(entry.best_seller);
    }
}
