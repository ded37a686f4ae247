//! Filter vocabularies shared by the query builder and the presentation layer.
//!
//! Each dimension is a closed enum with a canonical display label. Catalog
//! entries carry raw string codes, so label expansion goes through the
//! `*_label` free functions: a known code maps to its display label, an
//! unknown code is echoed back verbatim. Lookups never fail.

use serde::{Deserialize, Serialize};

/// One of the seven body energy centers used as a filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chakra {
    Root,
    Sacral,
    SolarPlexus,
    Heart,
    Throat,
    ThirdEye,
    Crown,
}

impl Chakra {
    /// All chakras in canonical (root-to-crown) order.
    pub const ALL: [Self; 7] = [
        Self::Root,
        Self::Sacral,
        Self::SolarPlexus,
        Self::Heart,
        Self::Throat,
        Self::ThirdEye,
        Self::Crown,
    ];

    /// The wire-level code stored in the content store.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Sacral => "sacral",
            Self::SolarPlexus => "solar_plexus",
            Self::Heart => "heart",
            Self::Throat => "throat",
            Self::ThirdEye => "third_eye",
            Self::Crown => "crown",
        }
    }

    /// Human-readable display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Root => "Root",
            Self::Sacral => "Sacral",
            Self::SolarPlexus => "Solar Plexus",
            Self::Heart => "Heart",
            Self::Throat => "Throat",
            Self::ThirdEye => "Third Eye",
            Self::Crown => "Crown",
        }
    }

    /// Look up a chakra by its wire-level code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

/// Zodiac sign association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// All signs in calendar order.
    pub const ALL: [Self; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// The wire-level code stored in the content store.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Aries => "aries",
            Self::Taurus => "taurus",
            Self::Gemini => "gemini",
            Self::Cancer => "cancer",
            Self::Leo => "leo",
            Self::Virgo => "virgo",
            Self::Libra => "libra",
            Self::Scorpio => "scorpio",
            Self::Sagittarius => "sagittarius",
            Self::Capricorn => "capricorn",
            Self::Aquarius => "aquarius",
            Self::Pisces => "pisces",
        }
    }

    /// Human-readable display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Look up a sign by its wire-level code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|z| z.code() == code)
    }
}

/// Metaphysical healing property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealingProperty {
    Protection,
    Love,
    Healing,
    Prosperity,
    Clarity,
    Grounding,
    Energy,
    Peace,
    Intuition,
    Transformation,
}

impl HealingProperty {
    /// All healing properties.
    pub const ALL: [Self; 10] = [
        Self::Protection,
        Self::Love,
        Self::Healing,
        Self::Prosperity,
        Self::Clarity,
        Self::Grounding,
        Self::Energy,
        Self::Peace,
        Self::Intuition,
        Self::Transformation,
    ];

    /// The wire-level code stored in the content store.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Protection => "protection",
            Self::Love => "love",
            Self::Healing => "healing",
            Self::Prosperity => "prosperity",
            Self::Clarity => "clarity",
            Self::Grounding => "grounding",
            Self::Energy => "energy",
            Self::Peace => "peace",
            Self::Intuition => "intuition",
            Self::Transformation => "transformation",
        }
    }

    /// Human-readable display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Protection => "Protection",
            Self::Love => "Love",
            Self::Healing => "Healing",
            Self::Prosperity => "Prosperity",
            Self::Clarity => "Clarity",
            Self::Grounding => "Grounding",
            Self::Energy => "Energy",
            Self::Peace => "Peace",
            Self::Intuition => "Intuition",
            Self::Transformation => "Transformation",
        }
    }

    /// Look up a property by its wire-level code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }
}

/// Mineralogical family classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MineralFamily {
    Quartz,
    Feldspar,
    Mica,
    Carbonate,
    Sulfate,
    Silicate,
    Oxide,
    Sulfide,
    Halide,
    Organic,
}

impl MineralFamily {
    /// All mineral families.
    pub const ALL: [Self; 10] = [
        Self::Quartz,
        Self::Feldspar,
        Self::Mica,
        Self::Carbonate,
        Self::Sulfate,
        Self::Silicate,
        Self::Oxide,
        Self::Sulfide,
        Self::Halide,
        Self::Organic,
    ];

    /// The wire-level code stored in the content store.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Quartz => "quartz",
            Self::Feldspar => "feldspar",
            Self::Mica => "mica",
            Self::Carbonate => "carbonate",
            Self::Sulfate => "sulfate",
            Self::Silicate => "silicate",
            Self::Oxide => "oxide",
            Self::Sulfide => "sulfide",
            Self::Halide => "halide",
            Self::Organic => "organic",
        }
    }

    /// Human-readable display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quartz => "Quartz",
            Self::Feldspar => "Feldspar",
            Self::Mica => "Mica",
            Self::Carbonate => "Carbonate",
            Self::Sulfate => "Sulfate",
            Self::Silicate => "Silicate",
            Self::Oxide => "Oxide",
            Self::Sulfide => "Sulfide",
            Self::Halide => "Halide",
            Self::Organic => "Organic",
        }
    }

    /// Look up a family by its wire-level code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }
}

/// Expand a raw chakra code to its display label, echoing unknown codes.
#[must_use]
pub fn chakra_label(code: &str) -> String {
    Chakra::from_code(code).map_or_else(|| code.to_string(), |c| c.label().to_string())
}

/// Expand a raw zodiac code to its display label, echoing unknown codes.
#[must_use]
pub fn zodiac_label(code: &str) -> String {
    ZodiacSign::from_code(code).map_or_else(|| code.to_string(), |z| z.label().to_string())
}

/// Expand a raw healing-property code to its display label, echoing unknown codes.
#[must_use]
pub fn property_label(code: &str) -> String {
    HealingProperty::from_code(code).map_or_else(|| code.to_string(), |p| p.label().to_string())
}

/// Expand a raw mineral-family code to its display label, echoing unknown codes.
#[must_use]
pub fn mineral_family_label(code: &str) -> String {
    MineralFamily::from_code(code).map_or_else(|| code.to_string(), |m| m.label().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chakra_label_known_codes() {
        assert_eq!(chakra_label("solar_plexus"), "Solar Plexus");
        assert_eq!(chakra_label("third_eye"), "Third Eye");
        assert_eq!(chakra_label("heart"), "Heart");
    }

    #[test]
    fn test_unknown_codes_pass_through() {
        assert_eq!(chakra_label("soul_star"), "soul_star");
        assert_eq!(zodiac_label("ophiuchus"), "ophiuchus");
        assert_eq!(property_label("luck"), "luck");
        assert_eq!(mineral_family_label("meteorite"), "meteorite");
    }

    #[test]
    fn test_vocabulary_sizes() {
        assert_eq!(Chakra::ALL.len(), 7);
        assert_eq!(ZodiacSign::ALL.len(), 12);
        assert_eq!(HealingProperty::ALL.len(), 10);
        assert_eq!(MineralFamily::ALL.len(), 10);
    }

    #[test]
    fn test_code_roundtrip() {
        for chakra in Chakra::ALL {
            assert_eq!(Chakra::from_code(chakra.code()), Some(chakra));
        }
        for sign in ZodiacSign::ALL {
            assert_eq!(ZodiacSign::from_code(sign.code()), Some(sign));
        }
    }

    #[test]
    fn test_serde_wire_form() {
        let json = serde_json::to_string(&Chakra::ThirdEye).expect("serialize");
        assert_eq!(json, "\"third_eye\"");
        let parsed: ZodiacSign = serde_json::from_str("\"sagittarius\"").expect("deserialize");
        assert_eq!(parsed, ZodiacSign::Sagittarius);
    }
}
