//! Catalog query state
//!
//! The query a visitor builds up in the UI: a coarse category label, a
//! free-text search string and a sort key. Deserialized straight from
//! URL query parameters with sensible defaults.

use serde::{Deserialize, Serialize};

use crate::models::product::CategoryTag;

/// Sentinel category label that bypasses the category filter.
pub const CATEGORY_ALL: &str = "All";

/// Sort key for the displayed product list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// No distinct popularity signal exists in the data; currently sorts
    /// by rating, same as [`SortKey::Rating`].
    #[default]
    Popularity,
    Rating,
    /// Products carry no creation date, so this is a pass-through.
    Newest,
}

/// Query state for the catalog listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// UI category label or the "All" sentinel
    #[serde(default = "default_category")]
    pub category: String,
    /// Free-text search, matched case-insensitively as a substring
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub sort: SortKey,
}

fn default_category() -> String {
    CATEGORY_ALL.to_string()
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            category: default_category(),
            search: String::new(),
            sort: SortKey::default(),
        }
    }
}

impl CatalogQuery {
    /// Whether this query signals intent to search or filter.
    ///
    /// A non-empty search string or a non-"All" category is the trigger
    /// for the one-time full-catalog load; a sort change alone is not.
    pub fn requests_full_catalog(&self) -> bool {
        !self.search.trim().is_empty() || self.category != CATEGORY_ALL
    }
}

/// Map a UI category label to the set of data tags it covers.
///
/// UI labels are coarser than data tags ("Clean Cooking" spans both
/// cooking tiers). Unknown labels map to the empty set, so nothing
/// matches; "All" is handled by the caller and never reaches this table.
pub fn tags_for_label(label: &str) -> &'static [CategoryTag] {
    match label {
        "Clean Cooking" => &[CategoryTag::CookingLower, CategoryTag::CookingHigher],
        "Solar PV" => &[CategoryTag::SolarPv],
        "Productive Use" => &[CategoryTag::Pue],
        "Water Pumping" => &[CategoryTag::WaterPumping],
        "Street Lights" => &[CategoryTag::StreetLights],
        "Power Backup" => &[CategoryTag::PowerBackup],
        "Advisory" => &[CategoryTag::Advisory],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_serves_essential() {
        let q = CatalogQuery::default();
        assert!(!q.requests_full_catalog());
    }

    #[test]
    fn search_text_triggers_full_catalog() {
        let q = CatalogQuery {
            search: "200w".to_string(),
            ..Default::default()
        };
        assert!(q.requests_full_catalog());
    }

    #[test]
    fn whitespace_search_does_not_trigger() {
        let q = CatalogQuery {
            search: "   ".to_string(),
            ..Default::default()
        };
        assert!(!q.requests_full_catalog());
    }

    #[test]
    fn non_default_category_triggers_full_catalog() {
        let q = CatalogQuery {
            category: "Solar PV".to_string(),
            ..Default::default()
        };
        assert!(q.requests_full_catalog());
    }

    #[test]
    fn coarse_label_spans_both_cooking_tiers() {
        let tags = tags_for_label("Clean Cooking");
        assert_eq!(
            tags,
            &[CategoryTag::CookingLower, CategoryTag::CookingHigher]
        );
    }

    #[test]
    fn unknown_label_matches_nothing() {
        assert!(tags_for_label("Wind Turbines").is_empty());
    }
}
