//! Comparison selection and derived metrics
//!
//! A visitor can mark up to [`MAX_COMPARE`] products for side-by-side
//! comparison. The selection is keyed by product name and preserves
//! insertion order; the report derives one leader per metric by a
//! linear pass over the structured specification values.

use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Upper bound on the comparison working set.
pub const MAX_COMPARE: usize = 4;

/// The visitor's working set of products chosen for comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSelection {
    names: Vec<String>,
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a product in or out of the selection.
    ///
    /// Adds the name when absent and the set is below [`MAX_COMPARE`];
    /// removes it when present. A toggle against a full set is silently
    /// ignored. Returns whether the selection changed.
    pub fn toggle(&mut self, name: &str) -> bool {
        if let Some(pos) = self.names.iter().position(|n| n == name) {
            self.names.remove(pos);
            return true;
        }
        if self.names.len() < MAX_COMPARE {
            self.names.push(name.to_string());
            return true;
        }
        false
    }

    /// Empty the selection unconditionally.
    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.names.len() >= MAX_COMPARE
    }

    /// Selected names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Side-by-side comparison of up to [`MAX_COMPARE`] products.
///
/// Each metric names the leading product, or is `None` when no selected
/// product carries the relevant specification field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub products: Vec<Product>,
    pub most_efficient: Option<String>,
    pub highest_rated: Option<String>,
    pub most_powerful: Option<String>,
    pub most_reliable: Option<String>,
}

impl ComparisonReport {
    /// Derive the per-metric leaders. Ties keep the earlier product.
    pub fn build(products: Vec<Product>) -> Self {
        let most_efficient = leader(&products, |p| {
            p.specifications.as_ref()?.efficiency.as_ref().map(|s| s.value)
        });
        let highest_rated = leader(&products, |p| Some(f64::from(p.rating)));
        let most_powerful = leader(&products, |p| {
            p.specifications.as_ref()?.power.as_ref().map(|s| s.value)
        });
        let most_reliable = leader(&products, |p| {
            p.specifications.as_ref()?.warranty.as_ref().map(|s| s.value)
        });

        Self {
            products,
            most_efficient,
            highest_rated,
            most_powerful,
            most_reliable,
        }
    }
}

/// Name of the product maximizing `key`, skipping products without the
/// measure. Strictly-greater comparison keeps the first of equals.
fn leader<F>(products: &[Product], key: F) -> Option<String>
where
    F: Fn(&Product) -> Option<f64>,
{
    let mut best: Option<(&Product, f64)> = None;
    for product in products {
        let Some(value) = key(product) else { continue };
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((product, value)),
        }
    }
    best.map(|(p, _)| p.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryTag, SpecValue, Specifications};

    fn product(name: &str, rating: f32, specs: Option<Specifications>) -> Product {
        Product {
            name: name.to_string(),
            category: CategoryTag::SolarPv,
            subcategory: None,
            price: 100.0,
            old_price: None,
            rating,
            tags: vec![],
            description: String::new(),
            badge: None,
            sale: false,
            specifications: specs,
            target_users: None,
            applications: None,
        }
    }

    #[test]
    fn selection_never_exceeds_four() {
        let mut sel = ComparisonSelection::new();
        for name in ["a", "b", "c", "d", "e", "f"] {
            sel.toggle(name);
        }
        assert_eq!(sel.len(), MAX_COMPARE);
        assert!(!sel.contains("e"));
    }

    #[test]
    fn toggle_on_full_set_is_ignored() {
        let mut sel = ComparisonSelection::new();
        for name in ["a", "b", "c", "d"] {
            assert!(sel.toggle(name));
        }
        assert!(!sel.toggle("e"));
        // A member of a full set can still be toggled off
        assert!(sel.toggle("b"));
        assert_eq!(sel.len(), 3);
    }

    #[test]
    fn double_toggle_is_identity() {
        let mut sel = ComparisonSelection::new();
        sel.toggle("a");
        let before = sel.clone();
        sel.toggle("b");
        sel.toggle("b");
        assert_eq!(sel, before);
    }

    #[test]
    fn clear_empties_unconditionally() {
        let mut sel = ComparisonSelection::new();
        sel.toggle("a");
        sel.toggle("b");
        sel.clear();
        assert!(sel.is_empty());
    }

    #[test]
    fn report_picks_leaders_per_metric() {
        let a = product(
            "Panel A",
            4.2,
            Some(Specifications {
                power: Some(SpecValue::new(200.0, "W")),
                efficiency: Some(SpecValue::new(21.0, "%")),
                warranty: Some(SpecValue::new(2.0, "years")),
                ..Default::default()
            }),
        );
        let b = product(
            "Panel B",
            4.8,
            Some(Specifications {
                power: Some(SpecValue::new(150.0, "W")),
                efficiency: Some(SpecValue::new(23.0, "%")),
                warranty: Some(SpecValue::new(5.0, "years")),
                ..Default::default()
            }),
        );
        let report = ComparisonReport::build(vec![a, b]);
        assert_eq!(report.most_powerful.as_deref(), Some("Panel A"));
        assert_eq!(report.most_efficient.as_deref(), Some("Panel B"));
        assert_eq!(report.highest_rated.as_deref(), Some("Panel B"));
        assert_eq!(report.most_reliable.as_deref(), Some("Panel B"));
    }

    #[test]
    fn metric_without_competitors_is_none() {
        let report = ComparisonReport::build(vec![product("Bare", 4.0, None)]);
        assert_eq!(report.most_powerful, None);
        assert_eq!(report.most_efficient, None);
        assert_eq!(report.most_reliable, None);
        // Rating always exists
        assert_eq!(report.highest_rated.as_deref(), Some("Bare"));
    }

    #[test]
    fn ties_keep_the_earlier_product() {
        let report =
            ComparisonReport::build(vec![product("First", 4.5, None), product("Second", 4.5, None)]);
        assert_eq!(report.highest_rated.as_deref(), Some("First"));
    }
}
