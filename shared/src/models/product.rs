//! Product Model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed machine-readable product classification.
///
/// Distinct from the coarser UI-facing category labels, which map to one
/// or more tags (see [`crate::models::query::tags_for_label`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryTag {
    CookingLower,
    CookingHigher,
    SolarPv,
    Pue,
    WaterPumping,
    StreetLights,
    PowerBackup,
    Advisory,
}

/// A measure with its unit, e.g. `{ value: 95.0, unit: "%" }`.
///
/// Specification fields are structured pairs rather than display strings
/// ("95% efficiency") so comparisons never have to parse free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecValue {
    pub value: f64,
    pub unit: String,
}

impl SpecValue {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Sparse technical specifications; presence varies per product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Specifications {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<SpecValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<SpecValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty: Option<SpecValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<SpecValue>,
}

/// Product entity
///
/// Read-only reference data for the lifetime of the process. `name` is
/// unique across the catalog and serves as the list key and the join key
/// for comparison selections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub category: CategoryTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub price: f64,
    /// Present only when a discount applies; must exceed `price` when
    /// `sale` is set (enforced at catalog load time).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_price: Option<f64>,
    /// Score on a 0-5 scale
    pub rating: f32,
    /// Ordered free-text labels, searched and shown as chips
    #[serde(default)]
    pub tags: Vec<String>,
    pub description: String,
    /// Single promotional label ("POPULAR", "PREMIUM"); overridden by `sale`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default)]
    pub sale: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifications: Option<Specifications>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_users: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications: Option<Vec<String>>,
}

impl Product {
    /// Discounted pricing is only displayed when it is internally
    /// consistent: `sale` requires an `old_price` strictly above `price`.
    pub fn has_consistent_pricing(&self) -> bool {
        if self.sale {
            matches!(self.old_price, Some(old) if old > self.price)
        } else {
            true
        }
    }
}
