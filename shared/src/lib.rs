//! Shared types for the Helios promotional site
//!
//! Common types used by the site server and any in-process clients:
//! catalog models, query state, comparison selection and the contact
//! form contract. This crate stays free of axum/tokio so the domain
//! logic can be exercised without a running server.

pub mod comparison;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use comparison::{ComparisonReport, ComparisonSelection, MAX_COMPARE};
pub use models::{
    CATEGORY_ALL, CatalogQuery, CategoryTag, ContactReceipt, ContactRequest, ContactSubmission,
    Product, SortKey, SpecValue, Specifications,
};
