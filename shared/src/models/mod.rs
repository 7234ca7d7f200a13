//! Data models
//!
//! Shared between the site server and frontend (via API).
//! The catalog is read-only reference data: products have no numeric ID,
//! `name` is the unique key throughout.

pub mod contact;
pub mod product;
pub mod query;

// Re-exports
pub use contact::*;
pub use product::*;
pub use query::*;
