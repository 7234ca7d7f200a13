//! Product catalog
//!
//! # Structure
//!
//! - [`loader`] - essential/full catalog data with progressive disclosure
//! - [`pipeline`] - pure filter/sort/search derivation
//!
//! The essential subset is compiled into the binary and served on first
//! paint; the full catalog is read from disk at most once, the first time
//! a request signals search/filter intent.

pub mod loader;
pub mod pipeline;

pub use loader::{CatalogError, CatalogService};
