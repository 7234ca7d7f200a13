//! Catalog loader
//!
//! Provides product data with minimal startup cost. The small essential
//! subset is embedded in the binary and always available; the complete
//! catalog lives in a JSON file and is loaded lazily, guarded so the
//! read happens at most once per process lifetime. A failed load is
//! logged and the service keeps serving the essential subset - graceful
//! degradation, not a retry policy.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use shared::models::Product;
use tokio::sync::OnceCell;

/// Embedded essential subset, bundled at compile time.
static ESSENTIAL_JSON: &str = include_str!("../../data/catalog_essential.json");

static ESSENTIAL: OnceLock<Vec<Product>> = OnceLock::new();

/// Errors raised while loading and validating a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate product name: {0}")]
    DuplicateName(String),
}

/// Catalog data service
///
/// Holds the path to the full catalog file and the one-shot load guard.
/// Concurrent triggers while a load is in flight await the same
/// initialization; the underlying read executes exactly once whether it
/// succeeds or fails.
#[derive(Debug)]
pub struct CatalogService {
    catalog_path: PathBuf,
    /// `None` inside the cell records a terminal load failure
    full: OnceCell<Option<Arc<Vec<Product>>>>,
    load_attempts: AtomicUsize,
}

impl CatalogService {
    pub fn new(catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            full: OnceCell::new(),
            load_attempts: AtomicUsize::new(0),
        }
    }

    /// The embedded essential subset. Parsed once per process; the
    /// embedded data is fixed at build time and covered by tests, so a
    /// parse failure here is a build defect.
    pub fn essential(&self) -> &'static [Product] {
        essential_catalog()
    }

    /// Resolve the full catalog, loading it on first call.
    ///
    /// Returns `None` when the load failed (now or on an earlier call);
    /// the caller is expected to fall back to [`Self::essential`].
    pub async fn ensure_full(&self) -> Option<Arc<Vec<Product>>> {
        self.full
            .get_or_init(|| async {
                self.load_attempts.fetch_add(1, Ordering::Relaxed);
                match load_catalog_file(&self.catalog_path).await {
                    Ok(products) => {
                        self.check_essential_coverage(&products);
                        tracing::info!(
                            count = products.len(),
                            path = %self.catalog_path.display(),
                            "Full catalog loaded"
                        );
                        Some(Arc::new(products))
                    }
                    Err(e) => {
                        tracing::warn!(
                            error = %e,
                            path = %self.catalog_path.display(),
                            "Full catalog load failed; continuing with essential subset"
                        );
                        None
                    }
                }
            })
            .await
            .clone()
    }

    /// The full catalog if a load already succeeded, without triggering
    /// one. Used by lookups that carry no search/filter intent.
    pub fn full_if_loaded(&self) -> Option<Arc<Vec<Product>>> {
        self.full.get().cloned().flatten()
    }

    pub fn is_full_loaded(&self) -> bool {
        self.full_if_loaded().is_some()
    }

    /// Number of underlying load attempts (0 or 1 by construction).
    pub fn load_attempts(&self) -> usize {
        self.load_attempts.load(Ordering::Relaxed)
    }

    /// Find a product by its unique name in the widest loaded view.
    pub fn find_by_name(&self, name: &str) -> Option<Product> {
        if let Some(full) = self.full_if_loaded() {
            return full.iter().find(|p| p.name == name).cloned();
        }
        self.essential().iter().find(|p| p.name == name).cloned()
    }

    /// The essential subset must be contained in the full catalog by
    /// name; a gap means the two data files drifted apart.
    fn check_essential_coverage(&self, full: &[Product]) {
        let names: HashSet<&str> = full.iter().map(|p| p.name.as_str()).collect();
        for product in self.essential() {
            if !names.contains(product.name.as_str()) {
                tracing::warn!(
                    name = %product.name,
                    "Essential product missing from full catalog"
                );
            }
        }
    }
}

fn essential_catalog() -> &'static [Product] {
    ESSENTIAL.get_or_init(|| {
        serde_json::from_str(ESSENTIAL_JSON).expect("embedded essential catalog must parse")
    })
}

/// Read and validate a catalog file.
///
/// Duplicate names fail the whole load; a record with inconsistent sale
/// pricing is rejected individually with a warning rather than displayed.
async fn load_catalog_file(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let bytes = tokio::fs::read(path).await?;
    let products: Vec<Product> = serde_json::from_slice(&bytes)?;

    let mut seen = HashSet::new();
    for product in &products {
        if !seen.insert(product.name.clone()) {
            return Err(CatalogError::DuplicateName(product.name.clone()));
        }
    }

    let (kept, rejected): (Vec<_>, Vec<_>) = products
        .into_iter()
        .partition(|p| p.has_consistent_pricing());
    for product in &rejected {
        tracing::warn!(
            name = %product.name,
            price = product.price,
            old_price = ?product.old_price,
            "Rejecting product with inconsistent sale pricing"
        );
    }

    Ok(kept)
}
