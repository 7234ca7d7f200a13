use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::CatalogService;
use crate::core::{Config, Result};

/// Server state - shared references held by every handler
///
/// Cheap to clone (`Arc` internals). The catalog is the only component
/// with interior state: its one-shot full-load guard.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | configuration (immutable) |
/// | catalog | Arc<CatalogService> | essential/full product data |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Product catalog with progressive disclosure loading
    pub catalog: Arc<CatalogService>,
}

impl ServerState {
    /// Initialize server state.
    ///
    /// Creates the working directory structure and wires the catalog
    /// service to the configured full-catalog path. The full catalog is
    /// NOT read here; it loads lazily on the first filtered request.
    pub fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let catalog = Arc::new(CatalogService::new(&config.catalog_path));

        Ok(Self {
            config: config.clone(),
            catalog,
        })
    }

    /// Directory where contact submissions are appended.
    pub fn contact_dir(&self) -> PathBuf {
        self.config.contact_dir()
    }
}
