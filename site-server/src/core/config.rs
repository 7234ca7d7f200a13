use std::path::PathBuf;

/// Server configuration
///
/// # Environment variables
///
/// Every item can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/helios/site | working directory (contact sink, logs) |
/// | HTTP_PORT | 3000 | HTTP service port |
/// | CATALOG_PATH | data/catalog_full.json | full product catalog file |
/// | ENVIRONMENT | development | runtime environment |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/helios HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for contact submissions and logs
    pub work_dir: String,
    /// HTTP API service port
    pub http_port: u16,
    /// Path to the full catalog JSON file (loaded lazily)
    pub catalog_path: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/helios/site".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            catalog_path: std::env::var("CATALOG_PATH")
                .unwrap_or_else(|_| "data/catalog_full.json".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override selected values, typically for tests.
    pub fn with_overrides(
        work_dir: impl Into<String>,
        catalog_path: impl Into<String>,
        http_port: u16,
    ) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.catalog_path = catalog_path.into();
        config.http_port = http_port;
        config
    }

    /// Directory where contact submissions are appended.
    pub fn contact_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("contact")
    }

    /// Ensure the working directory structure exists.
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.contact_dir())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
