//! Health check routes
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | basic health check |
//! | /health/detailed | GET | uptime + per-component checks |
//!
//! # Response example
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "catalog": { "essential_count": 5, "full_loaded": false }
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::time::SystemTime;

use crate::core::ServerState;

/// Health check routes - public (no auth anywhere on this site)
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/detailed", get(detailed_health))
}

/// Basic health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (healthy | degraded)
    status: &'static str,
    version: &'static str,
    environment: String,
    catalog: CatalogSummary,
}

#[derive(Serialize)]
pub struct CatalogSummary {
    /// Size of the embedded essential subset
    essential_count: usize,
    /// Whether the one-time full-catalog load has succeeded
    full_loaded: bool,
}

/// Detailed health check response
#[derive(Serialize)]
pub struct DetailedHealthResponse {
    status: &'static str,
    version: &'static str,
    /// Uptime in seconds
    uptime_seconds: u64,
    /// Per-component check results
    checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    /// Catalog data file reachability
    catalog: CheckResult,
    /// Contact submission sink directory
    contact_sink: CheckResult,
}

/// Single check result
#[derive(Serialize)]
pub struct CheckResult {
    /// Status (ok | error)
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl CheckResult {
    fn ok() -> Self {
        Self {
            status: "ok",
            message: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: Some(message.into()),
        }
    }
}

// Server start time (lazily initialized static)
static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

fn get_uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Basic health check, including a catalog summary so monitoring can see
/// whether the lazy full load has happened.
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        catalog: CatalogSummary {
            essential_count: state.catalog.essential().len(),
            full_loaded: state.catalog.is_full_loaded(),
        },
    })
}

/// Detailed health check with component status
pub async fn detailed_health(State(state): State<ServerState>) -> Json<DetailedHealthResponse> {
    // The catalog file only matters until it has been loaded
    let catalog_check = if state.catalog.is_full_loaded() {
        CheckResult::ok()
    } else {
        match tokio::fs::metadata(&state.config.catalog_path).await {
            Ok(_) => CheckResult::ok(),
            Err(e) => CheckResult::error(format!("Catalog file unreachable: {}", e)),
        }
    };

    let contact_check = match tokio::fs::metadata(state.contact_dir()).await {
        Ok(meta) if meta.is_dir() => CheckResult::ok(),
        Ok(_) => CheckResult::error("Contact sink path is not a directory"),
        Err(e) => CheckResult::error(format!("Contact sink unreachable: {}", e)),
    };

    let all_ok = catalog_check.status == "ok" && contact_check.status == "ok";

    Json(DetailedHealthResponse {
        status: if all_ok { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: get_uptime_seconds(),
        checks: HealthChecks {
            catalog: catalog_check,
            contact_sink: contact_check,
        },
    })
}
