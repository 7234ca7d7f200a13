//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::comparison::{ComparisonReport, MAX_COMPARE};
use shared::models::{CatalogQuery, Product};

use crate::catalog::pipeline;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /api/products - filtered, sorted product listing
///
/// The default query ("All", empty search) is served from the embedded
/// essential subset without touching disk. A query that signals search
/// or filter intent triggers the one-time full-catalog load first; if
/// that load has failed, the pipeline quietly runs over the essential
/// subset instead.
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<CatalogQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let result = if query.requests_full_catalog() {
        match state.catalog.ensure_full().await {
            Some(full) => pipeline::apply(&full, &query),
            None => pipeline::apply(state.catalog.essential(), &query),
        }
    } else {
        pipeline::apply(state.catalog.essential(), &query)
    };

    Ok(Json(result))
}

/// GET /api/products/essential - the embedded subset, unfiltered
pub async fn list_essential(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(state.catalog.essential().to_vec()))
}

/// GET /api/products/:name - single product lookup
///
/// Resolves against the widest loaded view without triggering a load; a
/// plain lookup carries no search intent.
pub async fn get_by_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state
        .catalog
        .find_by_name(&name)
        .ok_or_else(|| AppError::NotFound(format!("Product {}", name)))?;
    Ok(Json(product))
}

/// Payload for the comparison endpoint
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub names: Vec<String>,
}

/// POST /api/products/compare - side-by-side metrics for up to 4 products
///
/// The selection is a set keyed by name, so repeated names collapse to
/// one entry (first occurrence wins). Comparing is filter-adjacent
/// intent, so the full catalog is loaded (once) before resolving names.
pub async fn compare(
    State(state): State<ServerState>,
    Json(payload): Json<CompareRequest>,
) -> AppResult<Json<ComparisonReport>> {
    let mut names: Vec<&String> = Vec::with_capacity(payload.names.len());
    for name in &payload.names {
        if !names.contains(&name) {
            names.push(name);
        }
    }

    if names.is_empty() {
        return Err(AppError::Validation(
            "select at least one product to compare".to_string(),
        ));
    }
    if names.len() > MAX_COMPARE {
        return Err(AppError::Validation(format!(
            "at most {MAX_COMPARE} products can be compared"
        )));
    }

    let _ = state.catalog.ensure_full().await;

    let mut products = Vec::with_capacity(names.len());
    for name in names {
        let product = state
            .catalog
            .find_by_name(name)
            .ok_or_else(|| AppError::NotFound(format!("Product {}", name)))?;
        products.push(product);
    }

    Ok(Json(ComparisonReport::build(products)))
}
