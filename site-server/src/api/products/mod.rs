//! Products API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/products", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        // Fixed segments before /{name} to avoid path conflicts
        .route("/essential", get(handler::list_essential))
        .route("/compare", post(handler::compare))
        .route("/{name}", get(handler::get_by_name))
}
