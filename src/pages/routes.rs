// src/pages/routes.rs

use axum::{routing::get, Router};

use super::handlers;

/// Create the pages router with the GET front controller
pub fn pages_routes() -> Router {
    Router::new()
        .route("/", get(handlers::dispatch_root))
        .route("/:controller", get(handlers::dispatch_controller))
        .route("/:controller/:action", get(handlers::dispatch_action))
}
