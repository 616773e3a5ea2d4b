// src/forms/routes.rs

use axum::{routing::post, Router};

use super::handlers;

/// Create the forms router with the AJAX endpoint
pub fn forms_routes() -> Router {
    Router::new().route("/", post(handlers::ajax_submit))
}
