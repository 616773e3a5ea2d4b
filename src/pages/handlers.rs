// src/pages/handlers.rs

use axum::{
    extract::{Extension, Path},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::debug;

use super::dispatch::{self, PageAction, DEFAULT_ACTION, DEFAULT_CONTROLLER};
use super::views::{self, View};
use crate::common::AppState;

/// Body served for the robots.txt controller.
pub(crate) const ROBOTS_BODY: &str = "User-Agent: *\nDisallow: /";

/// GET / - default controller, default action
pub async fn dispatch_root(Extension(state): Extension<Arc<AppState>>) -> Response {
    run_action(&state, DEFAULT_CONTROLLER, DEFAULT_ACTION)
}

/// GET /:controller - default action
pub async fn dispatch_controller(
    Extension(state): Extension<Arc<AppState>>,
    Path(controller): Path<String>,
) -> Response {
    run_action(&state, &controller, DEFAULT_ACTION)
}

/// GET /:controller/:action
pub async fn dispatch_action(
    Extension(state): Extension<Arc<AppState>>,
    Path((controller, action)): Path<(String, String)>,
) -> Response {
    run_action(&state, &controller, &action)
}

fn run_action(state: &AppState, controller: &str, action: &str) -> Response {
    match dispatch::resolve(controller, action) {
        Ok(PageAction::Index) => views::render(View::Index, &state.site).into_response(),
        Ok(PageAction::Debug) => views::render(View::Debug, &state.site).into_response(),
        Ok(PageAction::Robots) => ROBOTS_BODY.into_response(),
        Err(miss) => {
            debug!(controller = %controller, action = %action, "no matching route");
            miss.into_response()
        }
    }
}
