// src/pages/dispatch.rs

use axum::{http::StatusCode, response::IntoResponse};

/// Page actions reachable through the routing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Index,
    Debug,
    Robots,
}

/// A routing miss. The two cases answer with different 404 bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    ControllerNotFound,
    ActionNotFound,
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> axum::response::Response {
        let body = match self {
            DispatchError::ControllerNotFound => "controller not found",
            DispatchError::ActionNotFound => "action not found",
        };
        (StatusCode::NOT_FOUND, body).into_response()
    }
}

pub const DEFAULT_CONTROLLER: &str = "application";
pub const DEFAULT_ACTION: &str = "index";

/// Static two-level routing table: controller, then action.
const ROUTING_RULES: &[(&str, &[(&str, PageAction)])] = &[
    ("application", &[("index", PageAction::Index)]),
    ("robots.txt", &[("index", PageAction::Robots)]),
    ("debug", &[("index", PageAction::Debug)]),
];

/// Resolve a controller/action pair against the routing table.
pub fn resolve(controller: &str, action: &str) -> Result<PageAction, DispatchError> {
    let actions = ROUTING_RULES
        .iter()
        .find(|(name, _)| *name == controller)
        .map(|(_, actions)| *actions)
        .ok_or(DispatchError::ControllerNotFound)?;

    actions
        .iter()
        .find(|(name, _)| *name == action)
        .map(|(_, page)| *page)
        .ok_or(DispatchError::ActionNotFound)
}
