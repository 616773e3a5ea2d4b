// src/pages/views.rs

use axum::response::Html;

use crate::common::SiteConfig;

const LAYOUT: &str = include_str!("../../templates/layout.html");
const INDEX_BODY: &str = include_str!("../../templates/index.html");
const DEBUG_BODY: &str = include_str!("../../templates/debug.html");

/// Pages known to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Index,
    Debug,
}

impl View {
    fn body(self) -> &'static str {
        match self {
            View::Index => INDEX_BODY,
            View::Debug => DEBUG_BODY,
        }
    }
}

/// Render a view into the site layout.
///
/// Plain placeholder substitution over templates embedded at compile time,
/// so rendering cannot fail at runtime.
pub fn render(view: View, site: &SiteConfig) -> Html<String> {
    let page = LAYOUT
        .replace("{{title}}", &site.title)
        .replace("{{content}}", view.body());
    Html(page)
}
