//! Tests for pages module
//!
//! These tests verify the front controller behavior:
//! - Routing table resolution and its two distinct 404 outcomes
//! - The robots.txt literal body
//! - View rendering into the site layout

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::{Html, IntoResponse};

    use crate::common::SiteConfig;
    use crate::pages::dispatch::{
        resolve, DispatchError, PageAction, DEFAULT_ACTION, DEFAULT_CONTROLLER,
    };
    use crate::pages::handlers::ROBOTS_BODY;
    use crate::pages::views::{render, View};

    fn site() -> SiteConfig {
        SiteConfig {
            title: "My Site".to_string(),
        }
    }

    #[test]
    fn test_resolve_registered_routes() {
        assert_eq!(resolve("application", "index"), Ok(PageAction::Index));
        assert_eq!(resolve("debug", "index"), Ok(PageAction::Debug));
        assert_eq!(resolve("robots.txt", "index"), Ok(PageAction::Robots));
    }

    #[test]
    fn test_resolve_defaults_point_at_index_page() {
        assert_eq!(
            resolve(DEFAULT_CONTROLLER, DEFAULT_ACTION),
            Ok(PageAction::Index)
        );
    }

    #[test]
    fn test_resolve_unknown_controller() {
        assert_eq!(
            resolve("nosuch", "index"),
            Err(DispatchError::ControllerNotFound)
        );
    }

    #[test]
    fn test_resolve_unknown_action() {
        assert_eq!(resolve("debug", "nosuch"), Err(DispatchError::ActionNotFound));
    }

    #[tokio::test]
    async fn test_dispatch_errors_render_plain_text_404() {
        for (miss, expected) in [
            (DispatchError::ControllerNotFound, "controller not found"),
            (DispatchError::ActionNotFound, "action not found"),
        ] {
            let response = miss.into_response();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);

            let bytes = to_bytes(response.into_body(), usize::MAX)
                .await
                .expect("readable body");
            assert_eq!(&bytes[..], expected.as_bytes());
        }
    }

    #[test]
    fn test_robots_body_literal() {
        assert_eq!(ROBOTS_BODY, "User-Agent: *\nDisallow: /");
    }

    #[test]
    fn test_render_embeds_title_and_body() {
        let Html(page) = render(View::Index, &site());
        assert!(page.contains("<title>My Site</title>"));
        assert!(page.contains("contact-form"));
        assert!(!page.contains("{{title}}"));
        assert!(!page.contains("{{content}}"));
    }

    #[test]
    fn test_render_debug_page() {
        let Html(page) = render(View::Debug, &site());
        assert!(page.contains("Debug"));
    }
}
