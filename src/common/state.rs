// Application state shared across all modules

use crate::common::config::SiteConfig;

/// Application state containing site configuration.
///
/// Immutable after startup; handlers receive it as `Extension<Arc<AppState>>`
/// rather than reading ambient process state.
#[derive(Clone)]
pub struct AppState {
    pub site: SiteConfig,
}
