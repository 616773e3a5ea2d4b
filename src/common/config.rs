//! Site configuration read once at startup

use std::env;

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub title: String,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        let title = env::var("SITE_TITLE").unwrap_or_else(|_| "Contact".to_string());

        Self { title }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_config_defaults() {
        // Save original env var
        let original_title = env::var("SITE_TITLE").ok();

        // Unset for test
        env::remove_var("SITE_TITLE");

        let config = SiteConfig::from_env();
        assert_eq!(config.title, "Contact");

        // Restore
        if let Some(val) = original_title {
            env::set_var("SITE_TITLE", val);
        }
    }
}
