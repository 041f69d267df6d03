//! Catalog Configuration
//!
//! Read once at startup from a JSON block in the host page:
//!
//! ```html
//! <script id="catalog-config" type="application/json">
//!   { "seed": { "kind": "remote", "url": "products.json" } }
//! </script>
//! ```
//!
//! Every field is optional; missing fields keep their defaults.

use log::{warn, LevelFilter};
use serde::Deserialize;

/// Id of the `<script>` element holding the configuration
pub const CONFIG_ELEMENT_ID: &str = "catalog-config";

/// Where the catalog is seeded from on first use
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SeedConfig {
    /// Fetch a JSON array from `url`
    Remote { url: String },
    /// Built-in default books
    Static,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Local storage key holding the whole product list
    pub storage_key: String,
    pub seed: SeedConfig,
    /// Placeholder image service; the URL-encoded name is appended
    pub placeholder_base: String,
    pub currency_suffix: String,
    /// trace, debug, info, warn, error or off
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            storage_key: "products".to_string(),
            seed: SeedConfig::Remote {
                url: "products.json".to_string(),
            },
            placeholder_base: "https://placehold.co/400x250/eee/212529?text=".to_string(),
            currency_suffix: "₫".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Parse configuration JSON, falling back to defaults when malformed
    pub fn from_json(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(config) => config,
            Err(e) => {
                warn!("Invalid catalog config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Load from the host page's config block, if any
    pub fn from_document() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match text {
            Some(text) if !text.trim().is_empty() => Self::from_json(&text),
            _ => Self::default(),
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = CatalogConfig::from_json(r#"{ "seed": { "kind": "static" }, "logLevel": "debug" }"#);

        assert_eq!(config.seed, SeedConfig::Static);
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        assert_eq!(config.storage_key, "products");
        assert_eq!(config.currency_suffix, "₫");
    }

    #[test]
    fn test_remote_seed_url() {
        let config = CatalogConfig::from_json(
            r#"{ "storageKey": "books", "seed": { "kind": "remote", "url": "/api/books.json" } }"#,
        );

        assert_eq!(config.storage_key, "books");
        assert_eq!(
            config.seed,
            SeedConfig::Remote { url: "/api/books.json".to_string() }
        );
    }

    #[test]
    fn test_malformed_config_falls_back() {
        assert_eq!(CatalogConfig::from_json("{ nope"), CatalogConfig::default());
    }

    #[test]
    fn test_unknown_level_defaults_to_info() {
        let config = CatalogConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
