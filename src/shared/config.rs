//! Application configuration. Listening port, catalog endpoint, CORS origins.

use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 5000;

/// Public feature marketplace API.
pub const DEFAULT_CATALOG_URL: &str = "https://featuremarketplacewebapi.azurewebsites.net";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Listening port. Read from FEATURE_BOT_PORT, or plain PORT.
    #[serde(default)]
    pub port: Option<u16>,

    /// Base URL of the catalog API. Read from FEATURE_BOT_CATALOG_URL.
    #[serde(default)]
    pub catalog_url: Option<String>,

    /// Catalog backend: "http" (default) or "memory" for offline runs. Read from FEATURE_BOT_CATALOG.
    #[serde(default)]
    pub catalog: Option<String>,

    /// Comma-separated CORS origins. Unset means any origin. Read from FEATURE_BOT_ALLOWED_ORIGINS.
    #[serde(default)]
    pub allowed_origins: Option<String>,

    /// Completion API key. Read and reported at startup, not used for any call.
    #[serde(default)]
    pub completion_api_key: Option<String>,
}

/// Which `CatalogPort` implementation to wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogBackend {
    Http,
    Memory,
}

/// Settings handed to the catalog adapter at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("FEATURE_BOT").try_parsing(true));
        if let Ok(path) = std::env::var("FEATURE_BOT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // PORT is read directly (no prefix) so hosting platforms that inject PORT just work
        if cfg.port.is_none() {
            if let Ok(s) = std::env::var("PORT") {
                if let Ok(port) = s.parse::<u16>() {
                    cfg.port = Some(port);
                }
            }
        }
        if cfg.completion_api_key.is_none() {
            cfg.completion_api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        Ok(cfg)
    }

    /// Returns the listening port. Defaults to 5000.
    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Returns the catalog base URL without a trailing slash.
    pub fn catalog_url_or_default(&self) -> String {
        self.catalog_url
            .as_deref()
            .map(|u| u.trim().trim_end_matches('/'))
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_CATALOG_URL)
            .to_string()
    }

    /// Returns the configured catalog backend. Anything but "memory" selects HTTP.
    pub fn catalog_backend(&self) -> CatalogBackend {
        match self.catalog.as_deref().map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("memory") => CatalogBackend::Memory,
            _ => CatalogBackend::Http,
        }
    }

    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            base_url: self.catalog_url_or_default(),
        }
    }

    /// Returns the allowed CORS origins; empty means permissive.
    pub fn allowed_origins(&self) -> Vec<String> {
        self.allowed_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Returns true if a completion API key is present.
    pub fn is_completion_key_set(&self) -> bool {
        self.completion_api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.port_or_default(), 5000);
        assert_eq!(cfg.catalog_url_or_default(), DEFAULT_CATALOG_URL);
        assert_eq!(cfg.catalog_backend(), CatalogBackend::Http);
        assert!(cfg.allowed_origins().is_empty());
        assert!(!cfg.is_completion_key_set());
    }

    #[test]
    fn test_catalog_url_trailing_slash_trimmed() {
        let cfg = AppConfig {
            catalog_url: Some("http://localhost:7000/".into()),
            ..Default::default()
        };
        assert_eq!(
            cfg.catalog_config(),
            CatalogConfig {
                base_url: "http://localhost:7000".into()
            }
        );
    }

    #[test]
    fn test_allowed_origins_split() {
        let cfg = AppConfig {
            allowed_origins: Some(" https://a.example , ,http://localhost:5173".into()),
            ..Default::default()
        };
        assert_eq!(
            cfg.allowed_origins(),
            vec!["https://a.example", "http://localhost:5173"]
        );
    }

    #[test]
    fn test_memory_backend() {
        let cfg = AppConfig {
            catalog: Some("Memory".into()),
            ..Default::default()
        };
        assert_eq!(cfg.catalog_backend(), CatalogBackend::Memory);
    }
}
