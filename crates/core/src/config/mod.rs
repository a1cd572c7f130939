//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (LIGHTBOX_*)
//! 2. TOML config file (if LIGHTBOX_CONFIG_FILE set)
//! 3. Built-in defaults

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Relative path of the placeholder asset, under the application base path.
const EMPTY_PICTURE_PATH: &str = "img/empty_picture.png";

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (LIGHTBOX_*)
/// 2. TOML config file (if LIGHTBOX_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application base path the CMS is served under, used to build
    /// placeholder image URLs.
    ///
    /// Set via LIGHTBOX_CONTEXT_PATH environment variable.
    #[serde(default = "default_context_path")]
    pub context_path: String,

    /// Locale tag used for date formatting when no cookie locale exists.
    ///
    /// Set via LIGHTBOX_DEFAULT_LOCALE environment variable. When unset,
    /// dates fall back to the platform default locale.
    #[serde(default)]
    pub default_locale: Option<String>,
}

fn default_context_path() -> String {
    "/nuxeo".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { context_path: default_context_path(), default_locale: None }
    }
}

impl AppConfig {
    /// URL of the placeholder image shown for documents without a usable
    /// picture rendition.
    pub fn empty_picture_url(&self) -> String {
        format!("{}/{}", self.context_path, EMPTY_PICTURE_PATH)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `LIGHTBOX_`
    /// 2. TOML file from `LIGHTBOX_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("LIGHTBOX_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(Env::prefixed("LIGHTBOX_").map(|key| key.as_str().to_lowercase().into()));

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.context_path, "/nuxeo");
        assert!(config.default_locale.is_none());
    }

    #[test]
    fn test_empty_picture_url() {
        let config = AppConfig::default();
        assert_eq!(config.empty_picture_url(), "/nuxeo/img/empty_picture.png");
    }

    #[test]
    fn test_empty_picture_url_custom_base() {
        let config = AppConfig { context_path: "/cms".into(), ..Default::default() };
        assert_eq!(config.empty_picture_url(), "/cms/img/empty_picture.png");
    }
}
