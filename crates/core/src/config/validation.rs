//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `context_path` is non-empty but does not start with `/`, or ends
    ///   with `/`
    /// - `default_locale` is set but empty or contains whitespace
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.context_path.is_empty() && !self.context_path.starts_with('/') {
            return Err(ConfigError::Invalid {
                field: "context_path".into(),
                reason: "must start with '/'".into(),
            });
        }
        if self.context_path.ends_with('/') {
            return Err(ConfigError::Invalid {
                field: "context_path".into(),
                reason: "must not end with '/'".into(),
            });
        }

        if let Some(locale) = &self.default_locale {
            if locale.is_empty() || locale.chars().any(char::is_whitespace) {
                return Err(ConfigError::Invalid {
                    field: "default_locale".into(),
                    reason: "must be a locale tag such as 'fr' or 'en_US'".into(),
                });
            }
        }

        if self.context_path.is_empty() {
            tracing::warn!("context_path is empty; placeholder images resolve from the server root");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_relative_context_path() {
        let config = AppConfig { context_path: "nuxeo".into(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "context_path"));
    }

    #[test]
    fn test_validate_trailing_slash() {
        let config = AppConfig { context_path: "/nuxeo/".into(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "context_path"));
    }

    #[test]
    fn test_validate_empty_context_path_allowed() {
        let config = AppConfig { context_path: String::new(), ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_default_locale() {
        let config = AppConfig { default_locale: Some(String::new()), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "default_locale"));
    }

    #[test]
    fn test_validate_locale_with_whitespace() {
        let config = AppConfig { default_locale: Some("en US".into()), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "default_locale"));
    }

    #[test]
    fn test_validate_locale_tags() {
        for tag in ["fr", "en_US", "pt-BR"] {
            let config = AppConfig { default_locale: Some(tag.into()), ..Default::default() };
            assert!(config.validate().is_ok(), "locale tag {} should be valid", tag);
        }
    }
}
