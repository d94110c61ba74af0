//! Configuration module
//!
//! - `defaults` - Pagination and display defaults handed to consumers
//! - `environment` - Environment detection and logging configuration

pub mod defaults;
pub mod environment;

use serde::{Deserialize, Serialize};
use std::env;

use crate::errors::SharedResult;

// Re-export commonly used types
pub use defaults::{DisplayDefaults, PaginationDefaults};
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Complete configuration combining all sub-configurations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SharedConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Pagination defaults
    #[serde(default)]
    pub pagination: PaginationDefaults,

    /// Display defaults
    #[serde(default)]
    pub display: DisplayDefaults,
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl SharedConfig {
    fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            logging: LoggingConfig::for_environment(environment),
            pagination: PaginationDefaults::default(),
            display: DisplayDefaults::default(),
        }
    }

    /// Create configuration for development environment
    pub fn development() -> Self {
        Self::for_environment(Environment::Development)
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self::for_environment(Environment::Production)
    }

    /// Load configuration from environment, skipping values that do not parse
    pub fn from_env() -> Self {
        Self::from_source(&|key: &str| env::var(key).ok())
    }

    /// Load configuration from environment, failing on values that do not parse
    pub fn try_from_env() -> SharedResult<Self> {
        Self::try_from_source(&|key: &str| env::var(key).ok())
    }

    pub(crate) fn from_source(source: &impl Fn(&str) -> Option<String>) -> Self {
        let environment = Environment::lookup(source)
            .and_then(|name| match name.parse::<Environment>() {
                Ok(env) => Some(env),
                Err(e) => {
                    tracing::warn!(error = %e, "Unknown environment, using default");
                    None
                }
            })
            .unwrap_or_default();

        let config = Self {
            pagination: PaginationDefaults::from_source(source),
            display: DisplayDefaults::from_source(source),
            ..Self::for_environment(environment)
        };
        tracing::debug!(environment = %config.environment, "Shared configuration loaded");
        config
    }

    pub(crate) fn try_from_source(source: &impl Fn(&str) -> Option<String>) -> SharedResult<Self> {
        let environment = match Environment::lookup(source) {
            Some(name) => name.parse::<Environment>()?,
            None => Environment::default(),
        };

        Ok(Self {
            pagination: PaginationDefaults::try_from_source(source)?,
            display: DisplayDefaults::try_from_source(source)?,
            ..Self::for_environment(environment)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SharedError;
    use crate::types::{Language, Theme};
    use std::collections::HashMap;

    fn source_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_presets() {
        let dev = SharedConfig::development();
        assert!(dev.environment.is_development());
        assert_eq!(dev.logging.level, "debug");

        let prod = SharedConfig::production();
        assert!(prod.environment.is_production());
        assert_eq!(prod.logging.format, LogFormat::Json);

        assert_eq!(SharedConfig::default(), dev);
    }

    #[test]
    fn test_from_source() {
        let source = source_from(&[
            ("ENVIRONMENT", "prod"),
            ("APP_LANGUAGE", "en"),
            ("APP_PAGE_SIZE", "10"),
        ]);
        let config = SharedConfig::from_source(&source);
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.display.language, Language::EnUs);
        assert_eq!(config.display.theme, Theme::Auto);
        assert_eq!(config.pagination.page_size, 10);
    }

    #[test]
    fn test_unknown_environment() {
        let source = source_from(&[("ENVIRONMENT", "moon")]);
        assert_eq!(
            SharedConfig::from_source(&source).environment,
            Environment::Development
        );
        assert!(matches!(
            SharedConfig::try_from_source(&source),
            Err(SharedError::UnknownVariant { kind: "environment", .. })
        ));
    }

    #[test]
    fn test_strict_loading_reports_bad_value() {
        let source = source_from(&[("APP_MAX_PAGE_SIZE", "-1")]);
        assert!(SharedConfig::try_from_source(&source).is_err());
        assert_eq!(SharedConfig::from_source(&source).pagination.max_page_size, 100);
    }

    #[test]
    fn test_deserialize_with_missing_sections() {
        let config: SharedConfig =
            serde_json::from_str(r#"{"environment": "staging"}"#).unwrap();
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.pagination, PaginationDefaults::default());
        assert_eq!(config.display, DisplayDefaults::default());
    }
}
