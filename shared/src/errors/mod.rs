//! Shared error types and application error codes

use thiserror::Error;

/// Errors produced by the helpers in this crate
///
/// The shapes themselves never fail; these only surface from opt-in
/// parsing, typed payload views and strict configuration loading.
#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Unknown {kind} value: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration value for {key}: {value}")]
    Config { key: String, value: String },

    #[error("Tracing subscriber could not be installed: {0}")]
    Logging(String),
}

impl SharedError {
    pub(crate) fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        SharedError::UnknownVariant {
            kind,
            value: value.into(),
        }
    }

    /// Application error code matching this error
    pub fn code(&self) -> &'static str {
        match self {
            SharedError::UnknownVariant { .. } => error_codes::VALIDATION_ERROR,
            SharedError::Serialization(_) => error_codes::SERIALIZATION_ERROR,
            SharedError::Config { .. } => error_codes::CONFIG_ERROR,
            SharedError::Logging(_) => error_codes::INTERNAL_ERROR,
        }
    }
}

/// Result type with SharedError as error
pub type SharedResult<T> = Result<T, SharedError>;

/// Common error codes carried in `AppError::code`
pub mod error_codes {
    pub const UNKNOWN: &str = "UNKNOWN";
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
    pub const TIMEOUT: &str = "TIMEOUT";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const FORBIDDEN: &str = "FORBIDDEN";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_message() {
        let err = SharedError::unknown_variant("theme", "purple");
        assert_eq!(err.to_string(), "Unknown theme value: purple");
        assert_eq!(err.code(), error_codes::VALIDATION_ERROR);
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: SharedError = json_err.into();
        assert!(matches!(err, SharedError::Serialization(_)));
        assert_eq!(err.code(), error_codes::SERIALIZATION_ERROR);
    }

    #[test]
    fn test_config_error_message() {
        let err = SharedError::Config {
            key: "APP_PAGE_SIZE".to_string(),
            value: "lots".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for APP_PAGE_SIZE: lots"
        );
        assert_eq!(err.code(), error_codes::CONFIG_ERROR);
    }
}
