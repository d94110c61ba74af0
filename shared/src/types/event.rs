//! Ad-hoc events and application errors
//!
//! Both carry an opaque JSON payload. No schema is imposed on it; the
//! `*_as` helpers give callers an opt-in typed view.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::common::{now_timestamp, Timestamp};
use crate::errors::{SharedError, SharedResult};

/// Generic event envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseEvent {
    pub id: String,

    /// Event type tag
    #[serde(rename = "type")]
    pub kind: String,

    pub timestamp: Timestamp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl BaseEvent {
    /// Create an event with a fresh id, stamped now
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind: kind.into(),
            timestamp: now_timestamp(),
            data: None,
        }
    }

    /// Attach a payload; one that cannot be represented as JSON is dropped
    pub fn with_data(mut self, data: impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => self.data = Some(value),
            Err(e) => {
                tracing::warn!(event_type = %self.kind, error = %e, "Dropping unserializable event payload");
            }
        }
        self
    }

    /// Typed view of the payload
    pub fn data_as<T: DeserializeOwned>(&self) -> SharedResult<Option<T>> {
        self.data
            .as_ref()
            .map(|value| T::deserialize(value).map_err(SharedError::from))
            .transpose()
    }
}

/// Application error as reported to clients or error channels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppError {
    /// Code from the application's error taxonomy, see `error_codes`
    pub code: String,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,

    pub timestamp: Timestamp,
}

impl AppError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            timestamp: now_timestamp(),
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Typed view of the details
    pub fn details_as<T: DeserializeOwned>(&self) -> SharedResult<Option<T>> {
        self.details
            .as_ref()
            .map(|value| T::deserialize(value).map_err(SharedError::from))
            .transpose()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<SharedError> for AppError {
    fn from(err: SharedError) -> Self {
        AppError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::error_codes;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Click {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_new_event() {
        let a = BaseEvent::new("click");
        let b = BaseEvent::new("click");
        assert_eq!(a.kind, "click");
        assert_ne!(a.id, b.id);
        assert!(a.data.is_none());
        assert!(crate::types::common::parse_timestamp(&a.timestamp).is_some());
    }

    #[test]
    fn test_event_payload_stays_opaque() {
        let event = BaseEvent::new("click").with_data(json!({"x": 3, "y": 4, "extra": [1, 2]}));
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "click");
        assert_eq!(value["data"]["extra"], json!([1, 2]));

        let click: Option<Click> = event.data_as().unwrap();
        assert_eq!(click, Some(Click { x: 3, y: 4 }));
    }

    #[test]
    fn test_event_typed_view_mismatch() {
        let event = BaseEvent::new("scroll").with_data("not a click");
        assert!(event.data_as::<Click>().is_err());

        let empty = BaseEvent::new("noop");
        assert_eq!(empty.data_as::<Click>().unwrap(), None);
    }

    #[test]
    fn test_app_error_display_and_details() {
        let err = AppError::new(error_codes::NOT_FOUND, "User not found")
            .with_details(json!({"id": "u-9"}));
        assert_eq!(err.to_string(), "[NOT_FOUND] User not found");

        let details: Option<serde_json::Value> = err.details_as().unwrap();
        assert_eq!(details, Some(json!({"id": "u-9"})));
    }

    #[test]
    fn test_app_error_from_shared_error() {
        let shared = "purple".parse::<crate::types::Theme>().unwrap_err();
        let err = AppError::from(shared);
        assert_eq!(err.code, error_codes::VALIDATION_ERROR);
        assert_eq!(err.message, "Unknown theme value: purple");
    }

    #[test]
    fn test_records_compare_structurally() {
        let event = BaseEvent::new("click").with_data(json!({"x": 1}));
        let copy = event.clone();
        assert_eq!(event, copy);
        assert_ne!(event, copy.with_data(json!({"x": 2})));

        let err = AppError::new(error_codes::UNKNOWN, "oops");
        assert_eq!(err.clone(), err);

        fn assert_eq_impl<T: Eq>() {}
        assert_eq_impl::<BaseEvent>();
        assert_eq_impl::<AppError>();
    }

    #[test]
    fn test_app_error_omits_absent_details() {
        let err = AppError::new(error_codes::TIMEOUT, "Request timed out");
        let value = serde_json::to_value(&err).unwrap();
        assert!(value.get("details").is_none());
        assert_eq!(value["code"], "TIMEOUT");
    }
}
