//! Shared data shapes for the application
//!
//! This crate provides the vocabulary other modules import:
//! - Response envelopes, pagination and loading state
//! - User, uploaded file, location, device and event records
//! - Closed value sets: user status, sort order, theme and language
//! - Error codes, configuration defaults and tracing setup

pub mod config;
pub mod errors;
pub mod logging;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    DisplayDefaults, Environment, LogFormat, LoggingConfig, PaginationDefaults, SharedConfig,
};
pub use errors::{error_codes, SharedError, SharedResult};
pub use logging::init_tracing;
pub use types::{
    ApiResponse, AppError, BaseEvent, DeviceInfo, FilterParams, Language, LoadingState, Location,
    Orientation, PaginatedResponse, Pagination, SortOrder, Theme, TimeRange, Timestamp,
    UploadFile, User, UserStatus,
};
