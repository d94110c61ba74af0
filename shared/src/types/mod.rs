//! Type definitions module with domain-specific sub-modules
//!
//! This module organizes types into logical categories:
//! - `common` - Timestamps, uploaded files, locations, time ranges, sorting and filters
//! - `device` - Client device information
//! - `event` - Ad-hoc events and application errors
//! - `pagination` - Pagination requests and paged results
//! - `preferences` - Theme and language
//! - `response` - Response envelope and loading state
//! - `user` - User records and presence status

pub mod common;
pub mod device;
pub mod event;
pub mod pagination;
pub mod preferences;
pub mod response;
pub mod user;

// Re-export commonly used types at module level
pub use common::{
    now_timestamp, parse_timestamp, FilterParams, Location, SortOrder, TimeRange, Timestamp,
    UploadFile,
};
pub use device::{DeviceInfo, Orientation};
pub use event::{AppError, BaseEvent};
pub use pagination::{PaginatedResponse, Pagination};
pub use preferences::{Language, Theme};
pub use response::{ApiResponse, LoadingState};
pub use user::{User, UserStatus};
