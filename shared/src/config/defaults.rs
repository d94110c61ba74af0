//! Default values handed to consumers of the shared types

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{SharedError, SharedResult};
use crate::types::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::types::{Language, Pagination, Theme};

const DEFAULT_MAX_PAGE_SIZE: u32 = 100;

/// Read and parse one variable; unset is `Ok(None)`, unparsable is an error
pub(crate) fn read_var<T: FromStr>(
    source: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> SharedResult<Option<T>> {
    match source(key) {
        Some(value) => value.trim().parse().map(Some).map_err(|_| SharedError::Config {
            key: key.to_string(),
            value,
        }),
        None => Ok(None),
    }
}

/// Like `read_var`, but logs and falls back to `default` on a bad value
pub(crate) fn read_var_or<T: FromStr>(
    source: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match read_var(source, key) {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(e) => {
            tracing::warn!(key, error = %e, "Ignoring invalid configuration value");
            default
        }
    }
}

/// Pagination defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaginationDefaults {
    /// Page size used when a request does not specify one
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Upper bound applied by `clamp`
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

impl Default for PaginationDefaults {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl PaginationDefaults {
    pub(crate) fn from_source(source: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            page_size: read_var_or(source, "APP_PAGE_SIZE", default_page_size()),
            max_page_size: read_var_or(source, "APP_MAX_PAGE_SIZE", default_max_page_size()),
        }
    }

    pub(crate) fn try_from_source(source: &impl Fn(&str) -> Option<String>) -> SharedResult<Self> {
        Ok(Self {
            page_size: read_var(source, "APP_PAGE_SIZE")?.unwrap_or_else(default_page_size),
            max_page_size: read_var(source, "APP_MAX_PAGE_SIZE")?
                .unwrap_or_else(default_max_page_size),
        })
    }

    /// First page at the default page size
    pub fn pagination(&self) -> Pagination {
        Pagination::new(DEFAULT_PAGE, self.page_size)
    }

    /// Bound a request to page >= 1 and 1 <= page_size <= max_page_size
    pub fn clamp(&self, pagination: Pagination) -> Pagination {
        Pagination::new(
            pagination.page.max(1),
            pagination.page_size.clamp(1, self.max_page_size.max(1)),
        )
    }
}

/// Display defaults for clients without a stored preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayDefaults {
    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub theme: Theme,
}

impl DisplayDefaults {
    pub(crate) fn from_source(source: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            language: read_var_or(source, "APP_LANGUAGE", Language::default()),
            theme: read_var_or(source, "APP_THEME", Theme::default()),
        }
    }

    pub(crate) fn try_from_source(source: &impl Fn(&str) -> Option<String>) -> SharedResult<Self> {
        Ok(Self {
            language: read_var(source, "APP_LANGUAGE")?.unwrap_or_default(),
            theme: read_var(source, "APP_THEME")?.unwrap_or_default(),
        })
    }
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_max_page_size() -> u32 {
    DEFAULT_MAX_PAGE_SIZE
}
