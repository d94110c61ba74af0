//! Display preferences: theme and language

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SharedError;

/// Colour theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the system setting
    Auto,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Auto
    }
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }

    /// Resolve `Auto` against the system preference; explicit themes are kept
    pub fn resolve(self, system_prefers_dark: bool) -> Theme {
        match self {
            Theme::Auto if system_prefers_dark => Theme::Dark,
            Theme::Auto => Theme::Light,
            explicit => explicit,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "auto" => Ok(Theme::Auto),
            _ => Err(SharedError::unknown_variant("theme", s)),
        }
    }
}

/// Language preference for internationalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Default for Language {
    fn default() -> Self {
        Language::ZhCn
    }
}

impl Language {
    /// Locale code as sent on the wire
    pub fn code(&self) -> &'static str {
        match self {
            Language::ZhCn => "zh-CN",
            Language::EnUs => "en-US",
        }
    }

    /// Get language name in English
    pub fn name(&self) -> &'static str {
        match self {
            Language::ZhCn => "Chinese (Simplified)",
            Language::EnUs => "English (US)",
        }
    }

    /// Get native language name
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::ZhCn => "简体中文",
            Language::EnUs => "English",
        }
    }

    fn from_primary_subtag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.trim().to_lowercase();
        match primary.as_str() {
            "zh" => Some(Language::ZhCn),
            "en" => Some(Language::EnUs),
            _ => None,
        }
    }

    /// Pick a language from an Accept-Language header
    ///
    /// Tags are tried in descending q-value order, and any `zh-*` or `en-*`
    /// tag maps to the supported locale. A q-value that is not a finite
    /// number counts as 0. Falls back to the default.
    pub fn from_accept_language(header: &str) -> Self {
        let mut tags: Vec<(&str, f32)> = header
            .split(',')
            .filter_map(|part| {
                let mut pieces = part.split(';');
                let tag = pieces.next()?.trim();
                if tag.is_empty() {
                    return None;
                }
                let quality = pieces
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|q| q.trim().parse::<f32>().ok())
                    .map(|q| if q.is_finite() { q.clamp(0.0, 1.0) } else { 0.0 })
                    .unwrap_or(1.0);
                Some((tag, quality))
            })
            .collect();

        // Stable sort keeps header order among equal weights
        tags.sort_by(|a, b| b.1.total_cmp(&a.1));

        match tags
            .iter()
            .filter(|(_, q)| *q > 0.0)
            .find_map(|(tag, _)| Self::from_primary_subtag(tag))
        {
            Some(language) => language,
            None => {
                tracing::debug!(header, "No supported language in Accept-Language, using default");
                Language::default()
            }
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "zh-cn" | "zh" => Ok(Language::ZhCn),
            "en-us" | "en" => Ok(Language::EnUs),
            _ => Err(SharedError::unknown_variant("language", s)),
        }
    }
}
