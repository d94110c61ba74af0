//! Client device information

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static IOS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)iphone|ipad|ipod").unwrap()
});

static ANDROID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)android").unwrap()
});

static MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)mobile|iphone|ipod|android|blackberry|iemobile|opera mini").unwrap()
});

/// Device information reported by a client
///
/// The flags are independent: an iPhone reports both `is_mobile` and `is_ios`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub is_mobile: bool,

    #[serde(rename = "isIOS")]
    pub is_ios: bool,

    pub is_android: bool,
    pub screen_width: u32,
    pub screen_height: u32,
    pub user_agent: String,
}

/// Screen orientation derived from dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl DeviceInfo {
    /// Build device info by sniffing a user agent string
    pub fn from_user_agent(user_agent: impl Into<String>, screen_width: u32, screen_height: u32) -> Self {
        let user_agent = user_agent.into();
        Self {
            is_mobile: MOBILE_REGEX.is_match(&user_agent),
            is_ios: IOS_REGEX.is_match(&user_agent),
            is_android: ANDROID_REGEX.is_match(&user_agent),
            screen_width,
            screen_height,
            user_agent,
        }
    }

    pub fn is_desktop(&self) -> bool {
        !self.is_mobile
    }

    /// Square screens count as landscape
    pub fn orientation(&self) -> Orientation {
        if self.screen_height > self.screen_width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}
