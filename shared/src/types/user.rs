//! User record and presence status

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::common::Timestamp;
use crate::errors::SharedError;

/// Presence status of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Online,
    Offline,
    Away,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Online => "online",
            UserStatus::Offline => "offline",
            UserStatus::Away => "away",
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, UserStatus::Online)
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = SharedError;

    // Strict: only the exact wire literals are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(UserStatus::Online),
            "offline" => Ok(UserStatus::Offline),
            "away" => Ok(UserStatus::Away),
            _ => Err(SharedError::unknown_variant("user status", s)),
        }
    }
}

/// User record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,

    /// Display name
    pub name: String,

    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    pub status: UserStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        status: UserStatus,
        created_at: impl Into<Timestamp>,
        updated_at: impl Into<Timestamp>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: None,
            email: None,
            phone: None,
            status,
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn is_online(&self) -> bool {
        self.status.is_online()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_status_from_str() {
        assert_eq!("online".parse::<UserStatus>().unwrap(), UserStatus::Online);
        assert_eq!("away".parse::<UserStatus>().unwrap(), UserStatus::Away);
        assert!("Online".parse::<UserStatus>().is_err());
        assert!("busy".parse::<UserStatus>().is_err());
    }

    #[test]
    fn test_user_status_display() {
        assert_eq!(UserStatus::Offline.to_string(), "offline");
        assert!(UserStatus::Online.is_online());
        assert!(!UserStatus::Away.is_online());
    }

    #[test]
    fn test_new_user_serialization() {
        let user = User::new(
            "u-1",
            "Li Lei",
            UserStatus::Away,
            "2024-01-01T00:00:00Z",
            "2024-01-02T00:00:00Z",
        )
        .with_email("lilei@example.com");

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "u-1",
                "name": "Li Lei",
                "email": "lilei@example.com",
                "status": "away",
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-02T00:00:00Z"
            })
        );
    }

    #[test]
    fn test_user_builders() {
        let user = User::new("u-2", "Han Meimei", UserStatus::Online, "t0", "t1")
            .with_avatar("https://cdn.example.com/a.png")
            .with_phone("13800138000");
        assert!(user.is_online());
        assert_eq!(user.avatar.as_deref(), Some("https://cdn.example.com/a.png"));
        assert_eq!(user.phone.as_deref(), Some("13800138000"));
        assert_eq!(user.email, None);
    }

    #[test]
    fn test_users_compare_structurally() {
        let a = User::new("u-3", "Same", UserStatus::Offline, "t", "t");
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, b.with_email("x@example.com"));
    }
}
