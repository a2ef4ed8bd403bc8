//! Data models for the session and preference stores.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Role of the signed-in account. Selects the menu tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Tenant account; sees only its own records.
    #[default]
    User,
    Manager,
    Admin,
    Staff,
}

impl Role {
    /// Every role.
    pub const ALL: [Role; 4] = [Role::User, Role::Manager, Role::Admin, Role::Staff];

    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Manager => "MANAGER",
            Role::Admin => "ADMIN",
            Role::Staff => "STAFF",
        }
    }
}

impl FromStr for Role {
    type Err = SessionError;

    /// Parses a role name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SessionError::InvalidRole(s.to_string()))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub username: String,
    pub role: Role,
    pub access_token: String,
    /// `None` means the session does not expire.
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthSession {
    /// Create a session without expiry.
    pub fn new(username: impl Into<String>, role: Role, access_token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role,
            access_token: access_token.into(),
            expires_at: None,
        }
    }

    /// Set the expiry time.
    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Check if the session is expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now >= expires_at,
            None => false,
        }
    }

    /// Check if the session is expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the operating system.
    #[default]
    System,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            _ => Err(SessionError::InvalidTheme(s.to_string())),
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI preferences that survive restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: ThemeMode,
    pub sidebar_open: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            sidebar_open: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(" Staff ".parse::<Role>().unwrap(), Role::Staff);
        assert_eq!("MANAGER".parse::<Role>().unwrap(), Role::Manager);
        assert!(matches!(
            "owner".parse::<Role>(),
            Err(SessionError::InvalidRole(name)) if name == "owner"
        ));
    }

    #[test]
    fn test_role_serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Staff).unwrap(), "\"STAFF\"");
        let role: Role = serde_json::from_str("\"MANAGER\"").unwrap();
        assert_eq!(role, Role::Manager);
    }

    #[test]
    fn test_session_expiry() {
        let now = Utc::now();
        let session = AuthSession::new("alice", Role::User, "token");
        assert!(!session.is_expired_at(now));

        let session = session.with_expiry(now + Duration::hours(1));
        assert!(!session.is_expired_at(now));
        assert!(session.is_expired_at(now + Duration::hours(1)));
        assert!(session.is_expired_at(now + Duration::hours(2)));
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme, ThemeMode::System);
        assert!(prefs.sidebar_open);
    }
}
