//! Session store error types

use super::SettingsError;

/// Errors from the session and preference stores.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Persisting or loading state failed.
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// A role name that is not one of USER, MANAGER, ADMIN or STAFF.
    #[error("invalid role: {0}")]
    InvalidRole(String),

    /// An unknown theme name.
    #[error("invalid theme: {0}")]
    InvalidTheme(String),
}
