//! Storage seam for settings.

use async_trait::async_trait;

use crate::error::SettingsError;

/// Byte-level key-value storage behind a [`SettingsProvider`].
///
/// Keys are dotted names such as `session.current`. Encoding is the
/// provider's job; a backend stores whatever bytes it is given.
///
/// [`SettingsProvider`]: super::SettingsProvider
#[async_trait]
pub trait SettingsBackend: Send + Sync {
    /// Stored bytes for `key`, or `None` if it was never set or was deleted.
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, SettingsError>;

    /// Insert or overwrite `key`.
    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), SettingsError>;

    /// Remove `key`. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), SettingsError>;

    /// Every stored key starting with `prefix`, sorted.
    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, SettingsError>;
}
