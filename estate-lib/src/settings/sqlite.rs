//! Settings persisted to a SQLite file.

use std::path::Path;

use async_sqlite::rusqlite::{self, OptionalExtension};
use async_sqlite::{Client, ClientBuilder};
use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;

use super::SettingsBackend;
use crate::error::SettingsError;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS estate_settings (
    key TEXT PRIMARY KEY,
    value BLOB NOT NULL,
    updated_at INTEGER NOT NULL
)";

/// SQLite-backed settings with a read-through cache.
///
/// Lookups are cached both ways: a key found absent stays absent until it is
/// written, so hydrating an empty store only queries once per key.
pub struct SqliteBackend {
    client: Client,
    cache: DashMap<String, Option<Vec<u8>>>,
}

impl SqliteBackend {
    /// Open (or create) the settings database at `path`.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let client = ClientBuilder::new().path(path).open().await?;
        client.conn(|conn| conn.execute(CREATE_TABLE, [])).await?;
        debug!("settings: opened {}", path.display());

        Ok(Self {
            client,
            cache: DashMap::new(),
        })
    }
}

/// Escape `%`, `_` and `\` so `prefix` matches literally in a LIKE pattern.
fn like_prefix(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl SettingsBackend for SqliteBackend {
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, SettingsError> {
        if let Some(cached) = self.cache.get(key) {
            return Ok(cached.value().clone());
        }

        let owned = key.to_string();
        let value = self
            .client
            .conn(move |conn| {
                conn.query_row(
                    "SELECT value FROM estate_settings WHERE key = ?1",
                    [&owned],
                    |row| row.get::<_, Vec<u8>>(0),
                )
                .optional()
            })
            .await?;

        self.cache.insert(key.to_string(), value.clone());
        Ok(value)
    }

    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), SettingsError> {
        let owned = key.to_string();
        let stored = value.clone();
        let now = chrono::Utc::now().timestamp();

        self.client
            .conn(move |conn| {
                conn.execute(
                    "INSERT INTO estate_settings (key, value, updated_at) VALUES (?1, ?2, ?3)
                     ON CONFLICT(key) DO UPDATE
                     SET value = excluded.value, updated_at = excluded.updated_at",
                    rusqlite::params![owned, stored, now],
                )
            })
            .await?;

        self.cache.insert(key.to_string(), Some(value));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), SettingsError> {
        let owned = key.to_string();
        self.client
            .conn(move |conn| conn.execute("DELETE FROM estate_settings WHERE key = ?1", [&owned]))
            .await?;

        self.cache.insert(key.to_string(), None);
        Ok(())
    }

    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, SettingsError> {
        let pattern = like_prefix(prefix);
        let keys = self
            .client
            .conn(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT key FROM estate_settings WHERE key LIKE ?1 ESCAPE '\\' ORDER BY key",
                )?;
                let keys = stmt
                    .query_map([&pattern], |row| row.get::<_, String>(0))?
                    .collect::<Result<Vec<_>, _>>();
                keys
            })
            .await?;
        Ok(keys)
    }
}
