//! UI preference store.

use std::sync::{Arc, RwLock};

use log::debug;

use super::{Preferences, ThemeMode};
use crate::error::SessionError;
use crate::settings::SettingsProvider;

/// Settings key holding the persisted preferences.
pub const PREFERENCES_KEY: &str = "preferences";

/// Holds UI preferences; every mutation is persisted before it returns.
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    settings: SettingsProvider,
    current: Arc<RwLock<Preferences>>,
}

impl PreferencesStore {
    pub fn new(settings: SettingsProvider) -> Self {
        Self {
            settings,
            current: Arc::new(RwLock::new(Preferences::default())),
        }
    }

    /// Load persisted preferences, or defaults if none are stored.
    pub async fn hydrate(&self) -> Result<Preferences, SessionError> {
        let prefs = self
            .settings
            .get_or(PREFERENCES_KEY, Preferences::default())
            .await?;
        self.replace(prefs.clone());
        Ok(prefs)
    }

    pub fn current(&self) -> Preferences {
        self.current.read().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn theme(&self) -> ThemeMode {
        self.current().theme
    }

    pub async fn set_theme(&self, theme: ThemeMode) -> Result<Preferences, SessionError> {
        let mut prefs = self.current();
        prefs.theme = theme;
        self.persist(prefs).await
    }

    /// Flip the sidebar and return the new state.
    pub async fn toggle_sidebar(&self) -> Result<bool, SessionError> {
        let mut prefs = self.current();
        prefs.sidebar_open = !prefs.sidebar_open;
        Ok(self.persist(prefs).await?.sidebar_open)
    }

    /// Reset to defaults and remove the persisted value.
    pub async fn clear(&self) -> Result<(), SessionError> {
        self.replace(Preferences::default());
        self.settings.delete(PREFERENCES_KEY).await?;
        Ok(())
    }

    async fn persist(&self, prefs: Preferences) -> Result<Preferences, SessionError> {
        self.settings.set(PREFERENCES_KEY, &prefs).await?;
        debug!("preferences: saved {:?}", prefs);
        self.replace(prefs.clone());
        Ok(prefs)
    }

    fn replace(&self, prefs: Preferences) {
        if let Ok(mut guard) = self.current.write() {
            *guard = prefs;
        }
    }
}
