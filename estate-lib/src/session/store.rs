//! Auth session store.

use std::sync::{Arc, RwLock};

use log::{debug, warn};

use super::{AuthSession, Role};
use crate::error::SessionError;
use crate::settings::SettingsProvider;

/// Settings key holding the persisted session.
pub const SESSION_KEY: &str = "session.current";

/// Holds the current auth session and mirrors it to settings.
///
/// Nothing is loaded on construction; call [`SessionStore::hydrate`] once the
/// settings backend is ready. Clones share state.
#[derive(Debug, Clone)]
pub struct SessionStore {
    settings: SettingsProvider,
    current: Arc<RwLock<Option<AuthSession>>>,
}

impl SessionStore {
    /// Create an empty store over `settings`.
    pub fn new(settings: SettingsProvider) -> Self {
        Self {
            settings,
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Load the persisted session.
    ///
    /// An expired session is removed from settings and not loaded.
    pub async fn hydrate(&self) -> Result<Option<AuthSession>, SessionError> {
        let mut session: Option<AuthSession> = self.settings.get(SESSION_KEY).await?;
        if let Some(expired) = session.take_if(|s| s.is_expired()) {
            warn!("session: dropping expired session for {}", expired.username);
            self.settings.delete(SESSION_KEY).await?;
        }
        self.replace(session.clone());
        debug!("session: hydrated (authenticated: {})", session.is_some());
        Ok(session)
    }

    /// Store and persist a new session.
    pub async fn login(&self, session: AuthSession) -> Result<(), SessionError> {
        self.settings.set(SESSION_KEY, &session).await?;
        debug!("session: login {} as {}", session.username, session.role);
        self.replace(Some(session));
        Ok(())
    }

    /// Clear the session in memory and in settings.
    pub async fn logout(&self) -> Result<(), SessionError> {
        self.replace(None);
        self.settings.delete(SESSION_KEY).await?;
        debug!("session: logout");
        Ok(())
    }

    /// The current session, if any.
    pub fn current(&self) -> Option<AuthSession> {
        self.current.read().map(|s| s.clone()).unwrap_or_default()
    }

    /// Role of the current session.
    pub fn role(&self) -> Option<Role> {
        self.current
            .read()
            .map(|s| s.as_ref().map(|session| session.role))
            .unwrap_or_default()
    }

    /// Check for a session that has not expired.
    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .map(|s| s.as_ref().is_some_and(|session| !session.is_expired()))
            .unwrap_or(false)
    }

    fn replace(&self, session: Option<AuthSession>) {
        if let Ok(mut guard) = self.current.write() {
            *guard = session;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn test_login_persists() {
        let settings = SettingsProvider::in_memory();
        let store = SessionStore::new(settings.clone());
        store
            .login(AuthSession::new("bob", Role::Manager, "t0k3n"))
            .await
            .unwrap();

        assert_eq!(store.role(), Some(Role::Manager));
        assert!(store.is_authenticated());

        let reloaded = SessionStore::new(settings);
        assert_eq!(reloaded.current(), None);
        let session = reloaded.hydrate().await.unwrap().unwrap();
        assert_eq!(session.username, "bob");
        assert_eq!(reloaded.role(), Some(Role::Manager));
    }

    #[tokio::test]
    async fn test_expired_session_is_dropped() {
        let settings = SettingsProvider::in_memory();
        let expired = AuthSession::new("carol", Role::Staff, "old")
            .with_expiry(Utc::now() - Duration::minutes(5));
        settings.set(SESSION_KEY, &expired).await.unwrap();

        let store = SessionStore::new(settings.clone());
        assert_eq!(store.hydrate().await.unwrap(), None);
        assert!(!store.is_authenticated());
        assert_eq!(
            settings.get::<AuthSession>(SESSION_KEY).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let settings = SettingsProvider::in_memory();
        let store = SessionStore::new(settings.clone());
        store
            .login(AuthSession::new("dave", Role::Admin, "abc"))
            .await
            .unwrap();
        store.logout().await.unwrap();

        assert_eq!(store.current(), None);
        assert_eq!(store.role(), None);
        assert_eq!(
            settings.get::<AuthSession>(SESSION_KEY).await.unwrap(),
            None
        );
    }
}
