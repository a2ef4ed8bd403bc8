//! In-memory navigation context with back/forward history.

use std::sync::{Arc, RwLock};

use log::debug;

use super::{Listener, ListenerId, Location, Navigation, QueryUpdate};
use crate::error::NavigationError;

#[derive(Default)]
struct NavigationInner {
    /// Visited locations; `cursor` points at the current one.
    history: Vec<Location>,
    cursor: usize,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: usize,
}

impl NavigationInner {
    fn current(&self) -> Location {
        self.history.get(self.cursor).cloned().unwrap_or_default()
    }

    fn listeners(&self) -> Vec<Listener> {
        self.listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }
}

/// History-backed [`Navigation`] implementation.
///
/// Clones share the same history and listeners, so a clone can be handed to
/// each component that needs the navigation context.
///
/// # Example
///
/// ```
/// use estate_lib::navigation::{MemoryNavigation, Navigation, QueryUpdate};
///
/// let nav = MemoryNavigation::at("/finance/invoices?page=2").unwrap();
/// nav.set_query(&[QueryUpdate::set("page", 3)]);
/// assert_eq!(nav.query("page").as_deref(), Some("3"));
///
/// nav.back();
/// assert_eq!(nav.query("page").as_deref(), Some("2"));
/// ```
#[derive(Clone)]
pub struct MemoryNavigation {
    inner: Arc<RwLock<NavigationInner>>,
}

impl Default for MemoryNavigation {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryNavigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryNavigation")
            .field("location", &self.location().to_string())
            .finish()
    }
}

impl MemoryNavigation {
    /// Create a navigation context at `/`.
    pub fn new() -> Self {
        Self::with_location(Location::root())
    }

    /// Create a navigation context at the given path and query.
    pub fn at(path_and_query: &str) -> Result<Self, NavigationError> {
        Ok(Self::with_location(Location::parse(path_and_query)?))
    }

    fn with_location(location: Location) -> Self {
        Self {
            inner: Arc::new(RwLock::new(NavigationInner {
                history: vec![location],
                ..Default::default()
            })),
        }
    }

    /// Move one entry back in history. Returns `false` at the oldest entry.
    pub fn back(&self) -> bool {
        self.go(-1)
    }

    /// Move one entry forward in history. Returns `false` at the newest entry.
    pub fn forward(&self) -> bool {
        self.go(1)
    }

    /// Check if there is an entry before the current one.
    pub fn can_go_back(&self) -> bool {
        self.inner.read().map(|g| g.cursor > 0).unwrap_or(false)
    }

    /// Check if there is an entry after the current one.
    pub fn can_go_forward(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.cursor + 1 < g.history.len())
            .unwrap_or(false)
    }

    /// Number of history entries.
    pub fn history_len(&self) -> usize {
        self.inner.read().map(|g| g.history.len()).unwrap_or(0)
    }

    fn go(&self, delta: isize) -> bool {
        let notify = if let Ok(mut guard) = self.inner.write()
            && let Some(target) = guard.cursor.checked_add_signed(delta)
            && target < guard.history.len()
        {
            guard.cursor = target;
            Some((guard.current(), guard.listeners()))
        } else {
            None
        };

        match notify {
            Some((location, listeners)) => {
                debug!("navigation: history move to {}", location);
                Self::notify(&listeners, &location);
                true
            }
            None => false,
        }
    }

    /// Make `location` the current entry, dropping forward history.
    fn commit(&self, location: Location) {
        let listeners = if let Ok(mut guard) = self.inner.write()
            && guard.current() != location
        {
            let keep = guard.cursor + 1;
            guard.history.truncate(keep);
            guard.history.push(location.clone());
            guard.cursor = keep;
            Some(guard.listeners())
        } else {
            None
        };

        // Listeners run without the lock held so they can read the location.
        if let Some(listeners) = listeners {
            debug!("navigation: {}", location);
            Self::notify(&listeners, &location);
        }
    }

    fn notify(listeners: &[Listener], location: &Location) {
        for listener in listeners {
            listener(location);
        }
    }
}

impl Navigation for MemoryNavigation {
    fn location(&self) -> Location {
        self.inner
            .read()
            .map(|g| g.current())
            .unwrap_or_default()
    }

    fn set_query(&self, updates: &[QueryUpdate]) {
        let next = self.location().with_updates(updates);
        self.commit(next);
    }

    fn push(&self, path_and_query: &str) -> Result<(), NavigationError> {
        let location = Location::parse(path_and_query)?;
        self.commit(location);
        Ok(())
    }

    fn subscribe(&self, listener: Listener) -> ListenerId {
        if let Ok(mut guard) = self.inner.write() {
            let id = ListenerId(guard.next_listener);
            guard.next_listener += 1;
            guard.listeners.push((id, listener));
            return id;
        }
        ListenerId(usize::MAX)
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            let before = guard.listeners.len();
            guard.listeners.retain(|(listener_id, _)| *listener_id != id);
            return guard.listeners.len() != before;
        }
        false
    }
}
