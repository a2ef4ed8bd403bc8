//! Navigation context: current pathname, query string and change notification.
//!
//! The table controller and filter drafts read and write the URL exclusively
//! through the [`Navigation`] trait. [`MemoryNavigation`] is a history-backed
//! implementation usable outside a browser.

mod location;
mod memory;

pub use location::{Location, QueryUpdate};
pub use memory::MemoryNavigation;

use std::sync::Arc;

use crate::error::NavigationError;

/// Callback invoked with the new location after every change.
pub type Listener = Arc<dyn Fn(&Location) + Send + Sync>;

/// Handle returned by [`Navigation::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) usize);

/// Read/write access to the current URL.
pub trait Navigation: Send + Sync {
    /// Snapshot of the current location.
    fn location(&self) -> Location;

    /// Current pathname, e.g. `/data-categories/buildings`.
    ///
    /// Percent-encoded: `/phòng` reads back as `/ph%C3%B2ng`. Use
    /// [`Navigation::decoded_pathname`] to match menu URLs.
    fn pathname(&self) -> String {
        self.location().pathname().to_string()
    }

    /// Current pathname with percent-escapes decoded.
    fn decoded_pathname(&self) -> String {
        self.location().decoded_pathname()
    }

    /// First value of a query parameter.
    fn query(&self, key: &str) -> Option<String> {
        self.location().query(key).map(str::to_string)
    }

    /// Applies query updates as one navigation step.
    ///
    /// Keys not named in `updates` are left untouched.
    fn set_query(&self, updates: &[QueryUpdate]);

    /// Navigates to an absolute path, optionally with a query string.
    fn push(&self, path_and_query: &str) -> Result<(), NavigationError>;

    /// Registers a listener called after each location change.
    fn subscribe(&self, listener: Listener) -> ListenerId;

    /// Removes a listener. Returns `false` if it was not registered.
    fn unsubscribe(&self, id: ListenerId) -> bool;
}
