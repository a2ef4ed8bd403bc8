//! Client state: the auth session and UI preferences.
//!
//! Both stores are plain values constructed over a [`SettingsProvider`]
//! and passed to whatever needs them. They start empty and load persisted
//! state only when `hydrate` is called.
//!
//! [`SettingsProvider`]: crate::settings::SettingsProvider

mod models;
mod preferences;
mod store;

pub use models::*;
pub use preferences::*;
pub use store::*;
