//! Error types

mod menu;
mod navigation;
mod session;
mod settings;

pub use menu::*;
pub use navigation::*;
pub use session::*;
pub use settings::*;
