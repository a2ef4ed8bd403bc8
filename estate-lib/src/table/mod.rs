//! Data table state.
//!
//! A [`TableController`] binds one page of externally fetched rows and a
//! column configuration to interactive state:
//!
//! - sorting (single column on header click, multi-column structurally supported)
//! - column visibility
//! - row selection keyed by row id
//! - pagination read from the navigation context's `page` / `size` query parameters
//!
//! Pagination is never stored locally. Every read derives it from the URL, so
//! browser-style back/forward and manual URL edits are picked up without any
//! synchronisation step.

mod column;
mod controller;
mod page;
mod pagination;
mod selection;
mod sort;
mod visibility;
mod window;

pub use column::Column;
pub use controller::{TableController, TableState};
pub use page::{PageData, TableRow};
pub use pagination::*;
pub use selection::{RowSelection, SelectionMode};
pub use sort::{Direction, SortEntry, Sorting};
pub use visibility::ColumnVisibility;
pub use window::{PageItem, compute_page_window};
