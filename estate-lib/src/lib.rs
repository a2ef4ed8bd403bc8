//! Navigation and data-table state for the estate management console.
//!
//! Resolves breadcrumb trails and sidebar sections from role-scoped menu
//! trees, and drives paginated, sortable, selectable tables whose page and
//! page size live in the URL.

pub mod error;
pub mod filter;
pub mod menu;
pub mod navigation;
pub mod resource;
pub mod session;
pub mod settings;
pub mod table;
