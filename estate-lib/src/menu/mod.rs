//! Menu tree, breadcrumb resolution and sidebar sections.
//!
//! The resolver functions are pure: they take the menu they should search and
//! never fail. An unmatched path produces an empty result, not an error.
//! Which menu a user sees is decided by [`menu_for_role`], outside the resolver.

mod node;
mod resolve;
mod role;

pub use node::*;
pub use resolve::*;
pub use role::*;
