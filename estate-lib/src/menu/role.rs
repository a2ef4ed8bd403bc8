//! Role-scoped menus.
//!
//! Each role maps to a fixed tree; the mapping is a plain lookup so menus can
//! be compared and tested without a session. Sidebar sections are derived from
//! the same tree, one per top-level node with sub-items.

use crate::resource::Resource;
use crate::session::Role;

use super::{MenuNode, Section};

fn leaf(resource: Resource) -> MenuNode {
    MenuNode::new(resource.title(), resource.path())
}

fn group(title: &str, url: &str, resources: &[Resource]) -> MenuNode {
    MenuNode::new(title, url).with_children(resources.iter().copied().map(leaf).collect())
}

/// The full menu tree visible to `role`.
pub fn menu_for_role(role: Role) -> Vec<MenuNode> {
    use Resource::*;

    let dashboard = MenuNode::new("Dashboard", "/dashboard");
    match role {
        Role::Admin => vec![
            dashboard,
            group("Data categories", "/data-categories", &[Buildings, Floors, Rooms]),
            group("People", "/people", &[Tenants, Accounts]),
            group(
                "Finance",
                "/finance",
                &[Contracts, MeterReadings, Invoices, Payments],
            ),
            leaf(Feedback),
        ],
        Role::Manager => vec![
            dashboard,
            group("Data categories", "/data-categories", &[Buildings, Floors, Rooms]),
            group("People", "/people", &[Tenants]),
            group(
                "Finance",
                "/finance",
                &[Contracts, MeterReadings, Invoices, Payments],
            ),
            leaf(Feedback),
        ],
        Role::Staff => vec![
            dashboard,
            group("Data categories", "/data-categories", &[Rooms]),
            group("Finance", "/finance", &[MeterReadings]),
            leaf(Feedback),
        ],
        Role::User => vec![
            group("My home", "/my", &[MyContracts, MyInvoices, MyPayments]),
            leaf(Feedback),
        ],
    }
}

/// Sidebar sections for `role`, in menu order.
pub fn sections_for_role(role: Role) -> Vec<Section> {
    menu_for_role(role)
        .into_iter()
        .filter(MenuNode::has_children)
        .map(|node| Section::new(node.url.trim_start_matches('/'), node.children))
        .collect()
}
