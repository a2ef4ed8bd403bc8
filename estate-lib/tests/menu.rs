//! Breadcrumb and sidebar resolution against role menus.

use estate_lib::menu::{
    MenuNode, Section, annotate_breadcrumbs, is_parent_section, load_menu_json, menu_for_role,
    resolve_active_section, resolve_breadcrumbs, sections_for_role,
};
use estate_lib::resource::Resource;
use estate_lib::session::Role;

fn deep_menu() -> Vec<MenuNode> {
    vec![MenuNode::new("Finance", "/finance").with_children(vec![
        MenuNode::new("Invoices", "/finance/invoices").with_children(vec![
            MenuNode::new("Drafts", "/finance/invoices/drafts").with_children(vec![
                MenuNode::new("Archived", "/finance/invoices/drafts/archived"),
            ]),
        ]),
    ])]
}

#[test]
fn test_resolution_is_idempotent() {
    for role in Role::ALL {
        let menu = menu_for_role(role);
        for resource in Resource::ALL {
            let path = format!("{}/42", resource.path());
            assert_eq!(
                resolve_breadcrumbs(&menu, &path),
                resolve_breadcrumbs(&menu, &path)
            );
        }
    }
}

#[test]
fn test_every_entry_prefixes_the_path() {
    let menu = menu_for_role(Role::Admin);
    for resource in Resource::ALL {
        let path = format!("{}/abc/def", resource.path());
        let trail = resolve_breadcrumbs(&menu, &path);
        for window in trail.windows(2) {
            let parent = format!("{}/", window[0].url);
            assert!(window[1].url.starts_with(&parent), "{} / {}", window[1].url, parent);
        }
        for entry in &trail {
            assert!(
                path.starts_with(&format!("{}/", entry.url)),
                "{} / {}",
                entry.url,
                path
            );
        }
    }
}

#[test]
fn test_partial_segment_does_not_match() {
    let menu = vec![MenuNode::new("Finance", "/fin").with_children(vec![])];
    assert!(resolve_breadcrumbs(&menu, "/finance/invoices").is_empty());
}

#[test]
fn test_unknown_segment_is_skipped() {
    let menu = vec![MenuNode::new("Buildings", "/data-categories/buildings")];
    let trail = resolve_breadcrumbs(&menu, "/data-categories/buildings/xyz123");
    assert_eq!(trail.len(), 1);
    assert_eq!(trail[0].url, "/data-categories/buildings");
}

#[test]
fn test_root_and_unmatched_paths_resolve_to_nothing() {
    let menu = menu_for_role(Role::Admin);
    assert!(resolve_breadcrumbs(&menu, "/").is_empty());
    assert!(resolve_breadcrumbs(&menu, "").is_empty());
    assert!(resolve_breadcrumbs(&menu, "/nowhere/at/all").is_empty());
}

#[test]
fn test_deep_trail_and_parent_check() {
    let menu = deep_menu();
    let trail = resolve_breadcrumbs(&menu, "/finance/invoices/drafts/archived");
    assert_eq!(trail.len(), 4);

    assert!(is_parent_section(&menu, "/finance/invoices/drafts"));
    assert!(!is_parent_section(&menu, "/finance/invoices/drafts/archived"));
    assert!(!is_parent_section(&menu, "/missing"));

    let crumbs = annotate_breadcrumbs(&menu, trail);
    let linked: Vec<bool> = crumbs.iter().map(|c| c.linked).collect();
    assert_eq!(linked, vec![false, false, false, false]);
}

#[test]
fn test_leaf_before_current_page_is_linked() {
    let menu = vec![
        MenuNode::new("Rooms", "/rooms").with_children(vec![]),
        MenuNode::new("Room", "/rooms/detail"),
    ];
    let trail = resolve_breadcrumbs(&menu, "/rooms/detail");
    // "/rooms/detail" is not a child of the leaf "/rooms", and the scope
    // stays at the top level.
    assert_eq!(trail.len(), 2);
    let crumbs = annotate_breadcrumbs(&menu, trail);
    assert!(crumbs[0].linked);
    assert!(!crumbs[1].linked);
}

#[test]
fn test_active_section() {
    let finance = Section::new(
        "finance",
        vec![MenuNode::new("Invoices", "/finance/invoices")],
    );
    let sections = vec![finance];
    assert!(resolve_active_section(&sections, "/unknown/path").is_empty());
    assert_eq!(resolve_active_section(&sections, "/finance/invoices/7").len(), 1);
}

#[test]
fn test_admin_sidebar_sections() {
    let sections = sections_for_role(Role::Admin);
    let children = resolve_active_section(&sections, "/people/tenants");
    let urls: Vec<_> = children.iter().map(|n| n.url.as_str()).collect();
    assert_eq!(urls, vec!["/people/tenants", "/people/accounts"]);
}

#[test]
fn test_menu_from_json() {
    let json = r#"[
        {"title": "Dashboard", "url": "/dashboard"},
        {"title": "Finance", "url": "/finance", "children": [
            {"title": "Invoices", "url": "/finance/invoices"}
        ]}
    ]"#;
    let menu = load_menu_json(json).unwrap();
    let trail = resolve_breadcrumbs(&menu, "/finance/invoices");
    let titles: Vec<_> = trail.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Finance", "Invoices"]);
}
