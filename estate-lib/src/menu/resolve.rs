//! Path resolution against a menu tree.

use super::{BreadcrumbEntry, Crumb, MenuNode, Section};

/// Resolve `pathname` into the trail of menu nodes it passes through.
///
/// Segments are accumulated into a growing prefix (`/a`, `/a/b`, ...). Each
/// prefix is looked up in the current search scope, first match wins. A
/// match is emitted and, if it has children, narrows the scope to them.
/// A segment without a match (typically a record id) emits nothing and
/// leaves the scope as it was.
///
/// `/` and paths that match nothing resolve to an empty trail.
///
/// # Example
///
/// ```
/// use estate_lib::menu::{MenuNode, resolve_breadcrumbs};
///
/// let menu = vec![MenuNode::new("Buildings", "/data-categories/buildings")];
/// let trail = resolve_breadcrumbs(&menu, "/data-categories/buildings/xyz123");
///
/// assert_eq!(trail.len(), 1);
/// assert_eq!(trail[0].title, "Buildings");
/// ```
pub fn resolve_breadcrumbs(menu: &[MenuNode], pathname: &str) -> Vec<BreadcrumbEntry> {
    let mut trail = Vec::new();
    let mut prefix = String::new();
    let mut scope = menu;

    for segment in pathname.split('/').filter(|s| !s.is_empty()) {
        prefix.push('/');
        prefix.push_str(segment);

        if let Some(node) = scope.iter().find(|node| node.url == prefix) {
            trail.push(BreadcrumbEntry::from(node));
            if node.has_children() {
                scope = &node.children;
            }
        }
    }

    trail
}

/// Find a node by URL anywhere in the tree, depth first.
pub fn find_node<'a>(menu: &'a [MenuNode], url: &str) -> Option<&'a MenuNode> {
    for node in menu {
        if node.url == url {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, url) {
            return Some(found);
        }
    }
    None
}

/// Check whether `url` belongs to a node with sub-items.
///
/// Such nodes are shown as section headers in the breadcrumb, not as links.
pub fn is_parent_section(menu: &[MenuNode], url: &str) -> bool {
    find_node(menu, url).is_some_and(MenuNode::has_children)
}

/// Decide which breadcrumb entries are links.
///
/// The last entry is the current page and parent sections are headers;
/// neither is linked.
pub fn annotate_breadcrumbs(menu: &[MenuNode], entries: Vec<BreadcrumbEntry>) -> Vec<Crumb> {
    let last = entries.len().saturating_sub(1);
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let linked = index != last && !is_parent_section(menu, &entry.url);
            Crumb { entry, linked }
        })
        .collect()
}

/// Children of the first section whose route prefixes `pathname`.
///
/// A section matches when `pathname` starts with `/` followed by its type.
/// Returns an empty slice when none matches.
pub fn resolve_active_section<'a>(sections: &'a [Section], pathname: &str) -> &'a [MenuNode] {
    sections
        .iter()
        .find(|section| {
            pathname
                .strip_prefix('/')
                .is_some_and(|rest| rest.starts_with(&section.section_type))
        })
        .map(|section| section.children.as_slice())
        .unwrap_or(&[])
}
