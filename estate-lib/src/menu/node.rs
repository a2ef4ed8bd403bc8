//! Menu data types and configuration loading.

use std::collections::HashSet;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::MenuError;

/// A navigable menu entry, possibly with sub-items.
///
/// A node with children is itself a page: its `url` is valid on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Create a leaf node.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            children: Vec::new(),
        }
    }

    /// Attach sub-items.
    pub fn with_children(mut self, children: Vec<MenuNode>) -> Self {
        self.children = children;
        self
    }

    /// Returns `true` if this node has sub-items.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// One resolved step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbEntry {
    pub title: String,
    pub url: String,
}

impl From<&MenuNode> for BreadcrumbEntry {
    fn from(node: &MenuNode) -> Self {
        Self {
            title: node.title.clone(),
            url: node.url.clone(),
        }
    }
}

/// A breadcrumb entry ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub entry: BreadcrumbEntry,
    /// `false` for the current page and for section headers.
    pub linked: bool,
}

/// A sidebar section: the sub-menu shown for every route under `/{type}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub section_type: String,
    #[serde(default)]
    pub children: Vec<MenuNode>,
}

impl Section {
    /// Create a section.
    pub fn new(section_type: impl Into<String>, children: Vec<MenuNode>) -> Self {
        Self {
            section_type: section_type.into(),
            children,
        }
    }
}

/// Check that every URL is absolute and unique across the whole tree.
pub fn validate_menu(menu: &[MenuNode]) -> Result<(), MenuError> {
    fn walk<'a>(nodes: &'a [MenuNode], seen: &mut HashSet<&'a str>) -> Result<(), MenuError> {
        for node in nodes {
            if !node.url.starts_with('/') {
                return Err(MenuError::invalid_url(&node.url));
            }
            if !seen.insert(node.url.as_str()) {
                return Err(MenuError::duplicate_url(&node.url));
            }
            walk(&node.children, seen)?;
        }
        Ok(())
    }

    walk(menu, &mut HashSet::new())
}

/// Parse a JSON menu (an array of nodes) and validate it.
pub fn load_menu_json(json: &str) -> Result<Vec<MenuNode>, MenuError> {
    let menu: Vec<MenuNode> = serde_json::from_str(json)?;
    if let Err(e) = validate_menu(&menu) {
        warn!("menu: rejected configuration: {}", e);
        return Err(e);
    }
    Ok(menu)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_menu_json() {
        let menu = load_menu_json(
            r#"[
                {"title": "Finance", "url": "/finance", "children": [
                    {"title": "Invoices", "url": "/finance/invoices"}
                ]},
                {"title": "Feedback", "url": "/feedback"}
            ]"#,
        )
        .unwrap();
        assert_eq!(menu.len(), 2);
        assert!(menu[0].has_children());
        assert!(!menu[1].has_children());
    }

    #[test]
    fn test_duplicate_url_rejected() {
        let menu = vec![
            MenuNode::new("Finance", "/finance")
                .with_children(vec![MenuNode::new("Again", "/finance")]),
        ];
        assert!(matches!(
            validate_menu(&menu),
            Err(MenuError::DuplicateUrl { url }) if url == "/finance"
        ));
    }

    #[test]
    fn test_relative_url_rejected() {
        let err = load_menu_json(r#"[{"title": "Rooms", "url": "rooms"}]"#).unwrap_err();
        assert!(matches!(err, MenuError::InvalidUrl { .. }));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(load_menu_json("{"), Err(MenuError::Parse(_))));
    }

    #[test]
    fn test_section_type_field_name() {
        let section: Section = serde_json::from_str(r#"{"type": "finance"}"#).unwrap();
        assert_eq!(section.section_type, "finance");
        assert!(section.children.is_empty());
    }
}
