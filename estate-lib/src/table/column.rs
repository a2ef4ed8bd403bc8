//! Column configuration.

use serde::{Deserialize, Serialize};

/// A table column definition.
///
/// Rendering is left to the presentation layer; the controller only needs the
/// key to address sort and visibility state and whether the header toggles
/// sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Header text.
    pub label: String,
    /// Field of the row this column displays. Also the sort key.
    #[serde(rename = "accessorKey")]
    pub accessor_key: String,
    /// Whether clicking the header toggles sorting.
    #[serde(rename = "isSort", default)]
    pub is_sort: bool,
}

impl Column {
    /// Create a new, non-sortable column.
    pub fn new(accessor_key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            accessor_key: accessor_key.into(),
            is_sort: false,
        }
    }

    /// Mark this column as sortable.
    pub fn sortable(mut self) -> Self {
        self.is_sort = true;
        self
    }
}
