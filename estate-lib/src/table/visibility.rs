//! Per-column visibility.

use std::collections::HashMap;

use super::Column;

/// Visibility flags keyed by column key.
///
/// Columns without an entry are visible. Nothing is persisted: a new table
/// starts with every column shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnVisibility {
    flags: HashMap<String, bool>,
}

impl ColumnVisibility {
    /// Create visibility state with every column visible.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a column is visible.
    pub fn is_visible(&self, column_key: &str) -> bool {
        self.flags.get(column_key).copied().unwrap_or(true)
    }

    /// Show or hide a column.
    pub fn set(&mut self, column_key: impl Into<String>, visible: bool) {
        self.flags.insert(column_key.into(), visible);
    }

    /// Flip a column's visibility. Returns the new value.
    pub fn toggle(&mut self, column_key: &str) -> bool {
        let visible = !self.is_visible(column_key);
        self.flags.insert(column_key.to_string(), visible);
        visible
    }

    /// Show every column again.
    pub fn reset(&mut self) {
        self.flags.clear();
    }

    /// The raw flag map.
    pub fn flags(&self) -> &HashMap<String, bool> {
        &self.flags
    }

    /// Filter `columns` down to the visible ones, keeping their order.
    pub fn visible_columns<'a>(&self, columns: &'a [Column]) -> Vec<&'a Column> {
        columns
            .iter()
            .filter(|column| self.is_visible(&column.accessor_key))
            .collect()
    }
}
