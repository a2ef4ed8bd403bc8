//! Row selection keyed by row id.
//!
//! Ids are used instead of positions so a selection survives re-sorting.
//! Only ids on the current page are ever toggled; ids left over from a page
//! that is no longer shown stay in the set but are never read.

use std::collections::HashSet;

/// Selection mode for a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// No selection allowed
    #[default]
    None,
    /// Single row selection
    Single,
    /// Checkbox selection with a select-all header
    Multiple,
}

/// Selected row ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelection {
    selected: HashSet<String>,
}

impl RowSelection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected IDs (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Check if an ID is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Get the number of selected ids, stale ones included.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clear all selection.
    /// Returns the IDs that were deselected.
    pub fn clear(&mut self) -> Vec<String> {
        self.selected.drain().collect()
    }

    /// Select a single ID (clears others).
    /// Returns `true` if the selection changed.
    pub fn select_only(&mut self, id: &str) -> bool {
        if self.selected.len() == 1 && self.selected.contains(id) {
            return false;
        }
        self.selected.clear();
        self.selected.insert(id.to_string());
        true
    }

    /// Set the selected flag of an ID.
    pub fn set(&mut self, id: &str, selected: bool) {
        if selected {
            self.selected.insert(id.to_string());
        } else {
            self.selected.remove(id);
        }
    }

    /// Toggle selection of an ID.
    /// Returns `true` if the ID is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    /// Check whether every visible ID is selected. `false` for an empty page.
    pub fn is_all_selected(&self, visible_ids: &[String]) -> bool {
        !visible_ids.is_empty() && visible_ids.iter().all(|id| self.selected.contains(id))
    }

    /// Check whether at least one visible ID is selected.
    pub fn is_some_selected(&self, visible_ids: &[String]) -> bool {
        visible_ids.iter().any(|id| self.selected.contains(id))
    }

    /// Some, but not all, visible IDs are selected.
    pub fn is_indeterminate(&self, visible_ids: &[String]) -> bool {
        self.is_some_selected(visible_ids) && !self.is_all_selected(visible_ids)
    }

    /// Select every visible ID, or deselect them all if they already are.
    ///
    /// IDs outside `visible_ids` are left untouched.
    /// Returns `true` if the visible IDs are now selected.
    pub fn toggle_all(&mut self, visible_ids: &[String]) -> bool {
        if self.is_all_selected(visible_ids) {
            for id in visible_ids {
                self.selected.remove(id);
            }
            false
        } else {
            self.selected.extend(visible_ids.iter().cloned());
            !visible_ids.is_empty()
        }
    }

    /// Selected IDs among `visible_ids`, in the order given.
    pub fn selected_among(&self, visible_ids: &[String]) -> Vec<String> {
        visible_ids
            .iter()
            .filter(|id| self.selected.contains(*id))
            .cloned()
            .collect()
    }
}
