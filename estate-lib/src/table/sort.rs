//! Sort state for table columns.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Lowercase name used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// A sorted column and its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortEntry {
    pub column_key: String,
    pub direction: Direction,
}

/// Ordered sort state. The first entry has the highest priority.
///
/// Tables toggle a single column at a time with [`Sorting::toggle`].
/// [`Sorting::toggle_multi`] keeps the other entries and is available for
/// multi-column sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sorting {
    entries: Vec<SortEntry>,
}

/// unset -> asc -> desc -> unset
fn next_direction(current: Option<Direction>) -> Option<Direction> {
    match current {
        None => Some(Direction::Asc),
        Some(Direction::Asc) => Some(Direction::Desc),
        Some(Direction::Desc) => None,
    }
}

impl Sorting {
    /// Creates an empty sort state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sorted columns in priority order.
    pub fn entries(&self) -> &[SortEntry] {
        &self.entries
    }

    /// Returns `true` if no column is sorted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Direction of a column, if it is sorted.
    pub fn direction_of(&self, column_key: &str) -> Option<Direction> {
        self.entries
            .iter()
            .find(|entry| entry.column_key == column_key)
            .map(|entry| entry.direction)
    }

    /// Zero-based priority of a column, if it is sorted.
    pub fn priority_of(&self, column_key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.column_key == column_key)
    }

    /// Sorts by a single column, replacing any existing sort.
    pub fn set(&mut self, column_key: impl Into<String>, direction: Direction) {
        self.entries.clear();
        self.entries.push(SortEntry {
            column_key: column_key.into(),
            direction,
        });
    }

    /// Advances a column through unset, ascending and descending.
    ///
    /// Any other sorted column is dropped. Returns the column's new direction,
    /// `None` meaning the table is now unsorted.
    pub fn toggle(&mut self, column_key: &str) -> Option<Direction> {
        let next = next_direction(self.direction_of(column_key));
        self.entries.clear();
        if let Some(direction) = next {
            self.entries.push(SortEntry {
                column_key: column_key.to_string(),
                direction,
            });
        }
        next
    }

    /// Like [`Sorting::toggle`] but leaves the other sorted columns in place.
    ///
    /// A newly sorted column is appended with the lowest priority.
    pub fn toggle_multi(&mut self, column_key: &str) -> Option<Direction> {
        match self.priority_of(column_key) {
            Some(index) => match next_direction(Some(self.entries[index].direction)) {
                Some(direction) => {
                    self.entries[index].direction = direction;
                    Some(direction)
                }
                None => {
                    self.entries.remove(index);
                    None
                }
            },
            None => {
                self.entries.push(SortEntry {
                    column_key: column_key.to_string(),
                    direction: Direction::Asc,
                });
                Some(Direction::Asc)
            }
        }
    }

    /// Clears all sorting.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Renders the sort for the backend's `sort` query parameter.
    ///
    /// Each entry becomes `key,direction`; entries are joined with `;`.
    /// Returns `None` when unsorted.
    pub fn to_query(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        Some(
            self.entries
                .iter()
                .map(|entry| format!("{},{}", entry.column_key, entry.direction.as_str()))
                .collect::<Vec<_>>()
                .join(";"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycles_through_states() {
        let mut sorting = Sorting::new();
        assert_eq!(sorting.toggle("name"), Some(Direction::Asc));
        assert_eq!(sorting.toggle("name"), Some(Direction::Desc));
        assert_eq!(sorting.toggle("name"), None);
        assert!(sorting.is_empty());
    }

    #[test]
    fn test_toggle_other_column_replaces_sort() {
        let mut sorting = Sorting::new();
        sorting.toggle("name");
        sorting.toggle("name");
        assert_eq!(sorting.toggle("price"), Some(Direction::Asc));
        assert_eq!(sorting.entries().len(), 1);
        assert_eq!(sorting.direction_of("name"), None);
        assert_eq!(sorting.direction_of("price"), Some(Direction::Asc));
    }

    #[test]
    fn test_toggle_multi_keeps_priority_order() {
        let mut sorting = Sorting::new();
        sorting.toggle_multi("name");
        sorting.toggle_multi("price");
        sorting.toggle_multi("name");
        assert_eq!(sorting.priority_of("name"), Some(0));
        assert_eq!(sorting.priority_of("price"), Some(1));
        assert_eq!(sorting.to_query().as_deref(), Some("name,desc;price,asc"));

        assert_eq!(sorting.toggle_multi("name"), None);
        assert_eq!(sorting.priority_of("price"), Some(0));
    }

    #[test]
    fn test_to_query() {
        let mut sorting = Sorting::new();
        assert_eq!(sorting.to_query(), None);
        sorting.set("createdAt", Direction::Desc);
        assert_eq!(sorting.to_query().as_deref(), Some("createdAt,desc"));
    }
}
