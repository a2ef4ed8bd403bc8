//! Table controller.

use std::collections::HashMap;
use std::sync::RwLock;

use log::debug;

use crate::navigation::{Navigation, QueryUpdate};

use super::{
    Column, ColumnVisibility, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, Direction, PAGE_PARAM, PageData,
    PageItem, Pagination, RowSelection, SIZE_PARAM, SelectionMode, Sorting, TableRow,
    compute_page_window, init_pagination,
};

/// Snapshot of a table's interactive state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub sorting: Sorting,
    pub column_visibility: HashMap<String, bool>,
    /// Every selected id, including ids no longer on the current page.
    pub row_selection: Vec<String>,
    pub pagination: Pagination,
}

/// Internal state for the table controller.
#[derive(Debug)]
struct TableInner<T> {
    columns: Vec<Column>,
    page: PageData<T>,
    sorting: Sorting,
    visibility: ColumnVisibility,
    selection: RowSelection,
    selection_mode: SelectionMode,
}

/// Interactive state for one data table.
///
/// Sorting, column visibility and row selection are local to the controller.
/// Pagination belongs to the navigation context: [`TableController::pagination`]
/// re-reads the `page` and `size` query parameters on every call and
/// [`TableController::set_page`] writes them back without touching local
/// state.
///
/// # Example
///
/// ```
/// use estate_lib::navigation::MemoryNavigation;
/// use estate_lib::table::{Column, PageData, TableController, TableRow};
///
/// #[derive(Clone)]
/// struct Room { id: u32 }
///
/// impl TableRow for Room {
///     fn id(&self) -> String { self.id.to_string() }
/// }
///
/// let nav = MemoryNavigation::at("/data-categories/rooms").unwrap();
/// let table = TableController::new(vec![Column::new("roomNumber", "Room").sortable()], nav);
/// table.set_data(PageData::new(vec![Room { id: 1 }, Room { id: 2 }], 40, 3));
///
/// table.set_page(3);
/// assert_eq!(table.pagination().page_index, 2);
/// ```
#[derive(Debug)]
pub struct TableController<T: TableRow, N: Navigation> {
    inner: RwLock<TableInner<T>>,
    navigation: N,
    fallback_page: u32,
    fallback_size: u32,
}

impl<T: TableRow, N: Navigation> TableController<T, N> {
    /// Create a controller over `columns`, reading pagination from `navigation`.
    ///
    /// Rows are selectable with checkboxes ([`SelectionMode::Multiple`]).
    pub fn new(columns: Vec<Column>, navigation: N) -> Self {
        Self {
            inner: RwLock::new(TableInner {
                columns,
                page: PageData::default(),
                sorting: Sorting::new(),
                visibility: ColumnVisibility::new(),
                selection: RowSelection::new(),
                selection_mode: SelectionMode::Multiple,
            }),
            navigation,
            fallback_page: DEFAULT_PAGE,
            fallback_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the page and page size used when the URL carries none.
    pub fn with_defaults(mut self, page: u32, page_size: u32) -> Self {
        self.fallback_page = page.max(1);
        self.fallback_size = page_size.max(1);
        self
    }

    /// Set the selection mode.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        if let Ok(inner) = self.inner.get_mut() {
            inner.selection_mode = mode;
        }
        self
    }

    /// The navigation context this table is bound to.
    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    // -------------------------------------------------------------------------
    // Columns and data
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Check whether a column exists and toggles sorting.
    pub fn is_sortable(&self, column_key: &str) -> bool {
        self.inner
            .read()
            .map(|g| Self::sortable(&g, column_key))
            .unwrap_or(false)
    }

    fn sortable(guard: &TableInner<T>, column_key: &str) -> bool {
        guard
            .columns
            .iter()
            .any(|column| column.accessor_key == column_key && column.is_sort)
    }

    /// Replace the current page of rows.
    ///
    /// Selection is kept as is: ids of rows that left the page stay selected
    /// but are no longer reported.
    pub fn set_data(&self, page: PageData<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.page = page;
        }
    }

    /// Rows of the current page.
    pub fn rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.page.rows().to_vec())
            .unwrap_or_default()
    }

    /// Ids of the rows on the current page.
    pub fn visible_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.page.row_ids())
            .unwrap_or_default()
    }

    /// Total number of records reported with the current page.
    pub fn total_elements(&self) -> u64 {
        self.inner
            .read()
            .map(|g| g.page.total_elements())
            .unwrap_or(0)
    }

    /// Total number of pages reported with the current page.
    pub fn total_pages(&self) -> u32 {
        self.inner
            .read()
            .map(|g| g.page.total_pages())
            .unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Current pagination, derived from the URL.
    pub fn pagination(&self) -> Pagination {
        init_pagination(
            self.navigation.query(PAGE_PARAM).as_deref(),
            self.navigation.query(SIZE_PARAM).as_deref(),
            self.fallback_page,
            self.fallback_size,
        )
    }

    /// Page numbers for the pager.
    pub fn page_window(&self) -> Vec<PageItem> {
        compute_page_window(self.pagination().page(), self.total_pages())
    }

    /// Write `page` (one-based) to the URL. Zero is treated as 1.
    pub fn set_page(&self, page: u32) {
        let page = page.max(1);
        debug!("table: set page {}", page);
        self.navigation
            .set_query(&[QueryUpdate::set(PAGE_PARAM, page)]);
    }

    /// Write `size` to the URL, returning to page 1 when not already there.
    pub fn set_page_size(&self, size: u32) {
        let size = size.max(1);
        let mut updates = vec![QueryUpdate::set(SIZE_PARAM, size)];
        if self.pagination().page() != 1 {
            updates.push(QueryUpdate::set(PAGE_PARAM, 1));
        }
        debug!("table: set page size {}", size);
        self.navigation.set_query(&updates);
    }

    /// Check if there is a page before the current one.
    pub fn can_previous_page(&self) -> bool {
        self.pagination().page() > 1
    }

    /// Check if there is a page after the current one.
    pub fn can_next_page(&self) -> bool {
        self.pagination().page() < self.total_pages()
    }

    /// Go to the previous page, if any.
    pub fn previous_page(&self) {
        if self.can_previous_page() {
            self.set_page(self.pagination().page() - 1);
        }
    }

    /// Go to the next page, if any.
    pub fn next_page(&self) {
        if self.can_next_page() {
            self.set_page(self.pagination().page() + 1);
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the current sort state.
    pub fn sorting(&self) -> Sorting {
        self.inner
            .read()
            .map(|g| g.sorting.clone())
            .unwrap_or_default()
    }

    /// Header click on a column: unset -> ascending -> descending -> unset.
    ///
    /// Sorting another column replaces the current sort. Columns that are not
    /// sortable are ignored. Returns the column's new direction.
    pub fn toggle_sort(&self, column_key: &str) -> Option<Direction> {
        if let Ok(mut guard) = self.inner.write()
            && Self::sortable(&guard, column_key)
        {
            return guard.sorting.toggle(column_key);
        }
        None
    }

    /// Like [`TableController::toggle_sort`] but keeps other sorted columns.
    pub fn toggle_sort_multi(&self, column_key: &str) -> Option<Direction> {
        if let Ok(mut guard) = self.inner.write()
            && Self::sortable(&guard, column_key)
        {
            return guard.sorting.toggle_multi(column_key);
        }
        None
    }

    /// Clear sort state.
    pub fn clear_sort(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.sorting.clear();
        }
    }

    // -------------------------------------------------------------------------
    // Column visibility
    // -------------------------------------------------------------------------

    /// Check whether a column is shown.
    pub fn is_column_visible(&self, column_key: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.visibility.is_visible(column_key))
            .unwrap_or(true)
    }

    /// Show or hide a column.
    pub fn set_column_visible(&self, column_key: &str, visible: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.visibility.set(column_key, visible);
        }
    }

    /// Flip a column's visibility. Returns the new value.
    pub fn toggle_column_visibility(&self, column_key: &str) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            return guard.visibility.toggle(column_key);
        }
        true
    }

    /// Show every column.
    pub fn reset_column_visibility(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.visibility.reset();
        }
    }

    /// Visible columns in configuration order.
    pub fn visible_columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| {
                g.visibility
                    .visible_columns(&g.columns)
                    .into_iter()
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get the selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.inner
            .read()
            .map(|g| g.selection_mode)
            .unwrap_or_default()
    }

    /// Toggle the checkbox of a row on the current page.
    ///
    /// Ids not on the current page are ignored. In single mode selecting a
    /// row deselects the others. Returns `true` if the row is now selected.
    pub fn toggle_row(&self, id: &str) -> bool {
        if let Ok(mut guard) = self.inner.write()
            && guard.page.find(id).is_some()
        {
            let mode = guard.selection_mode;
            return match mode {
                SelectionMode::None => false,
                SelectionMode::Single => {
                    if guard.selection.is_selected(id) {
                        guard.selection.set(id, false);
                        false
                    } else {
                        guard.selection.select_only(id);
                        true
                    }
                }
                SelectionMode::Multiple => guard.selection.toggle(id),
            };
        }
        false
    }

    /// Header checkbox: select every row on the current page, or deselect
    /// them all if they already are. Rows on other pages are untouched.
    ///
    /// Returns `true` if the page's rows are now selected.
    pub fn toggle_all_rows(&self) -> bool {
        if let Ok(mut guard) = self.inner.write()
            && guard.selection_mode == SelectionMode::Multiple
        {
            let ids = guard.page.row_ids();
            return guard.selection.toggle_all(&ids);
        }
        false
    }

    /// Check if a row on the current page is selected.
    pub fn is_row_selected(&self, id: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.page.find(id).is_some() && g.selection.is_selected(id))
            .unwrap_or(false)
    }

    /// Every row on the current page is selected.
    pub fn is_all_rows_selected(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_all_selected(&g.page.row_ids()))
            .unwrap_or(false)
    }

    /// At least one row on the current page is selected.
    pub fn is_some_rows_selected(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_some_selected(&g.page.row_ids()))
            .unwrap_or(false)
    }

    /// Header checkbox is indeterminate: some but not all rows selected.
    pub fn is_indeterminate(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_indeterminate(&g.page.row_ids()))
            .unwrap_or(false)
    }

    /// Selected ids on the current page, in row order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.selection.selected_among(&g.page.row_ids()))
            .unwrap_or_default()
    }

    /// Selected rows on the current page.
    pub fn selected_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| {
                g.page
                    .rows()
                    .iter()
                    .filter(|row| g.selection.is_selected(&row.id()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Clear all selection, stale ids included.
    pub fn clear_selection(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.selection.clear();
        }
    }

    // -------------------------------------------------------------------------
    // Snapshot
    // -------------------------------------------------------------------------

    /// Snapshot of sorting, visibility, selection and pagination.
    pub fn state(&self) -> TableState {
        let pagination = self.pagination();
        self.inner
            .read()
            .map(|g| TableState {
                sorting: g.sorting.clone(),
                column_visibility: g.visibility.flags().clone(),
                row_selection: g.selection.selected(),
                pagination,
            })
            .unwrap_or_else(|_| TableState {
                sorting: Sorting::new(),
                column_visibility: HashMap::new(),
                row_selection: Vec::new(),
                pagination,
            })
    }
}
