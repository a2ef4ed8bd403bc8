//! One page of rows handed to a table.

/// Trait for rows displayed in a table.
///
/// The id is the selection key. It must be unique and stable across sorts and
/// pages; an array index would not be.
pub trait TableRow: Clone + Send + Sync + 'static {
    /// Return the unique identifier of this row.
    fn id(&self) -> String;
}

/// A page of rows with the pagination metadata of the response it came from.
///
/// The controller never fetches. Whoever performs the request builds a
/// `PageData` from the response body (`content`, `totalElements`,
/// `totalPages`) and hands it over.
#[derive(Debug, Clone)]
pub struct PageData<T> {
    rows: Vec<T>,
    total_elements: u64,
    total_pages: u32,
}

impl<T> Default for PageData<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total_elements: 0,
            total_pages: 0,
        }
    }
}

impl<T: TableRow> PageData<T> {
    /// Creates a page from rows and the totals reported by the backend.
    pub fn new(rows: Vec<T>, total_elements: u64, total_pages: u32) -> Self {
        Self {
            rows,
            total_elements,
            total_pages,
        }
    }

    /// Creates a page, deriving `total_pages` from `total_elements` and the page size.
    pub fn with_page_size(rows: Vec<T>, total_elements: u64, page_size: u32) -> Self {
        let page_size = u64::from(page_size.max(1));
        let total_pages = total_elements.div_ceil(page_size);
        Self {
            rows,
            total_elements,
            total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
        }
    }

    /// Returns the rows of this page.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Total number of records across all pages.
    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Total number of pages.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Returns `true` if this page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows on this page.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Ids of the rows on this page, in row order.
    pub fn row_ids(&self) -> Vec<String> {
        self.rows.iter().map(TableRow::id).collect()
    }

    /// Find a row by id.
    pub fn find(&self, id: &str) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }
}
