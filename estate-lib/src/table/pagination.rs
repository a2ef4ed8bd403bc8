//! Pagination derived from URL query parameters.

/// Query parameter holding the one-based page number.
pub const PAGE_PARAM: &str = "page";
/// Query parameter holding the page size.
pub const SIZE_PARAM: &str = "size";
/// Page used when the URL carries none.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the URL carries none.
pub const DEFAULT_PAGE_SIZE: u32 = 15;

/// Zero-based pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_index: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: DEFAULT_PAGE - 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// One-based page number, as written in the URL.
    pub fn page(&self) -> u32 {
        self.page_index + 1
    }
}

/// Parses a query value as a positive integer.
///
/// Missing, empty, non-numeric, zero and negative values all yield `None`.
pub fn parse_positive(value: Option<&str>) -> Option<u32> {
    value?.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

/// Builds pagination from the raw `page` and `size` query values.
///
/// A URL value wins when it parses as a positive integer; otherwise the
/// fallback is used.
pub fn init_pagination(
    url_page: Option<&str>,
    url_size: Option<&str>,
    fallback_page: u32,
    fallback_size: u32,
) -> Pagination {
    let page = parse_positive(url_page).unwrap_or(fallback_page).max(1);
    let page_size = parse_positive(url_size).unwrap_or(fallback_size).max(1);
    Pagination {
        page_index: page - 1,
        page_size,
    }
}
