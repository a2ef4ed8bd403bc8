//! Compact page-number sequence for a pager.

/// One slot in the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number (one-based).
    Page(u32),
    /// A skipped range.
    Ellipsis,
}

impl std::fmt::Display for PageItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{}", n),
            PageItem::Ellipsis => write!(f, "..."),
        }
    }
}

/// Computes the page numbers to show for `current_page` out of `total_pages`.
///
/// The result never holds more than seven items regardless of `total_pages`:
///
/// - `total_pages <= 3`: every page
/// - `current_page <= 2`: `1 2 3 ... last`
/// - `current_page >= last - 1`: `1 ... last-2 last-1 last`
/// - otherwise: `1 ... current-1 current current+1 ... last`
pub fn compute_page_window(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if total_pages <= 3 {
        return (1..=total_pages).map(Page).collect();
    }

    if current_page <= 2 {
        vec![Page(1), Page(2), Page(3), Ellipsis, Page(total_pages)]
    } else if current_page >= total_pages - 1 {
        vec![
            Page(1),
            Ellipsis,
            Page(total_pages - 2),
            Page(total_pages - 1),
            Page(total_pages),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current_page - 1),
            Page(current_page),
            Page(current_page + 1),
            Ellipsis,
            Page(total_pages),
        ]
    }
}
