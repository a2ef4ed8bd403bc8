//! Table controller driven through an in-memory navigation context.

use estate_lib::navigation::{MemoryNavigation, Navigation};
use estate_lib::resource::Resource;
use estate_lib::table::{
    Direction, PageData, PageItem, SelectionMode, TableController, TableRow, compute_page_window,
};

#[derive(Debug, Clone, PartialEq)]
struct Invoice {
    code: String,
    total: u64,
}

impl Invoice {
    fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            total: 100,
        }
    }
}

impl TableRow for Invoice {
    fn id(&self) -> String {
        self.code.clone()
    }
}

fn invoices(location: &str) -> TableController<Invoice, MemoryNavigation> {
    let nav = MemoryNavigation::at(location).unwrap();
    TableController::new(Resource::Invoices.columns(), nav)
}

fn page(codes: &[&str], total_elements: u64) -> PageData<Invoice> {
    PageData::with_page_size(
        codes.iter().map(|c| Invoice::new(c)).collect(),
        total_elements,
        15,
    )
}

#[test]
fn test_page_window_examples() {
    use PageItem::{Ellipsis, Page};

    for total in 0..=3 {
        let expected: Vec<_> = (1..=total).map(Page).collect();
        assert_eq!(compute_page_window(1, total), expected);
    }
    assert_eq!(
        compute_page_window(1, 10),
        vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
    );
    assert_eq!(
        compute_page_window(10, 10),
        vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
    );
    assert_eq!(
        compute_page_window(5, 10),
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
    );
}

#[test]
fn test_page_window_is_bounded() {
    for total in 0..60 {
        for current in 1..=total.max(1) {
            let window = compute_page_window(current, total);
            assert!(window.len() <= 7);
            assert_eq!(window, compute_page_window(current, total));
        }
    }
}

#[test]
fn test_defaults_without_query() {
    let table = invoices("/finance/invoices");
    let pagination = table.pagination();
    assert_eq!(pagination.page_index, 0);
    assert_eq!(pagination.page_size, 15);
}

#[test]
fn test_invalid_query_falls_back() {
    let table = invoices("/finance/invoices?page=abc&size=-4");
    assert_eq!(table.pagination().page_index, 0);
    assert_eq!(table.pagination().page_size, 15);

    let table = invoices("/finance/invoices?page=0&size=0").with_defaults(2, 30);
    assert_eq!(table.pagination().page(), 2);
    assert_eq!(table.pagination().page_size, 30);
}

#[test]
fn test_set_page_writes_url() {
    let table = invoices("/finance/invoices?status=PAID");
    table.set_page(3);
    assert_eq!(table.pagination().page_index, 2);
    assert_eq!(table.navigation().query("status").as_deref(), Some("PAID"));
    assert_eq!(table.navigation().query("page").as_deref(), Some("3"));
}

#[test]
fn test_set_page_size_returns_to_first_page() {
    let table = invoices("/finance/invoices");
    table.set_page(3);
    table.set_page_size(50);

    let pagination = table.pagination();
    assert_eq!(pagination.page_index, 0);
    assert_eq!(pagination.page_size, 50);
    // One history entry for set_page, one for set_page_size.
    assert_eq!(table.navigation().history_len(), 3);
}

#[test]
fn test_set_page_size_on_first_page_keeps_page_absent() {
    let table = invoices("/finance/invoices");
    table.set_page_size(30);
    assert_eq!(table.navigation().query("page"), None);
    assert_eq!(table.navigation().location().to_string(), "/finance/invoices?size=30");
}

#[test]
fn test_back_and_forward_rederive_pagination() {
    let table = invoices("/finance/invoices");
    table.set_page(2);
    table.set_page(4);

    assert!(table.navigation().back());
    assert_eq!(table.pagination().page(), 2);
    assert!(table.navigation().back());
    assert_eq!(table.pagination().page(), 1);
    assert!(table.navigation().forward());
    assert_eq!(table.pagination().page(), 2);
}

#[test]
fn test_next_and_previous_respect_bounds() {
    let table = invoices("/finance/invoices");
    table.set_data(page(&["A", "B"], 40));
    assert_eq!(table.total_pages(), 3);

    assert!(!table.can_previous_page());
    table.next_page();
    table.next_page();
    assert_eq!(table.pagination().page(), 3);
    assert!(!table.can_next_page());
    table.next_page();
    assert_eq!(table.pagination().page(), 3);
    table.previous_page();
    assert_eq!(table.pagination().page(), 2);
}

#[test]
fn test_select_all_selects_current_page() {
    let table = invoices("/finance/invoices");
    table.set_data(page(&["INV-1", "INV-2"], 2));

    assert!(table.toggle_all_rows());
    assert_eq!(table.selected_ids(), vec!["INV-1", "INV-2"]);
    assert!(table.is_all_rows_selected());
    assert!(!table.is_indeterminate());

    assert!(!table.toggle_all_rows());
    assert!(table.selected_ids().is_empty());
}

#[test]
fn test_indeterminate_header() {
    let table = invoices("/finance/invoices");
    table.set_data(page(&["INV-1", "INV-2", "INV-3"], 3));
    table.toggle_row("INV-2");
    assert!(table.is_indeterminate());
    assert!(table.is_some_rows_selected());
    assert!(!table.is_all_rows_selected());
}

#[test]
fn test_stale_selection_is_inert() {
    let table = invoices("/finance/invoices");
    table.set_data(page(&["INV-1", "INV-2"], 4));
    table.toggle_row("INV-1");

    table.set_page(2);
    table.set_data(page(&["INV-3", "INV-4"], 4));

    assert!(table.selected_ids().is_empty());
    assert!(table.selected_rows().is_empty());
    assert!(!table.is_row_selected("INV-1"));
    assert!(!table.is_some_rows_selected());
    // Still remembered, so it comes back with its page.
    assert_eq!(table.state().row_selection, vec!["INV-1"]);

    // Ids of other pages cannot be toggled.
    assert!(!table.toggle_row("INV-1"));

    table.set_page(1);
    table.set_data(page(&["INV-1", "INV-2"], 4));
    assert!(table.is_row_selected("INV-1"));
}

#[test]
fn test_single_selection_mode() {
    let table = invoices("/finance/invoices").with_selection_mode(SelectionMode::Single);
    table.set_data(page(&["INV-1", "INV-2"], 2));

    assert!(table.toggle_row("INV-1"));
    assert!(table.toggle_row("INV-2"));
    assert_eq!(table.selected_ids(), vec!["INV-2"]);
    assert!(!table.toggle_all_rows());
}

#[test]
fn test_sorting_only_on_sortable_columns() {
    let table = invoices("/finance/invoices");
    assert_eq!(table.toggle_sort("status"), None);
    assert!(table.sorting().is_empty());

    assert_eq!(table.toggle_sort("month"), Some(Direction::Asc));
    assert_eq!(table.toggle_sort("month"), Some(Direction::Desc));
    assert_eq!(table.toggle_sort("totalAmount"), Some(Direction::Asc));
    assert_eq!(table.sorting().direction_of("month"), None);
    assert_eq!(
        table.state().sorting.direction_of("totalAmount"),
        Some(Direction::Asc)
    );
}

#[test]
fn test_column_visibility() {
    let table = invoices("/finance/invoices");
    assert_eq!(table.visible_columns().len(), 4);
    assert!(!table.toggle_column_visibility("status"));
    let keys: Vec<_> = table
        .visible_columns()
        .into_iter()
        .map(|c| c.accessor_key)
        .collect();
    assert_eq!(keys, vec!["invoiceCode", "month", "totalAmount"]);
    table.reset_column_visibility();
    assert!(table.is_column_visible("status"));
}

#[test]
fn test_local_state_does_not_touch_url() {
    let table = invoices("/finance/invoices?page=2");
    table.set_data(page(&["INV-9"], 20));
    table.toggle_sort("month");
    table.toggle_row("INV-9");
    table.set_column_visible("month", false);
    assert_eq!(table.navigation().history_len(), 1);
    assert_eq!(table.rows()[0].total, 100);
}

#[test]
fn test_controller_is_shared_by_reference_across_threads() {
    let table = invoices("/finance/invoices");
    let codes: Vec<String> = (0..8).map(|i| format!("INV-{}", i)).collect();
    let refs: Vec<&str> = codes.iter().map(String::as_str).collect();
    table.set_data(page(&refs, 8));

    std::thread::scope(|scope| {
        for code in &codes {
            let table = &table;
            scope.spawn(move || table.toggle_row(code));
        }
    });

    assert!(table.is_all_rows_selected());
    assert_eq!(table.selected_ids(), codes);
}
