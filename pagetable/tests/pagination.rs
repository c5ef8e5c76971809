//! Pagination behavior of the Table component.

use pagetable::cell::{Cell, Row};
use pagetable::components::table::Table;

fn rows(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| vec![Cell::Text(format!("Item {i}")), Cell::Number(i as f64)])
        .collect()
}

fn table_with(n: usize) -> Table {
    let table = Table::with_headers(["Name", "Value"]);
    table.set_rows(rows(n));
    table
}

#[test]
fn test_total_pages_formula() {
    for (count, per_page, expected) in [
        (0, 5, 1),
        (1, 5, 1),
        (5, 5, 1),
        (6, 5, 2),
        (12, 5, 3),
        (12, 12, 1),
        (12, 50, 1),
        (100, 10, 10),
        (101, 10, 11),
    ] {
        let table = table_with(count);
        table.set_rows_per_page(per_page);
        assert_eq!(
            table.total_pages(),
            expected,
            "{count} rows at {per_page}/page"
        );
    }
}

#[test]
fn test_twelve_rows_five_per_page() {
    let table = table_with(12);
    assert_eq!(table.total_pages(), 3);
    assert_eq!(table.visible_page().len(), 5);

    assert!(table.next_page());
    assert_eq!(table.visible_page().len(), 5);

    assert!(table.next_page());
    assert_eq!(table.current_page(), 3);
    assert_eq!(table.visible_page().len(), 2);
}

#[test]
fn test_next_page_noop_on_last_page() {
    let table = table_with(12);
    table.next_page();
    table.next_page();
    assert_eq!(table.current_page(), 3);

    assert!(!table.next_page());
    assert_eq!(table.current_page(), 3);
}

#[test]
fn test_previous_page_noop_on_first_page() {
    let table = table_with(12);
    assert!(!table.previous_page());
    assert_eq!(table.current_page(), 1);
}

#[test]
fn test_empty_rows() {
    let table = table_with(0);
    assert_eq!(table.total_pages(), 1);
    assert!(table.visible_page().is_empty());
    assert!(!table.next_page());
    assert!(!table.previous_page());
    assert_eq!(table.current_page(), 1);
}

#[test]
fn test_visible_page_slices_in_order() {
    let table = table_with(12);
    table.next_page();

    let page = table.visible_page();
    assert_eq!(page[0][0], Cell::Text("Item 5".into()));
    assert_eq!(page[4][0], Cell::Text("Item 9".into()));
}

#[test]
fn test_set_rows_clamps_page_eagerly() {
    let table = table_with(12);
    table.next_page();
    table.next_page();
    assert_eq!(table.current_page(), 3);

    table.set_rows(rows(4));
    // Clamped by the mutation itself, not lazily on the next read.
    assert_eq!(table.current_page(), 1);
}

#[test]
fn test_set_rows_clamps_to_last_remaining_page() {
    let table = table_with(12);
    table.next_page();
    table.next_page();

    table.set_rows(rows(6));
    assert_eq!(table.current_page(), 2);
    assert_eq!(table.visible_page().len(), 1);
}

#[test]
fn test_set_rows_per_page_keeps_page_within_range() {
    let table = table_with(12);
    table.next_page();
    assert_eq!(table.current_page(), 2);

    // Page 2 still exists at 3 rows/page.
    table.set_rows_per_page(3);
    assert_eq!(table.total_pages(), 4);
    assert_eq!(table.current_page(), 2);

    // At 50 rows/page only one page remains; the index is clamped.
    table.set_rows_per_page(50);
    assert_eq!(table.total_pages(), 1);
    assert_eq!(table.current_page(), 1);
    assert_eq!(table.visible_page().len(), 12);
}

#[test]
fn test_set_rows_per_page_zero_ignored() {
    let table = table_with(12);
    table.set_rows_per_page(0);
    assert_eq!(table.rows_per_page(), 5);
    assert_eq!(table.total_pages(), 3);
}

#[test]
fn test_visible_page_reflects_latest_rows() {
    let table = table_with(5);
    assert_eq!(table.visible_page()[0][0], Cell::Text("Item 0".into()));

    table.set_rows(vec![vec![Cell::Text("replaced".into())]]);
    assert_eq!(table.visible_page()[0][0], Cell::Text("replaced".into()));
}

#[test]
fn test_loading_flag_has_no_effect_on_pagination() {
    let table = table_with(12);
    table.set_loading(true);
    assert_eq!(table.total_pages(), 3);
    assert!(table.next_page());
    assert_eq!(table.visible_page().len(), 5);
}

#[test]
fn test_cell_at_reads_current_page() {
    let table = table_with(12);
    table.next_page();

    assert_eq!(table.cell_at(0, 0), Some(Cell::Text("Item 5".into())));
    assert_eq!(table.cell_at(0, 1), Some(Cell::Number(5.0)));
    assert_eq!(table.cell_at(0, 9), None);
    assert_eq!(table.cell_at(9, 0), None);
}
