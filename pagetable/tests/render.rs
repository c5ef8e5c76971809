//! Buffer-level rendering checks for the Table component.

use pagetable::cell::{Cell, Row};
use pagetable::components::table::Table;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use serde_json::json;

fn rows(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| {
            vec![
                Cell::Text(format!("Item {i}")),
                Cell::Number(i as f64),
                Cell::Status {
                    id: i as i64,
                    active: i % 2 == 0,
                },
                Cell::Action {
                    payload: json!({"id": i}),
                },
            ]
        })
        .collect()
}

fn draw(table: &Table, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| table.render(frame, frame.area()))
        .unwrap();
    buffer_lines(&terminal)
}

fn buffer_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

#[test]
fn test_header_rows_and_footer() {
    let table = Table::with_headers(["Name", "Price", "Status", "Actions"]);
    table.set_rows(rows(12));
    let lines = draw(&table, 60, 10);

    assert!(lines[0].contains("Name"));
    assert!(lines[0].contains("Actions"));
    assert!(lines[1].contains("Item 0"));
    assert!(lines[1].contains("● active"));
    assert!(lines[1].contains("[v] [e] [d]"));
    assert!(lines[2].contains("○ inactive"));
    // Five rows on the first page, nothing after them.
    assert!(lines[5].contains("Item 4"));
    assert!(lines[6].trim().is_empty());
    assert!(lines[9].contains("◀ page 1/3 ▶"));
    assert!(lines[9].contains("12 rows · 5/page"));
}

#[test]
fn test_numbers_are_right_aligned() {
    let table = Table::with_headers(["Name", "Price", "Status", "Actions"]);
    table.set_rows(rows(12));
    let lines = draw(&table, 60, 10);

    // Price column spans x=15..30 with a one-cell gutter; a one-digit
    // number lands on the last content cell, x=28.
    assert_eq!(lines[1][15..30].trim(), "0");
    assert_eq!(lines[1].chars().nth(28), Some('0'));
}

#[test]
fn test_last_page_is_partial() {
    let table = Table::with_headers(["Name", "Price", "Status", "Actions"]);
    table.set_rows(rows(12));
    table.next_page();
    table.next_page();
    let lines = draw(&table, 60, 10);

    assert!(lines[1].contains("Item 10"));
    assert!(lines[2].contains("Item 11"));
    assert!(lines[3].trim().is_empty());
    assert!(lines[9].contains("◀ page 3/3 ▶"));
}

#[test]
fn test_loading_replaces_body() {
    let table = Table::with_headers(["Name", "Price", "Status", "Actions"]);
    table.set_rows(rows(12));
    table.set_loading(true);
    let lines = draw(&table, 60, 10);

    assert!(lines[1].contains("Loading..."));
    assert!(!lines.iter().any(|line| line.contains("Item 0")));
    // Pagination is untouched by the flag.
    assert!(lines[9].contains("◀ page 1/3 ▶"));
}

#[test]
fn test_empty_table_renders_header_and_footer_only() {
    let table = Table::with_headers(["Name", "Price"]);
    let lines = draw(&table, 40, 6);

    assert!(lines[0].contains("Name"));
    assert!(lines[1].trim().is_empty());
    assert!(lines[5].contains("◀ page 1/1 ▶"));
    assert!(lines[5].contains("0 rows · 5/page"));
}

#[test]
fn test_image_cell_renders_alt_text() {
    let table = Table::with_headers(["Photo", "Name"]);
    table.set_rows(vec![vec![
        Cell::Image {
            src: "/img/1.png".into(),
            alt: "hoodie".into(),
        },
        Cell::Text("Red Hoodie".into()),
    ]]);
    let lines = draw(&table, 40, 6);

    assert!(lines[1].contains("[hoodie]"));
    assert!(lines[1].contains("Red Hoodie"));
}

#[test]
fn test_short_rows_leave_trailing_columns_blank() {
    let table = Table::with_headers(["Name", "Price", "Status"]);
    table.set_rows(vec![vec![Cell::Text("only name".into())]]);
    let lines = draw(&table, 30, 6);

    assert!(lines[1].starts_with("only name"));
    assert!(lines[1][10..].trim().is_empty());
}

#[test]
fn test_long_rows_are_cut_at_header_count() {
    let table = Table::with_headers(["Name"]);
    table.set_rows(vec![vec![
        Cell::Text("kept".into()),
        Cell::Text("dropped".into()),
    ]]);
    let lines = draw(&table, 30, 6);

    assert!(lines[1].contains("kept"));
    assert!(!lines.iter().any(|line| line.contains("dropped")));
}

#[test]
fn test_long_text_is_truncated_to_column() {
    let table = Table::with_headers(["Name", "Price"]);
    table.set_rows(vec![vec![
        Cell::Text("a very long product name that cannot fit".into()),
        Cell::Number(1.0),
    ]]);
    let lines = draw(&table, 20, 6);

    // Column is 10 wide with a one-cell gutter.
    assert!(lines[1].starts_with("a very lo "));
}

#[test]
fn test_tiny_area_renders_nothing() {
    let table = Table::with_headers(["Name"]);
    table.set_rows(rows(3));
    let lines = draw(&table, 10, 1);

    assert!(lines[0].trim().is_empty());
    // No geometry was recorded, so clicks stay inert.
    assert!(table.handle_click(0, 0).is_empty());
}

#[test]
fn test_render_clears_dirty_flag() {
    let table = Table::with_headers(["Name"]);
    table.set_rows(rows(3));
    assert!(table.is_dirty());

    draw(&table, 20, 6);
    assert!(!table.is_dirty());
}
