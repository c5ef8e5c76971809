//! Table component rendering.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::cell::Cell;

use super::state::{Table, TableLayout};

/// Width of one action button label, e.g. `[v]`.
pub(super) const ACTION_LABEL_WIDTH: u16 = 3;
/// Stride between action buttons (label plus gap).
pub(super) const ACTION_STEP: u16 = 4;

/// Action button labels in dispatch order: view, edit, delete.
const ACTION_BUTTONS: [&str; 3] = ["[v]", "[e]", "[d]"];

const LOADING_TEXT: &str = "Loading...";

impl Table {
    /// Render the table into `area` and record hit-test geometry.
    ///
    /// Layout: header line, one line per visible row, footer line with the
    /// pager and row counts. Needs at least two lines; smaller areas render
    /// nothing and clear the recorded geometry so stale clicks go nowhere.
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.width == 0 || area.height < 2 {
            self.set_layout(TableLayout::default());
            return;
        }

        let headers = self.headers();
        let columns = column_ranges(area.width, headers.len());
        let buf = frame.buffer_mut();

        // Header line.
        let header_style = Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD);
        buf.set_string(area.x, area.y, " ".repeat(area.width as usize), header_style);
        for (header, &(start, width)) in headers.iter().zip(&columns) {
            set_clipped(buf, area.x + start, area.y, header, width, header_style);
        }

        let body_top: u16 = 1;
        let footer_y = area.height - 1;
        let capacity = footer_y.saturating_sub(body_top) as usize;

        let mut rendered_rows: u16 = 0;
        if self.is_loading() {
            if capacity > 0 {
                let x = area.x + centered_x(area.width, LOADING_TEXT);
                buf.set_string(
                    x,
                    area.y + body_top,
                    LOADING_TEXT,
                    Style::default().fg(Color::Yellow),
                );
            }
        } else {
            let page = self.visible_page();
            for (i, row) in page.iter().take(capacity).enumerate() {
                let y = area.y + body_top + i as u16;
                // Cells beyond the header count are not rendered; short
                // rows leave their trailing columns blank.
                for (column, &(start, width)) in columns.iter().enumerate() {
                    if let Some(cell) = row.get(column) {
                        render_cell(buf, cell, area.x + start, y, width);
                    }
                }
                rendered_rows += 1;
            }
        }

        // Footer: pager on the left, counts on the right.
        let pager = format!(
            "◀ page {}/{} ▶",
            self.current_page(),
            self.total_pages()
        );
        let footer_style = Style::default().fg(Color::Gray);
        buf.set_string(area.x, area.y + footer_y, &pager, footer_style);

        let counts = format!("{} rows · {}/page", self.rows_len(), self.rows_per_page());
        let pager_width = pager.as_str().width() as u16;
        let counts_width = counts.as_str().width() as u16;
        if pager_width + 2 + counts_width <= area.width {
            buf.set_string(
                area.x + area.width - counts_width,
                area.y + footer_y,
                &counts,
                footer_style,
            );
        }

        self.set_layout(TableLayout {
            columns,
            body_top,
            body_rows: rendered_rows,
            footer_y,
            prev_control: (0, 1),
            next_control: (pager_width.saturating_sub(1), 1),
        });
        self.clear_dirty();
    }
}

/// Split the available width evenly across the table columns, giving
/// leftover cells to the leftmost columns. Offsets are relative to the
/// render area.
pub(super) fn column_ranges(total: u16, count: usize) -> Vec<(u16, u16)> {
    if count == 0 || total == 0 {
        return Vec::new();
    }
    let count = count as u16;
    let base = total / count;
    let extra = total % count;
    let mut ranges = Vec::with_capacity(count as usize);
    let mut x = 0;
    for i in 0..count {
        let width = base + u16::from(i < extra);
        ranges.push((x, width));
        x += width;
    }
    ranges
}

fn render_cell(buf: &mut Buffer, cell: &Cell, x: u16, y: u16, width: u16) {
    // Keep one cell of gutter between columns.
    let content_width = width.saturating_sub(1);
    if content_width == 0 {
        return;
    }

    match cell {
        Cell::Text(text) => set_clipped(buf, x, y, text, content_width, Style::default()),
        Cell::Number(n) => {
            let text = format_number(*n);
            let text_width = text.as_str().width() as u16;
            let start = x + content_width.saturating_sub(text_width);
            set_clipped(buf, start, y, &text, content_width, Style::default());
        }
        Cell::Status { active, .. } => {
            let (label, color) = if *active {
                ("● active", Color::Green)
            } else {
                ("○ inactive", Color::Red)
            };
            set_clipped(buf, x, y, label, content_width, Style::default().fg(color));
        }
        Cell::Action { .. } => {
            let style = Style::default().fg(Color::Cyan);
            for (i, label) in ACTION_BUTTONS.iter().enumerate() {
                let offset = i as u16 * ACTION_STEP;
                if offset + ACTION_LABEL_WIDTH > content_width {
                    break;
                }
                buf.set_string(x + offset, y, label, style);
            }
        }
        Cell::Image { alt, .. } => {
            let label = format!("[{alt}]");
            set_clipped(
                buf,
                x,
                y,
                &label,
                content_width,
                Style::default().fg(Color::DarkGray),
            );
        }
    }
}

fn set_clipped(buf: &mut Buffer, x: u16, y: u16, text: &str, max_width: u16, style: Style) {
    if max_width == 0 {
        return;
    }
    buf.set_stringn(x, y, text, max_width as usize, style);
}

fn centered_x(total: u16, text: &str) -> u16 {
    let width = text.width() as u16;
    total.saturating_sub(width) / 2
}

/// Integers print without a decimal point; everything else uses the
/// shortest round-trip form.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_ranges_distribute_remainder_left() {
        let ranges = column_ranges(10, 3);
        assert_eq!(ranges, vec![(0, 4), (4, 3), (7, 3)]);
    }

    #[test]
    fn test_column_ranges_empty() {
        assert!(column_ranges(10, 0).is_empty());
        assert!(column_ranges(0, 3).is_empty());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(2.5), "2.5");
    }
}
