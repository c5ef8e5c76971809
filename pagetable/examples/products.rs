//! Products table demo - a paginated table over a simulated product list.
//!
//! Controls:
//! - Left/Right or PageUp/PageDown: flip pages
//! - s: cycle the page size
//! - l: toggle the loading flag
//! - Mouse: click status switches, action buttons and the pager arrows
//! - q: quit
//!
//! Deleting a row pops a confirm prompt; while it is open the table is
//! locked behind it (y confirms, n or Esc cancels).

use std::fs::File;
use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::LevelFilter;
use pagetable::prelude::*;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use serde_json::{json, Value};
use simplelog::{Config, WriteLogger};

fn product_grid() -> Value {
    let grid: Vec<Value> = (0..23)
        .map(|i| {
            json!([
                {"type": "image", "src": format!("/img/{i}.png"), "alt": format!("p{i}")},
                format!("Product {i}"),
                (i as f64) * 2.5 + 4.0,
                {"type": "status", "id": i, "status": i % 3 != 0},
                {"type": "actions", "data": {"id": i, "name": format!("Product {i}")}},
            ])
        })
        .collect();
    Value::Array(grid)
}

fn main() -> io::Result<()> {
    if let Ok(log_file) = File::create("products.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let table = Table::with_headers(["Photo", "Name", "Price", "Status", "Actions"]);
    table.set_rows(rows_from_json(&product_grid()).expect("static grid"));
    let ui = UiState::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &table, &ui);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    table: &Table,
    ui: &UiState,
) -> io::Result<()> {
    let mut status = String::from("click a switch or an action button");
    let mut pending_delete: Option<Value> = None;

    loop {
        let mut table_area = Rect::default();
        terminal.draw(|frame| {
            let area = frame.area();
            if area.height < 2 {
                return;
            }
            table_area = Rect::new(area.x, area.y, area.width, area.height - 1);
            table.render(frame, table_area);

            let line = if ui.background_locked() {
                format!("confirm delete? y/n  ({status})")
            } else {
                status.clone()
            };
            frame.render_widget(
                Paragraph::new(line).style(Style::default().fg(Color::Yellow)),
                Rect::new(area.x, area.y + area.height - 1, area.width, 1),
            );
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if ui.background_locked() {
                    match key.code {
                        KeyCode::Char('y') => {
                            if let Some(payload) = pending_delete.take() {
                                status = format!("deleted {payload}");
                            }
                            ui.modal_closed();
                        }
                        KeyCode::Char('n') | KeyCode::Esc => {
                            pending_delete = None;
                            ui.modal_closed();
                            status = "delete cancelled".into();
                        }
                        _ => {}
                    }
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('l') => table.set_loading(!table.is_loading()),
                    _ => {
                        table.on_key(&key);
                    }
                }
            }
            Event::Mouse(mouse) if !ui.background_locked() => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if mouse.column >= table_area.x
                        && mouse.row >= table_area.y
                        && mouse.row < table_area.y + table_area.height
                    {
                        table.on_click(mouse.column - table_area.x, mouse.row - table_area.y);
                    }
                }
                MouseEventKind::ScrollUp => {
                    table.on_scroll(ScrollDirection::Up);
                }
                MouseEventKind::ScrollDown => {
                    table.on_scroll(ScrollDirection::Down);
                }
                _ => {}
            },
            _ => {}
        }

        for event in table.drain_events() {
            match event {
                TableEvent::Action(action) => match action.kind {
                    ActionKind::Delete => {
                        pending_delete = Some(action.payload);
                        ui.modal_opened();
                    }
                    kind => status = format!("{kind}: {}", action.payload),
                },
                TableEvent::StatusToggle(toggle) => {
                    status = format!("toggle id={} (currently {})", toggle.id, toggle.active);
                }
                TableEvent::PageChange(change) => {
                    status = format!("page {}", change.page);
                }
            }
        }
    }
}
