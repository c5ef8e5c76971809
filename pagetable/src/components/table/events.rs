//! Event handling for the Table component.

use crossterm::event::{KeyCode, KeyEvent};
use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::cell::Cell;
use crate::components::events::{ComponentEvents, EventResult, ScrollDirection};

use super::render::{ACTION_LABEL_WIDTH, ACTION_STEP};
use super::state::Table;

/// The action requested on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    View,
    Edit,
    Delete,
}

impl ActionKind {
    /// Wire name of the action, as the embedding pages expect it.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::View => "view",
            ActionKind::Edit => "edit",
            ActionKind::Delete => "delete",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action buttons in render order.
const ACTION_KINDS: [ActionKind; 3] = [ActionKind::View, ActionKind::Edit, ActionKind::Delete];

/// Event fired when a row action button is activated.
///
/// Serializes with the wire names the embedding pages expect
/// (`{"kind": "delete", "payload": ...}`).
#[derive(Debug, Clone, Serialize)]
pub struct ActionEvent {
    /// Which action was requested.
    pub kind: ActionKind,
    /// The opaque payload of the Action cell, passed through untouched.
    pub payload: Value,
}

/// Event fired when the user activates a status cell's toggle.
#[derive(Debug, Clone, Serialize)]
pub struct StatusToggleEvent {
    /// Entity id carried by the status cell.
    pub id: i64,
    /// The status at the moment of the toggle (not the requested one).
    pub active: bool,
}

/// Event fired when the visible page changes.
#[derive(Debug, Clone, Serialize)]
pub struct PageChangeEvent {
    /// The new current page, 1-based.
    pub page: usize,
}

/// Pending events produced by one input interaction.
///
/// At most one event of each kind can come out of a single interaction;
/// a click is one toggle or one action, never several.
#[derive(Debug, Clone, Default)]
pub struct TableEvents {
    pub action: Option<ActionEvent>,
    pub status_toggle: Option<StatusToggleEvent>,
    pub page_change: Option<PageChangeEvent>,
}

impl TableEvents {
    /// Check whether the interaction produced any event.
    pub fn is_empty(&self) -> bool {
        self.action.is_none() && self.status_toggle.is_none() && self.page_change.is_none()
    }

    /// Flatten into queueable events.
    pub fn into_events(self) -> Vec<TableEvent> {
        let mut events = Vec::new();
        if let Some(event) = self.action {
            events.push(TableEvent::Action(event));
        }
        if let Some(event) = self.status_toggle {
            events.push(TableEvent::StatusToggle(event));
        }
        if let Some(event) = self.page_change {
            events.push(TableEvent::PageChange(event));
        }
        events
    }
}

/// A table event routed through the pending queue.
#[derive(Debug, Clone)]
pub enum TableEvent {
    Action(ActionEvent),
    StatusToggle(StatusToggleEvent),
    PageChange(PageChangeEvent),
}

impl Table {
    /// Handle a click at the given position, relative to the area of the
    /// last render. Returns the events that should be dispatched.
    ///
    /// Clicks on the pager controls flip pages; a click on a Status cell
    /// emits exactly one toggle; a click on one of an Action cell's
    /// buttons emits exactly one action. Everything else is inert, and no
    /// position is ever an error.
    pub fn handle_click(&self, x: u16, y: u16) -> TableEvents {
        let mut events = TableEvents::default();
        let Some(layout) = self.layout() else {
            return events;
        };

        if y == layout.footer_y {
            let before = self.current_page();
            if in_range(x, layout.prev_control) {
                self.previous_page();
            } else if in_range(x, layout.next_control) {
                self.next_page();
            }
            if self.current_page() != before {
                events.page_change = Some(PageChangeEvent {
                    page: self.current_page(),
                });
            }
            return events;
        }

        // The loading flag never affects pagination, but while it is up
        // there are no cells on screen to interact with.
        if self.is_loading() {
            return events;
        }
        if y < layout.body_top || y >= layout.body_top + layout.body_rows {
            return events;
        }
        let page_row = (y - layout.body_top) as usize;
        let Some(column) = column_from_x(&layout.columns, x) else {
            return events;
        };
        let Some(cell) = self.cell_at(page_row, column) else {
            return events;
        };

        match cell {
            Cell::Status { id, active } => {
                debug!("table {}: status toggle id={} active={}", self.id(), id, active);
                events.status_toggle = Some(StatusToggleEvent { id, active });
            }
            Cell::Action { payload } => {
                let (start, width) = layout.columns[column];
                if let Some(kind) = action_from_x(x - start, width) {
                    debug!("table {}: action {}", self.id(), kind);
                    events.action = Some(ActionEvent { kind, payload });
                }
            }
            _ => {}
        }
        events
    }

    /// Handle a key press. Left/PageUp and Right/PageDown flip pages,
    /// `s` steps the page size.
    pub fn handle_key(&self, key: &KeyEvent) -> TableEvents {
        let before_page = self.current_page();
        let before_size = self.rows_per_page();
        match key.code {
            KeyCode::Left | KeyCode::PageUp => {
                self.previous_page();
            }
            KeyCode::Right | KeyCode::PageDown => {
                self.next_page();
            }
            KeyCode::Char('s') => {
                self.cycle_rows_per_page();
            }
            _ => return TableEvents::default(),
        }

        let mut events = TableEvents::default();
        if self.current_page() != before_page || self.rows_per_page() != before_size {
            events.page_change = Some(PageChangeEvent {
                page: self.current_page(),
            });
        }
        events
    }

    /// Handle a mouse wheel scroll as a page flip.
    pub fn handle_scroll(&self, direction: ScrollDirection) -> TableEvents {
        let changed = match direction {
            ScrollDirection::Up => self.previous_page(),
            ScrollDirection::Down => self.next_page(),
        };

        let mut events = TableEvents::default();
        if changed {
            events.page_change = Some(PageChangeEvent {
                page: self.current_page(),
            });
        }
        events
    }

    fn queue(&self, events: TableEvents) {
        for event in events.into_events() {
            self.push_event(event);
        }
    }
}

impl ComponentEvents for Table {
    fn on_click(&self, x: u16, y: u16) -> EventResult {
        let events = self.handle_click(x, y);
        if events.is_empty() {
            return EventResult::Ignored;
        }
        self.queue(events);
        EventResult::Consumed
    }

    fn on_scroll(&self, direction: ScrollDirection) -> EventResult {
        self.queue(self.handle_scroll(direction));
        EventResult::Consumed
    }

    fn on_key(&self, key: &KeyEvent) -> EventResult {
        if !matches!(
            key.code,
            KeyCode::Left
                | KeyCode::Right
                | KeyCode::PageUp
                | KeyCode::PageDown
                | KeyCode::Char('s')
        ) {
            return EventResult::Ignored;
        }
        self.queue(self.handle_key(key));
        EventResult::Consumed
    }
}

fn in_range(x: u16, (start, width): (u16, u16)) -> bool {
    x >= start && x < start + width
}

/// Calculate which column an x position falls into.
fn column_from_x(columns: &[(u16, u16)], x: u16) -> Option<usize> {
    columns
        .iter()
        .position(|&(start, width)| x >= start && x < start + width)
}

/// Map an x offset within an Action cell to a button, mirroring the
/// render layout exactly: buttons that were clipped by a narrow column do
/// not hit.
fn action_from_x(rel: u16, column_width: u16) -> Option<ActionKind> {
    let index = (rel / ACTION_STEP) as usize;
    if index >= ACTION_KINDS.len() || rel % ACTION_STEP >= ACTION_LABEL_WIDTH {
        return None;
    }
    let button_end = (index as u16) * ACTION_STEP + ACTION_LABEL_WIDTH;
    if button_end > column_width.saturating_sub(1) {
        return None;
    }
    Some(ACTION_KINDS[index])
}
