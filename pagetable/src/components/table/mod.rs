//! Paginated table component with polymorphic cells and action dispatch.
//!
//! The Table component provides:
//! - Client-side pagination over caller-owned rows (1-based page index)
//! - Per-variant cell rendering (text, number, status, actions, image)
//! - Typed events for row actions, status toggles and page changes
//! - Mouse hit testing from geometry recorded at render time
//!
//! The component never owns business data: the caller replaces the row
//! grid wholesale and the visible page is recomputed on every read, so the
//! display is always a deterministic function of the latest rows, page
//! index and page size. Pagination operations cannot fail; out-of-range
//! requests clamp or no-op.
//!
//! # Example
//!
//! ```ignore
//! use pagetable::prelude::*;
//!
//! let table = Table::with_headers(["Name", "Price", "Status", "Actions"]);
//! table.set_rows(rows_from_json(&envelope["data"])?);
//!
//! // In the event loop:
//! let result = table.on_click(x, y);
//! for event in table.drain_events() {
//!     match event {
//!         TableEvent::Action(action) => open_modal(action.kind, action.payload),
//!         TableEvent::StatusToggle(toggle) => flip_status(toggle.id, toggle.active),
//!         TableEvent::PageChange(_) => {}
//!     }
//! }
//! ```

pub mod events;
pub mod render;
mod state;

pub use events::{
    ActionEvent, ActionKind, PageChangeEvent, StatusToggleEvent, TableEvent, TableEvents,
};
pub use state::{Table, TableId, ROWS_PER_PAGE_OPTIONS};
