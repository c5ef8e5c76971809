//! Table component state and pagination.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;

use crate::cell::{Cell, Row};

use super::events::TableEvent;

/// Page-size steps offered by the pager.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Unique identifier for a Table component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Geometry recorded by the renderer for mouse hit testing.
///
/// All coordinates are relative to the area the table was last rendered
/// in, matching the coordinates handed to the click handlers.
#[derive(Debug, Clone, Default)]
pub(super) struct TableLayout {
    /// Column x offset and width, one entry per header.
    pub columns: Vec<(u16, u16)>,
    /// y of the first data row.
    pub body_top: u16,
    /// Number of data lines actually rendered (0 while loading).
    pub body_rows: u16,
    /// y of the footer line.
    pub footer_y: u16,
    /// x range of the previous-page control.
    pub prev_control: (u16, u16),
    /// x range of the next-page control.
    pub next_control: (u16, u16),
}

/// Internal state for the Table component.
#[derive(Debug, Default)]
pub(super) struct TableInner {
    /// Column header labels.
    pub headers: Vec<String>,
    /// The row grid, replaced wholesale by the caller.
    pub rows: Vec<Row>,
    /// Rows shown per page.
    pub rows_per_page: usize,
    /// Current page, 1-based.
    pub current_page: usize,
    /// Render-only flag; has no effect on pagination.
    pub loading: bool,
    /// Events queued for the embedding application.
    pub pending: Vec<TableEvent>,
    /// Hit-test geometry (set by the renderer).
    pub layout: Option<TableLayout>,
}

impl TableInner {
    /// `max(1, ceil(rows / rows_per_page))`. An empty table still has one
    /// (empty) page.
    pub fn total_pages(&self) -> usize {
        self.rows.len().div_ceil(self.rows_per_page).max(1)
    }

    /// Restore `1 <= current_page <= total_pages`. Runs inside every
    /// mutation, so the invariant never waits for the next read.
    pub fn clamp_page(&mut self) {
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }
}

/// A paginated table over heterogeneous cells.
///
/// `Table` is a cheap-to-clone handle; clones share the same state, so the
/// event loop, renderer and application handlers can all hold one.
#[derive(Debug)]
pub struct Table {
    /// Unique identifier.
    id: TableId,
    /// Internal state.
    inner: Arc<RwLock<TableInner>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl Clone for Table {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner {
                rows_per_page: ROWS_PER_PAGE_OPTIONS[0],
                current_page: 1,
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a table with the given column headers.
    pub fn with_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let table = Self::new();
        table.write().headers = headers.into_iter().map(Into::into).collect();
        table
    }

    fn read(&self) -> RwLockReadGuard<'_, TableInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, TableInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the unique ID for this table.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the unique ID as a string (for node binding).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// Replace the column headers.
    pub fn set_headers<I, S>(&self, headers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.write().headers = headers.into_iter().map(Into::into).collect();
        self.mark_dirty();
    }

    /// Get a copy of the column headers.
    pub fn headers(&self) -> Vec<String> {
        self.read().headers.clone()
    }

    /// Replace the row grid.
    ///
    /// The page index is re-clamped immediately: shrinking the data while
    /// on a late page moves to the last page that still exists.
    pub fn set_rows(&self, rows: Vec<Row>) {
        let mut guard = self.write();
        guard.rows = rows;
        guard.clamp_page();
        debug!(
            "table {}: rows replaced, {} rows over {} pages",
            self.id,
            guard.rows.len(),
            guard.total_pages()
        );
        drop(guard);
        self.mark_dirty();
    }

    /// Total number of rows across all pages.
    pub fn rows_len(&self) -> usize {
        self.read().rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.read().rows.is_empty()
    }

    /// Set the render-only loading flag.
    pub fn set_loading(&self, loading: bool) {
        self.write().loading = loading;
        self.mark_dirty();
    }

    /// Check the loading flag.
    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Current page, 1-based.
    pub fn current_page(&self) -> usize {
        self.read().current_page
    }

    /// Current page size.
    pub fn rows_per_page(&self) -> usize {
        self.read().rows_per_page
    }

    /// Number of pages for the current rows and page size.
    pub fn total_pages(&self) -> usize {
        self.read().total_pages()
    }

    /// Set the page size. Zero is ignored; the page index is re-clamped
    /// but otherwise kept where it was.
    pub fn set_rows_per_page(&self, n: usize) {
        if n == 0 {
            return;
        }
        let mut guard = self.write();
        guard.rows_per_page = n;
        guard.clamp_page();
        drop(guard);
        self.mark_dirty();
    }

    /// Step the page size through [`ROWS_PER_PAGE_OPTIONS`], wrapping at
    /// the end. A size that is not one of the options restarts the cycle.
    pub fn cycle_rows_per_page(&self) {
        let current = self.rows_per_page();
        let next = ROWS_PER_PAGE_OPTIONS
            .iter()
            .position(|&n| n == current)
            .map(|i| ROWS_PER_PAGE_OPTIONS[(i + 1) % ROWS_PER_PAGE_OPTIONS.len()])
            .unwrap_or(ROWS_PER_PAGE_OPTIONS[0]);
        self.set_rows_per_page(next);
    }

    /// Advance one page. No-op on the last page; returns whether the page
    /// changed.
    pub fn next_page(&self) -> bool {
        let mut guard = self.write();
        if guard.current_page >= guard.total_pages() {
            return false;
        }
        guard.current_page += 1;
        debug!("table {}: page -> {}", self.id, guard.current_page);
        drop(guard);
        self.mark_dirty();
        true
    }

    /// Go back one page. No-op on the first page; returns whether the page
    /// changed.
    pub fn previous_page(&self) -> bool {
        let mut guard = self.write();
        if guard.current_page <= 1 {
            return false;
        }
        guard.current_page -= 1;
        debug!("table {}: page -> {}", self.id, guard.current_page);
        drop(guard);
        self.mark_dirty();
        true
    }

    /// The rows of the current page.
    ///
    /// Recomputed from the latest state on every call; nothing is cached,
    /// so a grid replaced since the last render is reflected immediately.
    /// Reads clamp defensively as well, so a stale out-of-range page index
    /// yields an empty page rather than a panic.
    pub fn visible_page(&self) -> Vec<Row> {
        let guard = self.read();
        let page = guard.current_page.clamp(1, guard.total_pages());
        let start = (page - 1) * guard.rows_per_page;
        if start >= guard.rows.len() {
            return Vec::new();
        }
        let end = (start + guard.rows_per_page).min(guard.rows.len());
        guard.rows[start..end].to_vec()
    }

    /// Get the cell at the given position of the current page.
    pub fn cell_at(&self, page_row: usize, column: usize) -> Option<Cell> {
        self.visible_page().get(page_row)?.get(column).cloned()
    }

    // -------------------------------------------------------------------------
    // Events and render plumbing
    // -------------------------------------------------------------------------

    /// Queue an event for the embedding application.
    pub(super) fn push_event(&self, event: TableEvent) {
        self.write().pending.push(event);
    }

    /// Drain all pending events.
    ///
    /// Returns the events and clears the queue. Called by the embedding
    /// application after input handling.
    pub fn drain_events(&self) -> Vec<TableEvent> {
        std::mem::take(&mut self.write().pending)
    }

    /// Record hit-test geometry (called by the renderer).
    pub(super) fn set_layout(&self, layout: TableLayout) {
        self.write().layout = Some(layout);
    }

    /// The geometry of the last render, if any.
    pub(super) fn layout(&self) -> Option<TableLayout> {
        self.read().layout.clone()
    }

    /// Check if the component state has changed and needs re-render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag after rendering.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_rows_per_page_wraps() {
        let table = Table::new();
        assert_eq!(table.rows_per_page(), 5);
        table.cycle_rows_per_page();
        assert_eq!(table.rows_per_page(), 10);
        table.cycle_rows_per_page();
        table.cycle_rows_per_page();
        assert_eq!(table.rows_per_page(), 50);
        table.cycle_rows_per_page();
        assert_eq!(table.rows_per_page(), 5);
    }

    #[test]
    fn test_cycle_rows_per_page_restarts_from_custom_size() {
        let table = Table::new();
        table.set_rows_per_page(7);
        table.cycle_rows_per_page();
        assert_eq!(table.rows_per_page(), 5);
    }
}
