//! Shared UI state for the embedding application.
//!
//! Modals need the page behind them to stop scrolling while they are up.
//! Letting each modal flip a shared flag on its own breaks as soon as two
//! are open at once: the first one to close unlocks the page under the
//! second. [`UiState`] owns that flag as a counter instead — the
//! background stays locked until every modal that opened has closed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use log::debug;

/// Application-wide UI state service.
///
/// Cheap to clone; clones share the same counters, so every modal holds
/// the same handle.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    modal_depth: Arc<AtomicUsize>,
}

impl UiState {
    /// Create a new service with no modals open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a modal opening.
    pub fn modal_opened(&self) {
        let depth = self.modal_depth.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("modal opened, depth {depth}");
    }

    /// Record a modal closing. Closing more modals than were opened is a
    /// no-op, never a panic.
    pub fn modal_closed(&self) {
        let result = self
            .modal_depth
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |depth| {
                depth.checked_sub(1)
            });
        if let Ok(depth) = result {
            debug!("modal closed, depth {}", depth.saturating_sub(1));
        }
    }

    /// Number of modals currently open.
    pub fn modal_depth(&self) -> usize {
        self.modal_depth.load(Ordering::SeqCst)
    }

    /// Whether background scrolling should be locked.
    pub fn background_locked(&self) -> bool {
        self.modal_depth() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_follows_modal_depth() {
        let ui = UiState::new();
        assert!(!ui.background_locked());

        ui.modal_opened();
        ui.modal_opened();
        assert!(ui.background_locked());

        ui.modal_closed();
        assert!(ui.background_locked(), "still locked with one modal open");

        ui.modal_closed();
        assert!(!ui.background_locked());
    }

    #[test]
    fn test_close_without_open_is_noop() {
        let ui = UiState::new();
        ui.modal_closed();
        assert_eq!(ui.modal_depth(), 0);
        assert!(!ui.background_locked());
    }

    #[test]
    fn test_clones_share_the_counter() {
        let ui = UiState::new();
        let other = ui.clone();
        ui.modal_opened();
        assert!(other.background_locked());
        other.modal_closed();
        assert!(!ui.background_locked());
    }
}
