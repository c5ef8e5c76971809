//! Component event handling types and traits.
//!
//! Components handle their own input and report whether they consumed it,
//! keeping the embedding event loop a thin dispatcher. Typed events
//! produced by a handler are queued on the component and drained by the
//! application after each interaction.

use crossterm::event::KeyEvent;

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Direction of a mouse wheel scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Trait for components that can handle events.
///
/// All methods default to `EventResult::Ignored`, so components only
/// implement the events they care about. Coordinates are relative to the
/// area the component was last rendered in.
pub trait ComponentEvents {
    /// Handle a click at the given position.
    fn on_click(&self, _x: u16, _y: u16) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a mouse wheel scroll.
    fn on_scroll(&self, _direction: ScrollDirection) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a key event while this component is focused.
    fn on_key(&self, _key: &KeyEvent) -> EventResult {
        EventResult::Ignored
    }
}
