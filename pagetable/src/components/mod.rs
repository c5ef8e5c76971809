//! UI components with self-managed state.
//!
//! Each component lives in its own module with:
//! - `state.rs` - the component state type
//! - `events.rs` - input handling
//! - `render.rs` - rendering logic

pub mod events;
pub mod table;

pub use events::{ComponentEvents, EventResult, ScrollDirection};
pub use table::{Table, TableId};
