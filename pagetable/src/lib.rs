//! Terminal UI components for data-backed admin views.
//!
//! The centerpiece is the paginated [`Table`](components::table::Table)
//! component: it takes a header list and a grid of heterogeneous cells,
//! shows one fixed-size page at a time, and turns user input into typed
//! events (row actions, status toggles, page changes) for the embedding
//! application to dispatch. The component owns its page state but never the
//! data: rows are replaced wholesale by the caller and read back on demand.
//!
//! Components are self-managed: state lives behind a cheap-to-clone handle,
//! input handlers return the events they produced, and the renderer writes
//! the geometry needed for mouse hit testing back into the component.

pub mod cell;
pub mod components;
pub mod ui_state;

pub mod prelude {
    pub use crate::cell::{rows_from_json, Cell, CellError, Row};
    pub use crate::components::events::{ComponentEvents, EventResult, ScrollDirection};
    pub use crate::components::table::{
        ActionEvent, ActionKind, PageChangeEvent, StatusToggleEvent, Table, TableEvent,
        TableEvents, TableId,
    };
    pub use crate::ui_state::UiState;
}
