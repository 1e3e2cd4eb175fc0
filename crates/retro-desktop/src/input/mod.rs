//! Input state for icon drag operations
//!
//! Provides the typed drag state machine driven by the engine.

mod drag;

pub use drag::{DragController, DragState, DropTarget};
