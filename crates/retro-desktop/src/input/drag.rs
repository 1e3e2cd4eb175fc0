//! Drag state for icon operations
//!
//! The pending outcome of a drag is a typed value carried inside the state,
//! not a mutable capture in a callback: the engine updates [`DropTarget`] on
//! every pointer move and consumes it exactly once when the drag ends.

use crate::math::Vec2;

/// Where the dragged icon would land if released now
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Snap into the grid at this slot (or its nearest free neighbor)
    Slot(u32),
    /// Drop into this folder
    Folder(String),
}

/// Current drag operation state
#[derive(Clone, Debug, PartialEq)]
pub enum DragState {
    /// Moving a desktop icon
    MoveIcon {
        /// Record being moved
        icon_id: String,
        /// Offset from the icon origin to the grab point
        grab_offset: Vec2,
        /// Pending outcome, updated on every pointer move
        target: Option<DropTarget>,
    },
}

impl DragState {
    /// Get the dragged record's id
    pub fn icon_id(&self) -> &str {
        match self {
            DragState::MoveIcon { icon_id, .. } => icon_id,
        }
    }
}

/// Drag state machine
#[derive(Debug, Default)]
pub struct DragController {
    drag: Option<DragState>,
}

impl DragController {
    /// Create an idle controller
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current drag state
    #[inline]
    pub fn state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if a drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start moving an icon
    pub fn start_icon_move(&mut self, icon_id: String, grab_offset: Vec2) {
        self.drag = Some(DragState::MoveIcon {
            icon_id,
            grab_offset,
            target: None,
        });
    }

    /// Update the pending drop target
    pub fn set_target(&mut self, new_target: Option<DropTarget>) {
        if let Some(DragState::MoveIcon { target, .. }) = &mut self.drag {
            *target = new_target;
        }
    }

    /// Consume the drag, returning its final state
    pub fn finish(&mut self) -> Option<DragState> {
        self.drag.take()
    }

    /// Abandon the drag without an outcome
    pub fn cancel(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_lifecycle() {
        let mut controller = DragController::new();
        assert!(!controller.is_dragging());

        controller.start_icon_move("icon-1".to_string(), Vec2::new(8.0, 12.0));
        assert!(controller.is_dragging());
        assert_eq!(controller.state().unwrap().icon_id(), "icon-1");

        let state = controller.finish().unwrap();
        assert_eq!(state.icon_id(), "icon-1");
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_target_updates_replace_previous() {
        let mut controller = DragController::new();
        controller.start_icon_move("icon-1".to_string(), Vec2::ZERO);

        controller.set_target(Some(DropTarget::Slot(4)));
        controller.set_target(Some(DropTarget::Folder("folder-1".to_string())));

        match controller.finish().unwrap() {
            DragState::MoveIcon { target, .. } => {
                assert_eq!(target, Some(DropTarget::Folder("folder-1".to_string())));
            }
        }
    }

    #[test]
    fn test_cancel_discards_state() {
        let mut controller = DragController::new();
        controller.start_icon_move("icon-1".to_string(), Vec2::ZERO);
        controller.cancel();

        assert!(!controller.is_dragging());
        assert!(controller.finish().is_none());
    }

    #[test]
    fn test_set_target_while_idle_is_noop() {
        let mut controller = DragController::new();
        controller.set_target(Some(DropTarget::Slot(1)));
        assert!(!controller.is_dragging());
    }
}
