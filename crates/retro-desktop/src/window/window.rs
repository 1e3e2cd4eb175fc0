//! Window handle and content lifecycle hooks

use std::fmt;

use crate::error::DetachedError;
use super::WindowId;

/// Lifecycle hooks implemented by a window's content collaborator
///
/// The stack invokes these at the matching transitions; failures inside a
/// hook are the collaborator's responsibility and are never retried. The
/// default implementations make a contentless window valid.
pub trait WindowContent {
    /// Called when the window is attached and shown
    fn on_show(&mut self) {}

    /// Called before the front window is removed by a close gesture
    fn on_close(&mut self) {}

    /// Called when the window is minimized
    fn on_minimize(&mut self) {}

    /// Called when a minimized window is restored
    fn on_restore(&mut self) {}

    /// Called before detaching, so external taskbar bookkeeping can let go
    fn on_unregister(&mut self) {}

    /// Called on a bring-to-front promotion instead of a full reattach
    fn raise(&mut self) {}

    /// Detach the view from the host container
    ///
    /// Returning [`DetachedError`] means the view was already gone; removal
    /// paths treat that as a recoverable terminal state.
    fn detach(&mut self) -> Result<(), DetachedError> {
        Ok(())
    }
}

/// Content implementation with no behavior
#[derive(Clone, Copy, Debug, Default)]
pub struct NullContent;

impl WindowContent for NullContent {}

/// One floating window tracked by the stack
///
/// Z-order is implicit in stack position; the last tracked window is
/// front-most.
pub struct WindowHandle {
    pub id: WindowId,
    /// Optional logical key enabling singleton reuse
    pub identifier: Option<String>,
    pub title: String,
    pub focused: bool,
    pub minimized: bool,
    pub(crate) content: Box<dyn WindowContent>,
}

impl WindowHandle {
    /// Mutable access to the content hooks
    pub fn content_mut(&mut self) -> &mut dyn WindowContent {
        self.content.as_mut()
    }
}

impl fmt::Debug for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowHandle")
            .field("id", &self.id)
            .field("identifier", &self.identifier)
            .field("title", &self.title)
            .field("focused", &self.focused)
            .field("minimized", &self.minimized)
            .finish()
    }
}
