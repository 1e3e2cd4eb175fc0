//! Floating window stack
//!
//! Provides window lifecycle, focus management, and identifier-based reuse.

#[allow(clippy::module_inception)]
mod window;
mod config;
mod stack;

pub use config::WindowConfig;
pub use stack::WindowStack;
pub use window::{NullContent, WindowContent, WindowHandle};

/// Unique window identifier
pub type WindowId = u64;
