//! Core geometry types
//!
//! Plain value types shared by the grid engine, the drag handler, and the
//! window stack. No rendering concerns live here.

mod vec2;
mod size;
mod rect;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;
