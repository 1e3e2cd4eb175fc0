//! Desktop icon grid
//!
//! Provides pure grid geometry (index/cell/pixel conversions) and
//! collision-free slot search over an occupancy set.

mod geometry;
mod search;

pub use geometry::{GridGeometry, GridMetrics};
pub use search::{first_free_slot, nearest_free_slot};

/// Linear grid slot index, row-major from the top-left cell
pub type SlotIndex = u32;
