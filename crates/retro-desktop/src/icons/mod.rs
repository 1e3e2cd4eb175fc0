//! Icon records and the desktop icon store
//!
//! The store is the single source of truth for every desktop-visible or
//! folder-contained item. Views hold only transient references for rendering
//! and re-fetch by id after structural changes.

mod record;
mod store;
pub mod reflow;

pub use record::{IconKind, IconRecord, RECYCLE_BIN_PACKAGE};
pub use store::IconStore;
