//! Desktop core for Retroshell
//!
//! This crate provides the home-screen shell's core state machinery:
//! - Desktop icon placement (grid indexing, orientation-aware migration,
//!   collision-free slot search, folder containment)
//! - Floating window stack (focus, z-order, lifecycle, identifier reuse)
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`)
//! - [`grid`]: Pure grid geometry and slot search
//! - [`icons`]: Icon records, the record store, and the reflow engine
//! - [`window`]: Window lifecycle and the ordered stack
//! - [`input`]: Icon drag state machine
//! - [`transition`]: Window fade effects
//! - [`persistence`]: Layout serialization for the key-value store
//! - [`theme`]: Theme state and change observers
//!
//! ## Example
//!
//! ```rust
//! use retro_desktop::{DeviceClass, ShellEngine, WindowConfig};
//!
//! let mut engine = ShellEngine::new(DeviceClass::Phone);
//! engine.init(1080.0, 1920.0);
//!
//! let mail = engine.add_icon("com.vendor.mail", "Mail").unwrap();
//! engine.show_window(
//!     WindowConfig::new("Mail").with_identifier("com.vendor.mail"),
//!     0.0,
//! );
//! assert!(engine.store().get(&mail).is_some());
//! ```
//!
//! ## Design Principles
//!
//! 1. **Single-threaded core**: all state is owned by the UI thread; nothing
//!    here locks or suspends
//! 2. **Injected collaborators**: icon resolution, window content hooks, and
//!    theme observers are passed in, never reached through globals
//! 3. **Stable identity**: records and windows are addressed by id; nothing
//!    relies on positional correspondence
//! 4. **Absorb, don't throw**: malformed data and absent targets are
//!    repaired or ignored where they occur

pub mod grid;
pub mod icons;
pub mod input;
pub mod math;
pub mod persistence;
pub mod theme;
pub mod transition;
pub mod window;

mod engine;
mod error;
mod orientation;

// Re-export core types for convenience
pub use engine::ShellEngine;
pub use error::{DetachedError, ShellError};
pub use grid::{first_free_slot, nearest_free_slot, GridGeometry, GridMetrics, SlotIndex};
pub use icons::{IconKind, IconRecord, IconStore, RECYCLE_BIN_PACKAGE};
pub use input::{DragController, DragState, DropTarget};
pub use math::{Rect, Size, Vec2};
pub use orientation::{DeviceClass, Orientation};
pub use persistence::{LayoutSnapshot, PersistedIcon};
pub use theme::{Theme, ThemeEvent, ThemeObserver, ThemeRegistry};
pub use transition::{Fade, FadeDirection, FADE_DURATION_MS};
pub use window::{NullContent, WindowConfig, WindowContent, WindowHandle, WindowId, WindowStack};

/// Shared icon image types come from the apps crate
pub use retro_apps::{IconHandle, IconImage, IconResolver};
