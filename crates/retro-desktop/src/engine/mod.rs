//! Shell engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `icons`: icon record operations, drag handling, layout persistence
//! - `windows`: window lifecycle operations and fade effects
//!
//! The engine is constructed with its collaborators injected; there is no
//! process-wide instance. Everything it owns is mutated on the UI thread
//! only; background work hands results back through channels before any of
//! this state is touched.

mod icons;
mod windows;

use retro_apps::IconResolver;

use crate::grid::GridGeometry;
use crate::icons::{reflow, IconStore};
use crate::input::DragController;
use crate::math::Size;
use crate::orientation::{DeviceClass, Orientation};
use crate::theme::ThemeRegistry;
use crate::transition::Fade;
use crate::window::{WindowId, WindowStack};

/// Shell engine coordinating the icon store and the window stack
///
/// Main entry point for the surrounding UI glue. Owns:
/// - the icon record store (single source of truth for desktop items)
/// - the window stack (open floating windows, back to front)
/// - the grid geometry for the current container and orientation
/// - the theme registry and pending window fades
/// - the icon drag state machine
pub struct ShellEngine {
    pub(crate) store: IconStore,
    pub(crate) windows: WindowStack,
    pub(crate) themes: ThemeRegistry,
    pub(crate) drag: DragController,
    pub(crate) resolver: Option<Box<dyn IconResolver>>,
    pub(crate) fades: Vec<(WindowId, Fade)>,
    device: DeviceClass,
    container: Size,
    orientation: Orientation,
    geometry: GridGeometry,
}

impl ShellEngine {
    /// Create an engine for a device class
    pub fn new(device: DeviceClass) -> Self {
        let container = Size::new(1080.0, 1920.0);
        let geometry = GridGeometry::for_container(device.metrics(), container);
        Self {
            store: IconStore::new(),
            windows: WindowStack::new(),
            themes: ThemeRegistry::new(),
            drag: DragController::new(),
            resolver: None,
            fades: Vec::new(),
            device,
            container,
            orientation: Orientation::Portrait,
            geometry,
        }
    }

    /// Attach the icon resolution collaborator
    pub fn with_resolver(mut self, resolver: Box<dyn IconResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Initialize with the host container dimensions
    pub fn init(&mut self, width: f32, height: f32) {
        self.resize(width, height);
    }

    /// Handle a container size change (rotation, fold, resize)
    pub fn resize(&mut self, width: f32, height: f32) {
        self.container = Size::new(width.max(1.0), height.max(1.0));
        self.refresh_layout();
    }

    /// Handle the host's orientation/fold-state signal
    ///
    /// Re-runs migration and reflow on each distinct transition; repeated
    /// signals for the current orientation are ignored.
    pub fn set_orientation(&mut self, is_landscape: bool) {
        let next = Orientation::from_landscape_flag(is_landscape);
        if next == self.orientation {
            return;
        }
        log::debug!("orientation change: {:?} -> {:?}", self.orientation, next);
        self.orientation = next;
        self.refresh_layout();
    }

    /// Rebuild the grid geometry and bring every icon to a valid slot
    pub(crate) fn refresh_layout(&mut self) {
        self.geometry = GridGeometry::for_container(self.device.metrics(), self.container);
        reflow::run(&mut self.store, &self.geometry, self.orientation);
    }

    /// The icon record store
    #[inline]
    pub fn store(&self) -> &IconStore {
        &self.store
    }

    /// The window stack
    #[inline]
    pub fn windows(&self) -> &WindowStack {
        &self.windows
    }

    /// The theme registry
    #[inline]
    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    /// The theme registry, mutably (subscribe observers, switch themes)
    #[inline]
    pub fn themes_mut(&mut self) -> &mut ThemeRegistry {
        &mut self.themes
    }

    /// Current grid geometry
    #[inline]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Current orientation
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Current container size
    #[inline]
    pub fn container(&self) -> Size {
        self.container
    }
}
