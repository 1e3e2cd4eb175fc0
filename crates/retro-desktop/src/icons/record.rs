//! Icon record - one desktop-visible or folder-contained item

use retro_apps::IconHandle;
use uuid::Uuid;

use crate::math::Vec2;
use crate::orientation::Orientation;

/// Package id marking the recycle bin record
pub const RECYCLE_BIN_PACKAGE: &str = retro_apps::manifest::RECYCLE_BIN_PACKAGE;

/// Kind of a desktop item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    App,
    Folder,
    RecycleBin,
}

/// One desktop item
///
/// Identity lives in `id`, generated once and never re-derived from the name
/// or the package. The two slot fields are independent: a layout that fits in
/// portrait may not map sensibly in landscape, so each orientation keeps its
/// own assignment.
#[derive(Clone, Debug)]
pub struct IconRecord {
    /// Stable identity, survives renames and moves
    pub id: String,
    /// Launch target: a real app id, a synthetic `system.*` id, or a
    /// synthetic folder id
    pub package_name: String,
    pub kind: IconKind,
    pub display_name: String,
    /// Shared image reference; renderers clone it
    pub icon: Option<IconHandle>,
    /// `None` means on the desktop; `Some` names the containing folder
    pub parent_folder_id: Option<String>,
    /// Deprecated pixel position, kept only for one-time migration
    pub legacy_x: f32,
    pub legacy_y: f32,
    /// Grid slot when the device is in portrait
    pub portrait_slot: Option<u32>,
    /// Grid slot when the device is landscape-equivalent
    pub landscape_slot: Option<u32>,
    /// Live pixel position, derived from the active slot
    pub position: Vec2,
}

impl IconRecord {
    /// Create an app record with a fresh id
    pub fn app(package_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::with_id(
            Uuid::new_v4().to_string(),
            package_name.into(),
            IconKind::App,
            display_name.into(),
        )
    }

    /// Create a folder record; its package id is derived from the fresh id
    pub fn folder(display_name: impl Into<String>) -> Self {
        let id = Uuid::new_v4().to_string();
        let package_name = format!("folder:{}", id);
        Self::with_id(id, package_name, IconKind::Folder, display_name.into())
    }

    /// Create the recycle bin record
    pub fn recycle_bin() -> Self {
        Self::with_id(
            Uuid::new_v4().to_string(),
            RECYCLE_BIN_PACKAGE.to_string(),
            IconKind::RecycleBin,
            "Recycle Bin".to_string(),
        )
    }

    /// Create a record with an explicit id (deserialization path)
    pub fn with_id(
        id: String,
        package_name: String,
        kind: IconKind,
        display_name: String,
    ) -> Self {
        Self {
            id,
            package_name,
            kind,
            display_name,
            icon: None,
            parent_folder_id: None,
            legacy_x: 0.0,
            legacy_y: 0.0,
            portrait_slot: None,
            landscape_slot: None,
            position: Vec2::ZERO,
        }
    }

    /// Whether this record participates in desktop grid placement
    #[inline]
    pub fn is_desktop_visible(&self) -> bool {
        self.parent_folder_id.is_none()
    }

    /// Grid slot for an orientation
    #[inline]
    pub fn slot(&self, orientation: Orientation) -> Option<u32> {
        match orientation {
            Orientation::Portrait => self.portrait_slot,
            Orientation::Landscape => self.landscape_slot,
        }
    }

    /// Set the grid slot for an orientation
    #[inline]
    pub fn set_slot(&mut self, orientation: Orientation, slot: Option<u32>) {
        match orientation {
            Orientation::Portrait => self.portrait_slot = slot,
            Orientation::Landscape => self.landscape_slot = slot,
        }
    }

    /// Logical window identifier for opening this item's window
    ///
    /// Folders open as `folder:<id>` singletons; everything else keys on its
    /// package id.
    pub fn window_identifier(&self) -> String {
        match self.kind {
            IconKind::Folder => format!("folder:{}", self.id),
            _ => self.package_name.clone(),
        }
    }
}
