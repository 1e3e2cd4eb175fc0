//! Icon operations
//!
//! Record creation, folder containment, drag handling, and layout
//! persistence, all delegating to the store and the grid modules.

use retro_apps::IconHandle;

use crate::error::ShellError;
use crate::grid::{first_free_slot, nearest_free_slot};
use crate::icons::{IconKind, IconRecord};
use crate::input::{DragState, DropTarget};
use crate::math::{Rect, Vec2};
use crate::persistence;
use super::ShellEngine;

impl ShellEngine {
    /// Create an app icon at the first available slot
    pub fn add_icon(&mut self, package: &str, display_name: &str) -> Result<String, ShellError> {
        let mut record = IconRecord::app(package, display_name);
        record.icon = self.resolve_icon(package);
        self.place_new_record(&mut record);

        let id = record.id.clone();
        self.store.insert(record)?;
        Ok(id)
    }

    /// Create an empty folder at the first available slot
    pub fn create_folder(&mut self, display_name: &str) -> Result<String, ShellError> {
        let mut record = IconRecord::folder(display_name);
        let package = record.package_name.clone();
        record.icon = self.resolve_icon(&package);
        self.place_new_record(&mut record);

        let id = record.id.clone();
        self.store.insert(record)?;
        Ok(id)
    }

    /// Create the recycle bin if the store has none, returning its id
    pub fn ensure_recycle_bin(&mut self) -> String {
        if let Some(existing) = self.store.recycle_bin() {
            return existing.id.clone();
        }
        let id = self.store.ensure_recycle_bin();
        let icon = self.resolve_icon(crate::icons::RECYCLE_BIN_PACKAGE);
        if let Some(record) = self.store.get_mut(&id) {
            record.icon = icon;
        }
        self.refresh_layout();
        id
    }

    /// Delete a record; folders take their contents with them
    ///
    /// Returns how many records were removed. Also closes the matching
    /// singleton window of any removed item.
    pub fn delete_icon(&mut self, id: &str) -> usize {
        let removed = self.store.remove(id);
        for record in &removed {
            let identifier = record.window_identifier();
            let window_id = self
                .windows
                .get_by_identifier(&identifier)
                .map(|w| w.id);
            if let Some(window_id) = window_id {
                self.windows.remove(window_id);
            }
        }
        removed.len()
    }

    /// Move a record into a folder (`Some`) or back onto the desktop (`None`)
    pub fn move_icon_to_folder(
        &mut self,
        id: &str,
        folder_id: Option<&str>,
    ) -> Result<(), ShellError> {
        self.store.move_to_folder(id, folder_id)?;
        // A record returning to the desktop needs a slot for the active
        // orientation; reflow hands out the lowest free one.
        self.refresh_layout();
        Ok(())
    }

    /// Rename a record; absent ids are a no-op returning `false`
    pub fn rename_icon(&mut self, id: &str, display_name: &str) -> bool {
        self.store.rename(id, display_name)
    }

    /// Snap a record to the nearest free slot around a drop position
    ///
    /// Returns the assigned slot, or `None` when the id is absent or the
    /// record lives inside a folder.
    pub fn snap_to_nearest_slot(&mut self, id: &str, drop_position: Vec2) -> Option<u32> {
        let visible = self
            .store
            .get(id)
            .map(|r| r.is_desktop_visible())
            .unwrap_or(false);
        if !visible {
            return None;
        }

        let target = self.geometry().position_to_index(drop_position);
        let occupied = self.store.occupied_slots(self.orientation(), Some(id));
        let slot = nearest_free_slot(self.geometry(), target, &occupied);

        let position = self.geometry().index_to_position(slot);
        let orientation = self.orientation();
        if let Some(record) = self.store.get_mut(id) {
            record.set_slot(orientation, Some(slot));
            record.position = position;
        }
        Some(slot)
    }

    /// Topmost desktop icon whose footprint contains a point
    pub fn icon_at(&self, position: Vec2) -> Option<&IconRecord> {
        let icon_size = self.geometry().metrics().icon;
        self.store
            .desktop_records()
            .filter(|r| Rect::from_pos_size(r.position, icon_size).contains(position))
            .last()
    }

    /// Start dragging a desktop icon
    pub fn begin_icon_drag(&mut self, id: &str, pointer: Vec2) -> bool {
        let origin = match self.store.get(id) {
            Some(record) if record.is_desktop_visible() => record.position,
            _ => return false,
        };
        self.drag.start_icon_move(id.to_string(), pointer - origin);
        true
    }

    /// Update an in-progress drag with a new pointer position
    pub fn drag_icon_to(&mut self, pointer: Vec2) {
        let (icon_id, grab_offset) = match self.drag.state() {
            Some(DragState::MoveIcon {
                icon_id,
                grab_offset,
                ..
            }) => (icon_id.clone(), *grab_offset),
            None => return,
        };

        let target = match self.folder_at(pointer, &icon_id) {
            Some(folder_id) => DropTarget::Folder(folder_id),
            None => {
                let origin = pointer - grab_offset;
                DropTarget::Slot(self.geometry().position_to_index(origin))
            }
        };
        self.drag.set_target(Some(target));

        if let Some(record) = self.store.get_mut(&icon_id) {
            record.position = pointer - grab_offset;
        }
    }

    /// Finish the drag, committing its pending outcome
    pub fn end_icon_drag(&mut self) -> Result<(), ShellError> {
        let state = match self.drag.finish() {
            Some(state) => state,
            None => return Ok(()),
        };
        let DragState::MoveIcon {
            icon_id, target, ..
        } = state;

        match target {
            Some(DropTarget::Folder(folder_id)) => {
                self.move_icon_to_folder(&icon_id, Some(&folder_id))
            }
            Some(DropTarget::Slot(slot)) => {
                let drop_position = self.geometry().index_to_position(slot);
                self.snap_to_nearest_slot(&icon_id, drop_position);
                Ok(())
            }
            None => {
                // Pointer never moved: settle back onto the current slot.
                let position = self.store.get(&icon_id).map(|r| r.position);
                if let Some(position) = position {
                    self.snap_to_nearest_slot(&icon_id, position);
                }
                Ok(())
            }
        }
    }

    /// Serialize the store to the persisted layout form
    pub fn save_layout(&self) -> Result<String, ShellError> {
        persistence::encode_store(&self.store)
    }

    /// Replace the store from persisted layout JSON and reflow
    pub fn load_layout(&mut self, json: &str) -> Result<(), ShellError> {
        let mut store = persistence::decode_store(json)?;

        // Re-resolve icons for everything that came back.
        let packages: Vec<(String, String)> = store
            .records()
            .iter()
            .map(|r| (r.id.clone(), r.package_name.clone()))
            .collect();
        for (id, package) in packages {
            let icon = self.resolve_icon(&package);
            if let Some(record) = store.get_mut(&id) {
                record.icon = icon;
            }
        }

        self.store = store;
        self.refresh_layout();
        Ok(())
    }

    /// Resolve an icon, substituting the theme placeholder on failure
    pub(crate) fn resolve_icon(&mut self, package: &str) -> Option<IconHandle> {
        let resolver = self.resolver.as_mut()?;
        match resolver.resolve(package) {
            Some(handle) => Some(handle),
            None => {
                let placeholder = self.themes.theme().placeholder_icon.clone();
                log::warn!("no icon for {}, substituting {}", package, placeholder);
                resolver.resolve(&placeholder)
            }
        }
    }

    /// New records take the first available slot in the active orientation
    fn place_new_record(&mut self, record: &mut IconRecord) {
        let occupied = self.store.occupied_slots(self.orientation(), None);
        let slot = first_free_slot(&occupied);
        record.set_slot(self.orientation(), Some(slot));
        record.position = self.geometry().index_to_position(slot);
    }

    /// Folder (or recycle bin) icon under the pointer, excluding the dragged one
    fn folder_at(&self, pointer: Vec2, dragged_id: &str) -> Option<String> {
        let icon_size = self.geometry().metrics().icon;
        self.store
            .desktop_records()
            .filter(|r| r.id != dragged_id && r.kind == IconKind::Folder)
            .find(|r| Rect::from_pos_size(r.position, icon_size).contains(pointer))
            .map(|r| r.id.clone())
    }
}
