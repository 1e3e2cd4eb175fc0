//! Serialized icon layout
//!
//! The external shape is a JSON array of records carrying `name,
//! packageName, x, y, id, type, parentFolderId, portraitGridIndex,
//! landscapeGridIndex`. `x`/`y` are legacy pixel positions kept for
//! backward compatibility; writers still emit current grid-derived values so
//! older readers keep working. Newer writers wrap the array in a versioned
//! snapshot; readers accept both forms.
//!
//! Decoding never fails on a bad record, only on unparseable JSON at the
//! top level. Individual records are repaired with safe defaults: missing
//! ids are regenerated, unknown types fall back to `APP`, orphaned parents
//! and containment cycles are detached onto the desktop, and a second
//! recycle bin is demoted to a plain app.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ShellError;
use crate::icons::{IconKind, IconRecord, IconStore, RECYCLE_BIN_PACKAGE};

/// One record as it appears in the key-value store
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedIcon {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "packageName", default)]
    pub package_name: String,
    /// Legacy pixel position, re-emitted from the live position on save
    #[serde(default)]
    pub x: Option<f32>,
    #[serde(default)]
    pub y: Option<f32>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(rename = "parentFolderId", default)]
    pub parent_folder_id: Option<String>,
    #[serde(rename = "portraitGridIndex", default)]
    pub portrait_grid_index: Option<u32>,
    #[serde(rename = "landscapeGridIndex", default)]
    pub landscape_grid_index: Option<u32>,
}

impl From<&IconRecord> for PersistedIcon {
    fn from(record: &IconRecord) -> Self {
        Self {
            name: record.display_name.clone(),
            package_name: record.package_name.clone(),
            x: Some(record.position.x),
            y: Some(record.position.y),
            id: Some(record.id.clone()),
            kind: Some(kind_to_type(record.kind).to_string()),
            parent_folder_id: record.parent_folder_id.clone(),
            portrait_grid_index: record.portrait_slot,
            landscape_grid_index: record.landscape_slot,
        }
    }
}

/// Versioned layout wrapper
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    /// Version for migration support
    pub version: u32,
    /// Persisted icon records
    pub icons: Vec<PersistedIcon>,
}

impl LayoutSnapshot {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a snapshot at the current version
    pub fn new(icons: Vec<PersistedIcon>) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            icons,
        }
    }

    /// Check if the snapshot predates the current version
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate the snapshot to the current version
    pub fn migrate(&mut self) {
        self.version = Self::CURRENT_VERSION;
    }
}

/// Accepts both the versioned wrapper and the bare legacy array
#[derive(Deserialize)]
#[serde(untagged)]
enum LayoutDocument {
    Snapshot(LayoutSnapshot),
    Records(Vec<PersistedIcon>),
}

/// Serialize a store to the persisted layout form
pub fn encode_store(store: &IconStore) -> Result<String, ShellError> {
    let icons: Vec<PersistedIcon> = store.records().iter().map(PersistedIcon::from).collect();
    let snapshot = LayoutSnapshot::new(icons);
    serde_json::to_string(&snapshot).map_err(|e| ShellError::SerializeLayout(e.to_string()))
}

/// Rebuild a store from persisted layout JSON
///
/// Fails only when the document itself cannot be parsed; every per-record
/// problem is repaired in place.
pub fn decode_store(json: &str) -> Result<IconStore, ShellError> {
    let document: LayoutDocument =
        serde_json::from_str(json).map_err(|e| ShellError::MalformedLayout(e.to_string()))?;

    let raw = match document {
        LayoutDocument::Snapshot(mut snapshot) => {
            if snapshot.needs_migration() {
                snapshot.migrate();
            }
            snapshot.icons
        }
        LayoutDocument::Records(records) => records,
    };

    Ok(build_store(raw))
}

/// Turn raw records into a consistent store, repairing as needed
fn build_store(raw: Vec<PersistedIcon>) -> IconStore {
    let mut records: Vec<IconRecord> = Vec::with_capacity(raw.len());
    let mut seen_ids: std::collections::HashSet<String> = std::collections::HashSet::new();
    let mut have_recycle_bin = false;

    for persisted in raw {
        let mut record = revive(persisted);

        if !seen_ids.insert(record.id.clone()) {
            let fresh = Uuid::new_v4().to_string();
            log::warn!("duplicate icon id {}, regenerated as {}", record.id, fresh);
            record.id = fresh.clone();
            seen_ids.insert(fresh);
        }

        if record.kind == IconKind::RecycleBin {
            if have_recycle_bin {
                log::warn!("second recycle bin record {} demoted to app", record.id);
                record.kind = IconKind::App;
            } else {
                have_recycle_bin = true;
            }
        }

        records.push(record);
    }

    repair_parents(&mut records);

    let mut store = IconStore::new();
    store.records_mut().extend(records);
    store
}

/// Detach orphaned children and containment cycles onto the desktop
fn repair_parents(records: &mut [IconRecord]) {
    let folder_ids: std::collections::HashSet<String> = records
        .iter()
        .filter(|r| r.kind == IconKind::Folder)
        .map(|r| r.id.clone())
        .collect();

    for record in records.iter_mut() {
        if let Some(parent) = &record.parent_folder_id {
            if !folder_ids.contains(parent) {
                log::warn!("icon {} references missing folder {}", record.id, parent);
                record.parent_folder_id = None;
            }
        }
    }

    // Break parent cycles: walk each chain; any record whose chain revisits
    // a node gets detached.
    let parents: std::collections::HashMap<String, Option<String>> = records
        .iter()
        .map(|r| (r.id.clone(), r.parent_folder_id.clone()))
        .collect();

    let mut detach: std::collections::HashSet<String> = std::collections::HashSet::new();
    for record in records.iter() {
        let mut visited: std::collections::HashSet<&str> = std::collections::HashSet::new();
        let mut current: Option<&str> = record.parent_folder_id.as_deref();
        visited.insert(record.id.as_str());
        while let Some(parent) = current {
            if !visited.insert(parent) {
                log::warn!("containment cycle through {}, detaching {}", parent, record.id);
                detach.insert(record.id.clone());
                break;
            }
            current = parents.get(parent).and_then(|p| p.as_deref());
        }
    }

    for record in records.iter_mut() {
        if detach.contains(&record.id) {
            record.parent_folder_id = None;
        }
    }
}

/// Build a live record from a persisted one, defaulting what is missing
fn revive(persisted: PersistedIcon) -> IconRecord {
    let id = persisted.id.unwrap_or_else(|| {
        let fresh = Uuid::new_v4().to_string();
        log::warn!("icon {} had no id, assigned {}", persisted.package_name, fresh);
        fresh
    });

    let kind = type_to_kind(persisted.kind.as_deref(), &persisted.package_name);

    let mut record = IconRecord::with_id(id, persisted.package_name, kind, persisted.name);
    record.parent_folder_id = persisted.parent_folder_id;
    record.legacy_x = persisted.x.unwrap_or(0.0);
    record.legacy_y = persisted.y.unwrap_or(0.0);
    record.portrait_slot = persisted.portrait_grid_index;
    record.landscape_slot = persisted.landscape_grid_index;
    record
}

fn kind_to_type(kind: IconKind) -> &'static str {
    match kind {
        IconKind::App => "APP",
        IconKind::Folder => "FOLDER",
        IconKind::RecycleBin => "RECYCLE_BIN",
    }
}

fn type_to_kind(value: Option<&str>, package_name: &str) -> IconKind {
    match value {
        Some("APP") => IconKind::App,
        Some("FOLDER") => IconKind::Folder,
        Some("RECYCLE_BIN") => IconKind::RecycleBin,
        other => {
            if package_name == RECYCLE_BIN_PACKAGE {
                IconKind::RecycleBin
            } else {
                if let Some(unknown) = other {
                    log::warn!("unknown icon type {:?}, treating as APP", unknown);
                }
                IconKind::App
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::Orientation;

    fn sample_store() -> IconStore {
        let mut store = IconStore::new();
        store.insert(IconRecord::recycle_bin()).unwrap();

        let folder = IconRecord::folder("Games");
        let folder_id = folder.id.clone();
        store.insert(folder).unwrap();

        let mut app = IconRecord::app("com.vendor.mail", "Mail");
        app.portrait_slot = Some(3);
        app.landscape_slot = Some(7);
        store.insert(app).unwrap();

        let chess = IconRecord::app("com.vendor.chess", "Chess");
        let chess_id = chess.id.clone();
        store.insert(chess).unwrap();
        store.move_to_folder(&chess_id, Some(&folder_id)).unwrap();

        store
    }

    #[test]
    fn test_round_trip_preserves_records() {
        let store = sample_store();
        let json = encode_store(&store).unwrap();
        let restored = decode_store(&json).unwrap();

        assert_eq!(restored.len(), store.len());
        for original in store.records() {
            let record = restored.get(&original.id).unwrap();
            assert_eq!(record.kind, original.kind);
            assert_eq!(record.package_name, original.package_name);
            assert_eq!(record.display_name, original.display_name);
            assert_eq!(record.parent_folder_id, original.parent_folder_id);
            assert_eq!(record.slot(Orientation::Portrait), original.slot(Orientation::Portrait));
            assert_eq!(record.slot(Orientation::Landscape), original.slot(Orientation::Landscape));
        }

        // No duplicate ids after the round trip
        let ids: std::collections::HashSet<&str> =
            restored.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), restored.len());
    }

    #[test]
    fn test_reader_accepts_bare_legacy_array() {
        let json = r#"[
            {"name": "Mail", "packageName": "com.vendor.mail", "x": 40.0, "y": 120.0, "id": "a", "type": "APP"}
        ]"#;
        let store = decode_store(json).unwrap();

        let record = store.get("a").unwrap();
        assert_eq!(record.kind, IconKind::App);
        assert!((record.legacy_x - 40.0).abs() < 0.001);
        assert!((record.legacy_y - 120.0).abs() < 0.001);
        assert_eq!(record.portrait_slot, None);
    }

    #[test]
    fn test_reader_tolerates_missing_fields() {
        // No x/y, no indices, no id, no type
        let json = r#"[{"packageName": "com.vendor.mail", "name": "Mail"}]"#;
        let store = decode_store(json).unwrap();

        assert_eq!(store.len(), 1);
        let record = &store.records()[0];
        assert!(!record.id.is_empty());
        assert_eq!(record.kind, IconKind::App);
        assert!((record.legacy_x - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_unknown_type_falls_back_to_app() {
        let json = r#"[
            {"packageName": "com.vendor.mail", "id": "a", "type": "WIDGET"},
            {"packageName": "system.recyclebin", "id": "b", "type": "WIDGET"}
        ]"#;
        let store = decode_store(json).unwrap();

        assert_eq!(store.get("a").unwrap().kind, IconKind::App);
        // Unknown type still becomes the recycle bin when the package matches
        assert_eq!(store.get("b").unwrap().kind, IconKind::RecycleBin);
    }

    #[test]
    fn test_duplicate_ids_are_regenerated() {
        let json = r#"[
            {"packageName": "com.vendor.mail", "id": "same", "type": "APP"},
            {"packageName": "com.vendor.camera", "id": "same", "type": "APP"}
        ]"#;
        let store = decode_store(json).unwrap();

        assert_eq!(store.len(), 2);
        let ids: std::collections::HashSet<&str> =
            store.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_second_recycle_bin_is_demoted() {
        let json = r#"[
            {"packageName": "system.recyclebin", "id": "a", "type": "RECYCLE_BIN"},
            {"packageName": "system.recyclebin", "id": "b", "type": "RECYCLE_BIN"}
        ]"#;
        let store = decode_store(json).unwrap();

        assert_eq!(store.get("a").unwrap().kind, IconKind::RecycleBin);
        assert_eq!(store.get("b").unwrap().kind, IconKind::App);
        assert!(store.recycle_bin().is_some());
    }

    #[test]
    fn test_orphaned_parent_detaches_to_desktop() {
        let json = r#"[
            {"packageName": "com.vendor.mail", "id": "a", "type": "APP", "parentFolderId": "ghost"}
        ]"#;
        let store = decode_store(json).unwrap();

        assert_eq!(store.get("a").unwrap().parent_folder_id, None);
    }

    #[test]
    fn test_containment_cycle_is_broken() {
        let json = r#"[
            {"packageName": "folder:a", "id": "a", "type": "FOLDER", "parentFolderId": "b"},
            {"packageName": "folder:b", "id": "b", "type": "FOLDER", "parentFolderId": "a"}
        ]"#;
        let store = decode_store(json).unwrap();

        // Both chains terminate after repair
        for record in store.records() {
            assert!(!store.is_ancestor(&record.id, &record.id));
        }
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(matches!(
            decode_store("not json at all"),
            Err(ShellError::MalformedLayout(_))
        ));
    }

    #[test]
    fn test_writer_emits_live_positions() {
        let mut store = IconStore::new();
        let mut app = IconRecord::app("com.vendor.mail", "Mail");
        app.position = crate::math::Vec2::new(118.0, 64.0);
        store.insert(app).unwrap();

        let json = encode_store(&store).unwrap();
        let snapshot: LayoutSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.version, LayoutSnapshot::CURRENT_VERSION);
        assert!((snapshot.icons[0].x.unwrap() - 118.0).abs() < 0.001);
        assert!((snapshot.icons[0].y.unwrap() - 64.0).abs() < 0.001);
    }

    #[test]
    fn test_snapshot_migration_flags() {
        let mut snapshot = LayoutSnapshot::new(Vec::new());
        assert!(!snapshot.needs_migration());

        snapshot.version = 0;
        assert!(snapshot.needs_migration());
        snapshot.migrate();
        assert!(!snapshot.needs_migration());
    }
}
