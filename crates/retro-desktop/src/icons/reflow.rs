//! Orientation migration and reflow
//!
//! Runs after every load and after each confirmed orientation transition.
//! Three passes, in order:
//!
//! 1. **Migration**: records with no slot in either orientation get one
//!    computed from their legacy pixel coordinates, for the current
//!    orientation only. The other orientation stays unassigned until it is
//!    visited.
//! 2. **Positioning**: every record with a slot for the current orientation
//!    gets its live pixel position refreshed from that slot.
//! 3. **Reflow**: records still lacking a slot take the lowest unused index
//!    in ascending order. Each assignment marks the index occupied before
//!    the next record is considered, so one pass never hands the same slot
//!    to two records.
//!
//! A stored slot beyond the current grid's capacity is left alone: the
//! record positions below the visible rows instead of being silently moved.
//! The slot becomes reachable again when the larger grid returns.

use std::collections::HashSet;

use crate::grid::{first_free_slot, GridGeometry};
use crate::math::Vec2;
use crate::orientation::Orientation;
use super::IconStore;

/// Run migration, positioning, and reflow for one orientation
pub fn run(store: &mut IconStore, geometry: &GridGeometry, orientation: Orientation) {
    let migrated = migrate_legacy_positions(store, geometry, orientation);
    position_assigned(store, geometry, orientation);
    let reflowed = assign_missing_slots(store, geometry, orientation);

    if migrated > 0 || reflowed > 0 {
        log::debug!(
            "reflow ({:?}): migrated {} legacy records, assigned {} free slots",
            orientation,
            migrated,
            reflowed
        );
    }
}

/// Pass 1: derive slots from legacy pixel coordinates
fn migrate_legacy_positions(
    store: &mut IconStore,
    geometry: &GridGeometry,
    orientation: Orientation,
) -> usize {
    let mut migrated = 0;
    for record in store.records_mut().iter_mut() {
        if !record.is_desktop_visible() {
            continue;
        }
        if record.portrait_slot.is_some() || record.landscape_slot.is_some() {
            continue;
        }
        let legacy = Vec2::new(record.legacy_x, record.legacy_y);
        record.set_slot(orientation, Some(geometry.position_to_index(legacy)));
        migrated += 1;
    }
    migrated
}

/// Pass 2: refresh live positions from assigned slots
fn position_assigned(store: &mut IconStore, geometry: &GridGeometry, orientation: Orientation) {
    for record in store.records_mut().iter_mut() {
        if !record.is_desktop_visible() {
            continue;
        }
        if let Some(slot) = record.slot(orientation) {
            record.position = geometry.index_to_position(slot);
        }
    }
}

/// Pass 3: hand the lowest free slots to records without one
fn assign_missing_slots(
    store: &mut IconStore,
    geometry: &GridGeometry,
    orientation: Orientation,
) -> usize {
    let mut occupied: HashSet<u32> = store.occupied_slots(orientation, None);
    let mut reflowed = 0;

    for record in store.records_mut().iter_mut() {
        if !record.is_desktop_visible() || record.slot(orientation).is_some() {
            continue;
        }
        let slot = first_free_slot(&occupied);
        record.set_slot(orientation, Some(slot));
        record.position = geometry.index_to_position(slot);
        occupied.insert(slot);
        reflowed += 1;
    }
    reflowed
}
