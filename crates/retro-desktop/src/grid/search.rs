//! Collision-free slot search
//!
//! Two strategies over an occupancy set: an outward square-ring spiral from a
//! preferred cell (drag snapping, context-menu placement), and a plain
//! ascending scan (brand-new items with no preferred target).

use std::collections::HashSet;

use super::{GridGeometry, SlotIndex};

/// Lowest unused non-negative slot index
///
/// Ascending scan from zero, skipping occupied entries. Not bounded by the
/// grid capacity: when more icons exist than cells, the overflow indices
/// resolve to positions below the visible rows.
pub fn first_free_slot(occupied: &HashSet<SlotIndex>) -> SlotIndex {
    let mut index = 0;
    while occupied.contains(&index) {
        index += 1;
    }
    index
}

/// Nearest unoccupied slot to a target, by Chebyshev ring distance
///
/// Returns the target itself when free. Otherwise scans rings of increasing
/// radius around the target cell; each ring is walked row-major, so ties at
/// equal distance resolve to the topmost, then leftmost candidate. Falls back
/// to a full ascending scan, and finally to the target itself when the grid
/// is entirely full (overlap is accepted rather than failing the operation).
pub fn nearest_free_slot(
    geometry: &GridGeometry,
    target: SlotIndex,
    occupied: &HashSet<SlotIndex>,
) -> SlotIndex {
    if !occupied.contains(&target) {
        return target;
    }

    let (target_row, target_col) = geometry.index_to_cell(target);
    let target_row = target_row as i64;
    let target_col = target_col as i64;
    let max_radius = geometry.rows().max(geometry.columns()) as i64;

    for radius in 1..=max_radius {
        if let Some(found) = scan_ring(geometry, target_row, target_col, radius, occupied) {
            return found;
        }
    }

    // Every ring exhausted; take the first free cell anywhere.
    for index in 0..geometry.capacity() {
        if !occupied.contains(&index) {
            return index;
        }
    }

    target
}

/// Scan the ring at exactly `radius` Chebyshev distance, row-major
fn scan_ring(
    geometry: &GridGeometry,
    target_row: i64,
    target_col: i64,
    radius: i64,
    occupied: &HashSet<SlotIndex>,
) -> Option<SlotIndex> {
    for row in (target_row - radius)..=(target_row + radius) {
        for col in (target_col - radius)..=(target_col + radius) {
            let on_ring = (row - target_row).abs() == radius || (col - target_col).abs() == radius;
            if !on_ring || !geometry.cell_in_bounds(row, col) {
                continue;
            }
            let index = geometry.cell_to_index(row as u32, col as u32);
            if !occupied.contains(&index) {
                return Some(index);
            }
        }
    }
    None
}
