//! Pure grid geometry conversions
//!
//! All functions are parameterized by the container size and a set of cell
//! metrics; nothing here is cached across orientation changes. Column and row
//! counts are recomputed from the container every time it changes.

use crate::math::{Size, Vec2};
use super::SlotIndex;

/// Fixed cell metrics for one device class
///
/// `cell` is the full footprint of one grid cell; `icon` is the rendered icon
/// footprint centered inside it. Margins reserve the status area at the top
/// and the taskbar at the bottom of the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMetrics {
    /// Full cell footprint in pixels
    pub cell: Size,
    /// Icon footprint centered inside a cell
    pub icon: Size,
    /// Reserved status area height at the top
    pub top_margin: f32,
    /// Reserved taskbar height at the bottom
    pub bottom_margin: f32,
}

impl GridMetrics {
    /// Create custom metrics
    pub const fn new(cell: Size, icon: Size, top_margin: f32, bottom_margin: f32) -> Self {
        Self {
            cell,
            icon,
            top_margin,
            bottom_margin,
        }
    }
}

/// Grid geometry for one container size
///
/// Snapshot of the derived column/row counts for a concrete container.
/// Rebuilt via [`GridGeometry::for_container`] whenever the container
/// changes (rotation, fold/unfold).
#[derive(Clone, Copy, Debug)]
pub struct GridGeometry {
    metrics: GridMetrics,
    columns: u32,
    rows: u32,
}

impl GridGeometry {
    /// Compute the geometry for a container size
    pub fn for_container(metrics: GridMetrics, container: Size) -> Self {
        let columns = (container.width / metrics.cell.width).floor().max(1.0) as u32;
        let usable_height = container.height - metrics.top_margin - metrics.bottom_margin;
        let rows = (usable_height / metrics.cell.height).floor().max(1.0) as u32;
        Self {
            metrics,
            columns,
            rows,
        }
    }

    /// Number of columns
    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.columns * self.rows
    }

    /// Cell metrics this geometry was built from
    #[inline]
    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    /// Convert a linear index to a (row, column) cell
    #[inline]
    pub fn index_to_cell(&self, index: SlotIndex) -> (u32, u32) {
        (index / self.columns, index % self.columns)
    }

    /// Convert a (row, column) cell to a linear index
    #[inline]
    pub fn cell_to_index(&self, row: u32, col: u32) -> SlotIndex {
        row * self.columns + col
    }

    /// Check whether a signed (row, column) pair lies inside the grid
    #[inline]
    pub fn cell_in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as u32) < self.rows && (col as u32) < self.columns
    }

    /// Top-left pixel position for a cell, icon footprint centered
    pub fn cell_to_position(&self, row: u32, col: u32) -> Vec2 {
        let m = &self.metrics;
        let x = col as f32 * m.cell.width + (m.cell.width - m.icon.width) * 0.5;
        let y = m.top_margin + row as f32 * m.cell.height + (m.cell.height - m.icon.height) * 0.5;
        Vec2::new(x, y)
    }

    /// Top-left pixel position for a linear index
    ///
    /// An index beyond the grid capacity still resolves to a position; the
    /// row simply falls below the visible rows. Callers relying on stored
    /// indices from a larger grid get an off-screen position instead of a
    /// silent reassignment.
    #[inline]
    pub fn index_to_position(&self, index: SlotIndex) -> Vec2 {
        let (row, col) = self.index_to_cell(index);
        self.cell_to_position(row, col)
    }

    /// Convert a legacy pixel position to the nearest in-bounds linear index
    ///
    /// Used only for one-time migration of records that predate grid
    /// indices. The icon's center point decides the cell; coordinates are
    /// clamped into the grid.
    pub fn position_to_index(&self, pos: Vec2) -> SlotIndex {
        let m = &self.metrics;
        let center_x = pos.x + m.icon.width * 0.5;
        let center_y = pos.y + m.icon.height * 0.5 - m.top_margin;

        let col = (center_x / m.cell.width).floor();
        let row = (center_y / m.cell.height).floor();

        let col = (col.max(0.0) as u32).min(self.columns - 1);
        let row = (row.max(0.0) as u32).min(self.rows - 1);

        self.cell_to_index(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_metrics() -> GridMetrics {
        GridMetrics::new(Size::new(100.0, 120.0), Size::new(64.0, 64.0), 40.0, 80.0)
    }

    #[test]
    fn test_column_row_counts() {
        let geo = GridGeometry::for_container(test_metrics(), Size::new(480.0, 920.0));
        // 480 / 100 = 4 columns; (920 - 40 - 80) / 120 = 6 rows
        assert_eq!(geo.columns(), 4);
        assert_eq!(geo.rows(), 6);
        assert_eq!(geo.capacity(), 24);
    }

    #[test]
    fn test_minimum_one_cell() {
        let geo = GridGeometry::for_container(test_metrics(), Size::new(50.0, 100.0));
        assert_eq!(geo.columns(), 1);
        assert_eq!(geo.rows(), 1);
    }

    #[test]
    fn test_index_cell_roundtrip() {
        let geo = GridGeometry::for_container(test_metrics(), Size::new(480.0, 920.0));
        assert_eq!(geo.index_to_cell(0), (0, 0));
        assert_eq!(geo.index_to_cell(5), (1, 1));
        assert_eq!(geo.cell_to_index(1, 1), 5);
        assert_eq!(geo.cell_to_index(2, 3), 11);
    }

    #[test]
    fn test_cell_to_position_centers_icon() {
        let geo = GridGeometry::for_container(test_metrics(), Size::new(480.0, 920.0));
        let pos = geo.cell_to_position(0, 0);
        // (100 - 64) / 2 = 18 horizontal inset; 40 + (120 - 64) / 2 = 68 vertical
        assert!((pos.x - 18.0).abs() < 0.001);
        assert!((pos.y - 68.0).abs() < 0.001);

        let pos = geo.cell_to_position(1, 2);
        assert!((pos.x - 218.0).abs() < 0.001);
        assert!((pos.y - 188.0).abs() < 0.001);
    }

    #[test]
    fn test_position_to_index_clamps() {
        let geo = GridGeometry::for_container(test_metrics(), Size::new(480.0, 920.0));

        // Far off the right edge clamps to the last column
        let idx = geo.position_to_index(Vec2::new(5000.0, 0.0));
        assert_eq!(geo.index_to_cell(idx).1, geo.columns() - 1);

        // Negative coordinates clamp to the first cell
        assert_eq!(geo.position_to_index(Vec2::new(-500.0, -500.0)), 0);
    }

    #[test]
    fn test_position_index_inverse_on_grid_points() {
        let geo = GridGeometry::for_container(test_metrics(), Size::new(480.0, 920.0));
        for index in 0..geo.capacity() {
            let pos = geo.index_to_position(index);
            assert_eq!(geo.position_to_index(pos), index);
        }
    }

    #[test]
    fn test_out_of_capacity_index_positions_off_grid() {
        let geo = GridGeometry::for_container(test_metrics(), Size::new(480.0, 920.0));
        let below = geo.index_to_position(geo.capacity());
        let last_visible = geo.cell_to_position(geo.rows() - 1, 0);
        assert!(below.y > last_visible.y);
    }
}
