//! World-to-grid coordinate mapping.

use crate::core::{GridCoord, HorizontalBounds, WorldPoint};

/// Affine mapping between world XZ coordinates and grid row/column.
///
/// The grid is anchored at the bounds' maximum corner: row 0 sits just
/// beyond `max_x` and rows increase toward `min_x`; columns behave the
/// same along Z. Row 0, column 0, and the last row and column form a
/// border that no voxel can map into, so the observed region is always
/// surrounded by Unknown cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridProjection {
    max_x: f32,
    max_z: f32,
    cell_size: f32,
    rows: usize,
    cols: usize,
}

impl GridProjection {
    pub fn new(max_x: f32, max_z: f32, cell_size: f32, rows: usize, cols: usize) -> Self {
        GridProjection {
            max_x,
            max_z,
            cell_size,
            rows,
            cols,
        }
    }

    /// Builds the projection covering the given bounds, or `None` when
    /// the bounds are empty.
    ///
    /// The span is measured between the extreme voxel centers and
    /// padded by one border cell on each side, plus one cell so a point
    /// exactly on the minimum edge still lands inside the border.
    pub fn from_bounds(bounds: &HorizontalBounds, cell_size: f32) -> Option<Self> {
        if bounds.is_empty() {
            return None;
        }
        let rows = (bounds.width() / cell_size).floor() as usize + 3;
        let cols = (bounds.depth() / cell_size).floor() as usize + 3;
        Some(GridProjection {
            max_x: bounds.max_x,
            max_z: bounds.max_z,
            cell_size,
            rows,
            cols,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Maps a world point to its grid cell. The result may lie outside
    /// the grid; check with [`contains`](GridProjection::contains).
    #[inline]
    pub fn world_to_grid(&self, point: &WorldPoint) -> GridCoord {
        // The +1 happens in float space so extreme inputs saturate on
        // the cast instead of wrapping.
        let row = ((self.max_x - point.x) / self.cell_size).floor() + 1.0;
        let col = ((self.max_z - point.z) / self.cell_size).floor() + 1.0;
        GridCoord::new(row as i32, col as i32)
    }

    /// Maps a grid cell to the world position of its center, at the
    /// given height.
    #[inline]
    pub fn grid_to_world(&self, coord: &GridCoord, y: f32) -> WorldPoint {
        WorldPoint::new(
            self.max_x - (coord.row as f32 - 0.5) * self.cell_size,
            y,
            self.max_z - (coord.col as f32 - 0.5) * self.cell_size,
        )
    }

    /// True when the coordinate addresses a cell of this grid.
    #[inline]
    pub fn contains(&self, coord: &GridCoord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.rows
            && (coord.col as usize) < self.cols
    }
}
