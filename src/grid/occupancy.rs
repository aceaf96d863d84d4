//! The projected 2D occupancy grid.

use crate::core::{GridCell, GridCoord, WorldPoint};
use crate::grid::GridProjection;

/// A dense row-major grid of [`GridCell`] states.
///
/// Built by [`GridProjector`](crate::grid::GridProjector) as a snapshot
/// of the voxel store; the grid itself does not track observations. All
/// cells start Unknown.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    projection: GridProjection,
    cells: Vec<GridCell>,
}

impl OccupancyGrid {
    pub fn new(projection: GridProjection) -> Self {
        OccupancyGrid {
            cells: vec![GridCell::Unknown; projection.cell_count()],
            projection,
        }
    }

    #[inline]
    pub fn projection(&self) -> GridProjection {
        self.projection
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.projection.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.projection.cols()
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn in_bounds(&self, coord: &GridCoord) -> bool {
        self.projection.contains(coord)
    }

    #[inline]
    fn index(&self, coord: &GridCoord) -> usize {
        coord.row as usize * self.projection.cols() + coord.col as usize
    }

    /// Cell state at the coordinate, or `None` outside the grid.
    #[inline]
    pub fn cell(&self, coord: &GridCoord) -> Option<GridCell> {
        if self.in_bounds(coord) {
            Some(self.cells[self.index(coord)])
        } else {
            None
        }
    }

    /// Sets a cell, returning false when the coordinate is out of
    /// bounds.
    #[inline]
    pub fn set_cell(&mut self, coord: &GridCoord, cell: GridCell) -> bool {
        if self.in_bounds(coord) {
            let idx = self.index(coord);
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn world_to_grid(&self, point: &WorldPoint) -> GridCoord {
        self.projection.world_to_grid(point)
    }

    #[inline]
    pub fn grid_to_world(&self, coord: &GridCoord, y: f32) -> WorldPoint {
        self.projection.grid_to_world(coord, y)
    }

    /// Number of cells in the given state.
    pub fn count(&self, state: GridCell) -> usize {
        self.cells.iter().filter(|c| **c == state).count()
    }

    /// Iterates all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, GridCell)> + '_ {
        let cols = self.projection.cols();
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let coord = GridCoord::new((i / cols) as i32, (i % cols) as i32);
            (coord, *cell)
        })
    }

    /// Marks the cells of a planned route. Obstacle cells are never
    /// overwritten.
    pub fn stamp_path(&mut self, route: &[GridCoord]) {
        for coord in route {
            if self.cell(coord) != Some(GridCell::Obstacle) {
                self.set_cell(coord, GridCell::PathMarker);
            }
        }
    }

    /// Renders the grid as one character per cell, rows separated by
    /// newlines. Meant for logs and debugging.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.cell_count() + self.rows());
        for row in 0..self.rows() as i32 {
            for col in 0..self.cols() as i32 {
                let cell = self.cells[self.index(&GridCoord::new(row, col))];
                out.push(cell.as_char());
            }
            out.push('\n');
        }
        out
    }
}
