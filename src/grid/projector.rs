//! Classification of voxels into occupancy grid cells.

use crate::config::MapSection;
use crate::core::{GridCell, HorizontalBounds};
use crate::error::PlanError;
use crate::grid::{GridProjection, OccupancyGrid};
use crate::voxel::VoxelStore;
use log::debug;

/// Horizontal bounds over every stored voxel's center, at any density.
///
/// Low-density voxels participate here even though they are filtered
/// from classification, so the grid's extent does not jump when a voxel
/// crosses the density threshold.
pub fn compute_horizontal_bounds(store: &VoxelStore) -> HorizontalBounds {
    let mut bounds = HorizontalBounds::empty();
    for voxel in store.iter() {
        bounds.expand_to_include(&voxel.center);
    }
    bounds
}

/// Height classification shared by grid building and obstacle-only
/// voxel snapshots. With no ground estimate every voxel counts as an
/// obstacle.
pub(crate) fn is_obstacle_height(y: f32, ground: Option<f32>, margin: f32) -> bool {
    match ground {
        Some(g) => y >= g + margin,
        None => true,
    }
}

/// Projects a [`VoxelStore`] onto a fresh [`OccupancyGrid`].
pub struct GridProjector<'a> {
    store: &'a VoxelStore,
    config: &'a MapSection,
}

impl<'a> GridProjector<'a> {
    pub fn new(store: &'a VoxelStore, config: &'a MapSection) -> Self {
        GridProjector { store, config }
    }

    /// Builds the occupancy grid for the current store contents.
    ///
    /// Voxels below the noise threshold are skipped. Remaining voxels
    /// classify by their center height against the ground estimate:
    /// within the ground margin they mark their cell Free, otherwise
    /// Obstacle. When several voxels share a cell, Obstacle wins
    /// regardless of iteration order.
    ///
    /// Fails with [`PlanError::GridUnavailable`] when the store is
    /// empty.
    pub fn build(&self, ground: Option<f32>) -> Result<OccupancyGrid, PlanError> {
        let bounds = compute_horizontal_bounds(self.store);
        let projection = GridProjection::from_bounds(&bounds, self.config.cell_size)
            .ok_or(PlanError::GridUnavailable)?;
        let mut grid = OccupancyGrid::new(projection);

        let mut qualifying = 0usize;
        for voxel in self.store.iter() {
            if voxel.density < self.config.noise_level {
                continue;
            }
            qualifying += 1;

            let coord = projection.world_to_grid(&voxel.center);
            if grid.cell(&coord) == Some(GridCell::Obstacle) {
                continue;
            }
            let state = if is_obstacle_height(voxel.center.y, ground, self.config.ground_margin)
            {
                GridCell::Obstacle
            } else {
                GridCell::Free
            };
            grid.set_cell(&coord, state);
        }

        debug!(
            "[Grid] built {}x{} grid from {} qualifying voxels ({} obstacle cells)",
            grid.rows(),
            grid.cols(),
            qualifying,
            grid.count(GridCell::Obstacle)
        );
        Ok(grid)
    }
}
