//! The map facade: observation ingestion, snapshots, and planning.

use crate::config::{ConfigError, GhanaConfig};
use crate::core::{HorizontalBounds, WorldPoint};
use crate::error::{ensure_finite_endpoint, MapError, PlanError};
use crate::grid::{compute_horizontal_bounds, is_obstacle_height, GridProjector, OccupancyGrid};
use crate::pathfinding::{AStarPlanner, Route};
use crate::voxel::{Voxel, VoxelStore};
use log::debug;

/// Options for [`VoxelMap::voxel_snapshot`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SnapshotOptions {
    /// Clear the emission memory first, returning every qualifying
    /// voxel instead of only those new since the last snapshot.
    pub full_redraw: bool,
    /// Return only voxels classified as obstacles. Voxels held back by
    /// this filter stay eligible for later snapshots.
    pub only_obstacles: bool,
}

impl SnapshotOptions {
    /// New-since-last-snapshot voxels only.
    pub fn incremental() -> Self {
        SnapshotOptions::default()
    }

    /// Every qualifying voxel.
    pub fn full() -> Self {
        SnapshotOptions {
            full_redraw: true,
            only_obstacles: false,
        }
    }

    pub fn with_only_obstacles(mut self, only_obstacles: bool) -> Self {
        self.only_obstacles = only_obstacles;
        self
    }
}

/// Incremental voxel map with grid projection and route planning.
///
/// This is the synchronous, single-owner core. Wrap it in a
/// [`MapWorker`](crate::worker::MapWorker) to drive it from multiple
/// threads.
pub struct VoxelMap {
    store: VoxelStore,
    ground: Option<f32>,
    config: GhanaConfig,
}

impl VoxelMap {
    /// Creates a map after validating the configuration.
    pub fn new(config: GhanaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(VoxelMap {
            store: VoxelStore::new(config.map.cell_size),
            ground: None,
            config,
        })
    }

    /// Creates a map with the default configuration.
    pub fn with_defaults() -> Self {
        let config = GhanaConfig::default();
        VoxelMap {
            store: VoxelStore::new(config.map.cell_size),
            ground: None,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &GhanaConfig {
        &self.config
    }

    /// Current ground height estimate, if any observation carried one.
    #[inline]
    pub fn ground(&self) -> Option<f32> {
        self.ground
    }

    #[inline]
    pub fn voxel_count(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn store(&self) -> &VoxelStore {
        &self.store
    }

    /// Feeds one observed point into the map.
    pub fn add_observation(&mut self, point: &WorldPoint) -> Result<(), MapError> {
        self.store.add_observation(point)
    }

    /// Feeds a batch of observed points into the map.
    pub fn add_observations(&mut self, points: &[WorldPoint]) -> Result<(), MapError> {
        self.store.add_observations(points)
    }

    /// Folds a ground height estimate into the map. The estimate only
    /// ever lowers: the smallest height seen so far wins.
    pub fn update_ground(&mut self, height: f32) -> Result<(), MapError> {
        if !height.is_finite() {
            return Err(MapError::NonFiniteGround(height));
        }
        let folded = match self.ground {
            Some(current) => current.min(height),
            None => height,
        };
        if self.ground != Some(folded) {
            debug!("[Map] ground estimate lowered to {:.3}", folded);
        }
        self.ground = Some(folded);
        Ok(())
    }

    /// Horizontal bounds over every stored voxel.
    pub fn bounds(&self) -> HorizontalBounds {
        compute_horizontal_bounds(&self.store)
    }

    /// Voxels at or above the noise threshold, subject to the snapshot
    /// options. Returned voxels are remembered and withheld from later
    /// incremental snapshots.
    pub fn voxel_snapshot(&mut self, options: SnapshotOptions) -> Vec<Voxel> {
        let threshold = self.config.map.noise_level;
        if options.only_obstacles {
            let ground = self.ground;
            let margin = self.config.map.ground_margin;
            self.store
                .qualifying_voxels_where(threshold, options.full_redraw, |voxel| {
                    is_obstacle_height(voxel.center.y, ground, margin)
                })
        } else {
            self.store.qualifying_voxels(threshold, options.full_redraw)
        }
    }

    /// Projects the current store onto a fresh occupancy grid.
    pub fn build_grid(&self) -> Result<OccupancyGrid, PlanError> {
        GridProjector::new(&self.store, &self.config.map).build(self.ground)
    }

    /// Plans a route between two world positions on the current map.
    pub fn plan_route(&self, start: &WorldPoint, end: &WorldPoint) -> Result<Route, PlanError> {
        ensure_finite_endpoint(start)?;
        ensure_finite_endpoint(end)?;
        let grid = self.build_grid()?;
        AStarPlanner::new(&grid, self.config.planner.clone()).find_path_world(
            start,
            end,
            self.ground,
        )
    }

    /// Builds the occupancy grid and stamps the planned route into it.
    ///
    /// The grid is returned even when no route exists; the planning
    /// failure is logged and the grid simply carries no path markers.
    pub fn planning_grid(
        &self,
        start: &WorldPoint,
        end: &WorldPoint,
    ) -> Result<OccupancyGrid, PlanError> {
        ensure_finite_endpoint(start)?;
        ensure_finite_endpoint(end)?;
        let mut grid = self.build_grid()?;
        let outcome = AStarPlanner::new(&grid, self.config.planner.clone()).find_path_world(
            start,
            end,
            self.ground,
        );
        match outcome {
            Ok(route) => grid.stamp_path(&route.cells),
            Err(e) => debug!("[Map] planning grid carries no route: {}", e),
        }
        Ok(grid)
    }
}
