//! # ghana-map
//!
//! Incremental voxel mapping and route planning for indoor robots.
//!
//! Streams of observed 3D points (depth cameras, reconstruction
//! meshes) fold into a sparse voxel store. The store projects onto a
//! 2D occupancy grid on demand, and an A* planner finds routes across
//! that grid while avoiding obstacles and preferring observed space.
//!
//! ## Features
//!
//! - **Sparse voxel store**: memory scales with observed surface, not
//!   bounding volume; per-voxel density counters filter sensor noise
//! - **Incremental snapshots**: consumers receive only voxels that are
//!   new since their last snapshot
//! - **Ground-aware classification**: cells near the ground estimate
//!   are free, everything above it is an obstacle
//! - **8-connected A\***: unit step cost, Euclidean heuristic, unknown
//!   cells passable at a penalty, no corner cutting
//! - **Worker thread**: single-writer map behind a command channel,
//!   results delivered through per-request reply channels
//!
//! ## Quick Start
//!
//! ```
//! use ghana_map::{GhanaConfig, MapSection, VoxelMap, WorldPoint};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GhanaConfig {
//!     map: MapSection::default().with_cell_size(0.25).with_noise_level(1),
//!     ..GhanaConfig::default()
//! };
//! let mut map = VoxelMap::new(config)?;
//!
//! // Observe a small patch of floor.
//! for i in 0..5 {
//!     for j in 0..5 {
//!         map.add_observation(&WorldPoint::new(0.25 * i as f32, 0.0, 0.25 * j as f32))?;
//!     }
//! }
//! map.update_ground(0.0)?;
//!
//! // Plan across it.
//! let route = map.plan_route(
//!     &WorldPoint::new(0.0, 0.0, 0.0),
//!     &WorldPoint::new(1.0, 0.0, 1.0),
//! )?;
//! assert!(!route.waypoints.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Coordinate Frame
//!
//! The world frame is Y-up: X and Z span the horizontal plane, Y is
//! height in meters. The projected grid is anchored at the maximum
//! corner of the observed bounds; rows count down along X, columns
//! down along Z, and a one-cell Unknown border surrounds the observed
//! region on every side.
//!
//! ## Architecture
//!
//! - [`core`]: coordinate types, bounds, and cell states
//! - [`voxel`]: the sparse voxel store
//! - [`grid`]: projection onto the 2D occupancy grid
//! - [`pathfinding`]: A* route planning
//! - [`map`]: the synchronous single-owner facade
//! - [`worker`]: worker thread and caller handle
//! - [`config`]: YAML-backed configuration
//! - [`error`]: the error taxonomy
//!
//! ## Data Flow
//!
//! ```text
//! observations ──► VoxelStore ──► GridProjector ──► OccupancyGrid
//!                      │                                 │
//!                      ▼                                 ▼
//!              voxel snapshots                     AStarPlanner ──► Route
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod grid;
pub mod map;
pub mod pathfinding;
pub mod voxel;
pub mod worker;

// ─── Configuration ───
pub use config::{ConfigError, GhanaConfig, MapSection, PlannerSection};

// ─── Core types ───
pub use core::{GridCell, GridCoord, HorizontalBounds, VoxelCoord, WorldPoint};

// ─── Errors ───
pub use error::{MapError, PlanError};

// ─── Mapping and planning ───
pub use grid::{GridProjection, GridProjector, OccupancyGrid};
pub use map::{SnapshotOptions, VoxelMap};
pub use pathfinding::{AStarPlanner, Route};
pub use voxel::{Voxel, VoxelStore};

// ─── Concurrency ───
pub use worker::{MapCommand, MapHandle, MapWorker};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pipeline_smoke() {
        let config = GhanaConfig {
            map: MapSection::default().with_noise_level(1),
            ..GhanaConfig::default()
        };
        let mut map = VoxelMap::new(config).unwrap();
        map.add_observation(&WorldPoint::new(0.05, 0.0, 0.05))
            .unwrap();
        map.update_ground(0.0).unwrap();

        let grid = map.build_grid().unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.count(GridCell::Free), 1);
    }
}
