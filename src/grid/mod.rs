//! Projection of the voxel store onto a 2D occupancy grid.
//!
//! The grid covers the store's horizontal bounds plus a one-cell border
//! of Unknown cells on every side, so the planner can always route
//! around the observed region's edge. [`GridProjection`] holds the
//! affine mapping between world and grid coordinates, [`OccupancyGrid`]
//! the cell states, and [`GridProjector`] performs the classification.

mod occupancy;
mod projection;
mod projector;

pub use occupancy::OccupancyGrid;
pub use projection::GridProjection;
pub use projector::{compute_horizontal_bounds, GridProjector};

pub(crate) use projector::is_obstacle_height;
