//! Route planning over projected occupancy grids.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ghana_map::pathfinding::AStarPlanner;
//!
//! let planner = AStarPlanner::with_defaults(&grid);
//! let route = planner.find_path(start, goal, Some(ground_height))?;
//! println!("route: {} cells, {:.2} m", route.length_cells(), route.length_meters());
//! ```

pub mod astar;

pub use astar::{AStarPlanner, Route};

use crate::core::GridCoord;
use crate::error::PlanError;
use crate::grid::OccupancyGrid;

/// Plans a route with default planner settings and no ground estimate.
pub fn find_route(
    grid: &OccupancyGrid,
    start: GridCoord,
    goal: GridCoord,
) -> Result<Route, PlanError> {
    AStarPlanner::with_defaults(grid).find_path(start, goal, None)
}

/// True when a route between the two cells exists.
pub fn route_exists(grid: &OccupancyGrid, start: GridCoord, goal: GridCoord) -> bool {
    find_route(grid, start, goal).is_ok()
}
