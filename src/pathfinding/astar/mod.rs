//! A* search over the occupancy grid.
//!
//! The planner moves in 8 directions at unit step cost. Unknown cells
//! are passable at a configurable cost penalty; diagonal steps are
//! refused when either adjacent orthogonal cell is an obstacle, so a
//! route never clips the corner of an obstacle.

mod planner;
mod types;

pub use planner::AStarPlanner;
pub use types::Route;
