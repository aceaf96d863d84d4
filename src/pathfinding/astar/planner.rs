//! The A* search over an occupancy grid.

use super::types::{AStarNode, Route};
use crate::config::PlannerSection;
use crate::core::{GridCell, GridCoord, WorldPoint};
use crate::error::{ensure_finite_endpoint, PlanError};
use crate::grid::OccupancyGrid;
use log::{debug, trace, warn};
use std::collections::{BinaryHeap, HashMap, HashSet};

/// A* route planner over a fixed occupancy grid snapshot.
///
/// Moves in 8 directions at unit step cost with a Euclidean heuristic.
/// Unit cost makes diagonal steps as cheap as orthogonal ones, so the
/// heuristic can overestimate across diagonals; routes are near-optimal
/// rather than strictly shortest, in exchange for a smaller search
/// frontier.
pub struct AStarPlanner<'a> {
    grid: &'a OccupancyGrid,
    config: PlannerSection,
}

impl<'a> AStarPlanner<'a> {
    pub fn new(grid: &'a OccupancyGrid, config: PlannerSection) -> Self {
        AStarPlanner { grid, config }
    }

    /// Planner with default settings.
    pub fn with_defaults(grid: &'a OccupancyGrid) -> Self {
        AStarPlanner {
            grid,
            config: PlannerSection::default(),
        }
    }

    /// Plans between two world positions, quantizing them to grid
    /// cells first. Non-finite endpoints are rejected before they can
    /// quantize into plausible-looking cells.
    pub fn find_path_world(
        &self,
        start: &WorldPoint,
        goal: &WorldPoint,
        ground: Option<f32>,
    ) -> Result<Route, PlanError> {
        ensure_finite_endpoint(start)?;
        ensure_finite_endpoint(goal)?;
        self.find_path(
            self.grid.world_to_grid(start),
            self.grid.world_to_grid(goal),
            ground,
        )
    }

    /// Plans between two grid cells.
    ///
    /// The request is checked up front: both endpoints must lie on the
    /// grid, neither may be an obstacle, and they must differ. Waypoints
    /// of the returned route sit at the configured clearance above the
    /// ground estimate.
    pub fn find_path(
        &self,
        start: GridCoord,
        goal: GridCoord,
        ground: Option<f32>,
    ) -> Result<Route, PlanError> {
        trace!(
            "[AStar] find_path: start=({},{}) goal=({},{})",
            start.row,
            start.col,
            goal.row,
            goal.col
        );

        if !self.grid.in_bounds(&start) || !self.grid.in_bounds(&goal) {
            return Err(PlanError::OutOfBounds);
        }
        if self.grid.cell(&start) == Some(GridCell::Obstacle) {
            return Err(PlanError::StartBlocked);
        }
        if self.grid.cell(&goal) == Some(GridCell::Obstacle) {
            return Err(PlanError::EndBlocked);
        }
        if start == goal {
            return Err(PlanError::TrivialRequest);
        }

        let max_expansions = self
            .grid
            .cell_count()
            .saturating_mul(self.config.expansion_cap_factor);

        let mut open = BinaryHeap::new();
        let mut closed: HashSet<GridCoord> = HashSet::new();
        let mut came_from: HashMap<GridCoord, GridCoord> = HashMap::new();
        let mut g_scores: HashMap<GridCoord, f32> = HashMap::new();

        let mut seq: u64 = 0;
        g_scores.insert(start, 0.0);
        open.push(AStarNode {
            coord: start,
            g_cost: 0.0,
            f_cost: start.euclidean_distance(&goal),
            seq,
        });

        let mut expansions: usize = 0;
        while let Some(node) = open.pop() {
            expansions += 1;
            if expansions > max_expansions {
                warn!(
                    "[AStar] expansion cap hit after {} expansions ({} cells)",
                    expansions,
                    self.grid.cell_count()
                );
                return Err(PlanError::NoPathExists { expansions });
            }

            if node.coord == goal {
                return Ok(self.reconstruct(&came_from, goal, expansions, ground));
            }
            if !closed.insert(node.coord) {
                continue;
            }

            for (i, neighbor) in node.coord.neighbors_8().iter().enumerate() {
                if closed.contains(neighbor) {
                    continue;
                }
                let cell = match self.grid.cell(neighbor) {
                    Some(cell) => cell,
                    None => continue,
                };
                if cell.is_obstacle() {
                    continue;
                }
                // Diagonal steps may not squeeze between two obstacles.
                if i >= 4 && self.cuts_corner(&node.coord, neighbor) {
                    continue;
                }

                let tentative_g = node.g_cost + 1.0;
                let best_g = g_scores.get(neighbor).copied().unwrap_or(f32::INFINITY);
                if tentative_g >= best_g {
                    continue;
                }

                g_scores.insert(*neighbor, tentative_g);
                came_from.insert(*neighbor, node.coord);

                let mut f_cost = tentative_g + neighbor.euclidean_distance(&goal);
                if cell == GridCell::Unknown {
                    f_cost += self.config.unknown_penalty;
                }
                seq += 1;
                open.push(AStarNode {
                    coord: *neighbor,
                    g_cost: tentative_g,
                    f_cost,
                    seq,
                });
            }
        }

        debug!("[AStar] open set exhausted after {} expansions", expansions);
        Err(PlanError::NoPathExists { expansions })
    }

    /// True when stepping diagonally from `from` to `to` would pass
    /// between obstacles in the two shared orthogonal cells.
    fn cuts_corner(&self, from: &GridCoord, to: &GridCoord) -> bool {
        let side_a = GridCoord::new(from.row, to.col);
        let side_b = GridCoord::new(to.row, from.col);
        self.grid.cell(&side_a) == Some(GridCell::Obstacle)
            || self.grid.cell(&side_b) == Some(GridCell::Obstacle)
    }

    fn reconstruct(
        &self,
        came_from: &HashMap<GridCoord, GridCoord>,
        goal: GridCoord,
        expansions: usize,
        ground: Option<f32>,
    ) -> Route {
        let mut cells = vec![goal];
        let mut current = goal;
        while let Some(&prev) = came_from.get(&current) {
            cells.push(prev);
            current = prev;
        }
        cells.reverse();

        let waypoint_y = ground.unwrap_or(0.0) + self.config.waypoint_clearance;
        let waypoints = cells
            .iter()
            .map(|coord| self.grid.grid_to_world(coord, waypoint_y))
            .collect();

        debug!(
            "[AStar] path found: {} cells, {} expansions",
            cells.len(),
            expansions
        );
        Route {
            cells,
            waypoints,
            expansions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridProjection;

    fn open_grid(rows: usize, cols: usize) -> OccupancyGrid {
        let mut grid = OccupancyGrid::new(GridProjection::new(0.0, 0.0, 1.0, rows, cols));
        for row in 0..rows as i32 {
            for col in 0..cols as i32 {
                grid.set_cell(&GridCoord::new(row, col), GridCell::Free);
            }
        }
        grid
    }

    #[test]
    fn test_out_of_bounds_endpoints() {
        let grid = open_grid(5, 5);
        let planner = AStarPlanner::with_defaults(&grid);
        let result = planner.find_path(GridCoord::new(0, 0), GridCoord::new(9, 9), None);
        assert_eq!(result.unwrap_err(), PlanError::OutOfBounds);

        let result = planner.find_path(GridCoord::new(-1, 0), GridCoord::new(4, 4), None);
        assert_eq!(result.unwrap_err(), PlanError::OutOfBounds);
    }

    #[test]
    fn test_blocked_endpoints() {
        let mut grid = open_grid(5, 5);
        grid.set_cell(&GridCoord::new(0, 0), GridCell::Obstacle);
        grid.set_cell(&GridCoord::new(4, 4), GridCell::Obstacle);
        let planner = AStarPlanner::with_defaults(&grid);

        let result = planner.find_path(GridCoord::new(0, 0), GridCoord::new(2, 2), None);
        assert_eq!(result.unwrap_err(), PlanError::StartBlocked);

        let result = planner.find_path(GridCoord::new(2, 2), GridCoord::new(4, 4), None);
        assert_eq!(result.unwrap_err(), PlanError::EndBlocked);

        // A blocked start is reported even when start and goal match.
        let result = planner.find_path(GridCoord::new(0, 0), GridCoord::new(0, 0), None);
        assert_eq!(result.unwrap_err(), PlanError::StartBlocked);
    }

    #[test]
    fn test_trivial_request() {
        let grid = open_grid(5, 5);
        let planner = AStarPlanner::with_defaults(&grid);
        let result = planner.find_path(GridCoord::new(2, 2), GridCoord::new(2, 2), None);
        assert_eq!(result.unwrap_err(), PlanError::TrivialRequest);
    }

    #[test]
    fn test_straight_route() {
        let grid = open_grid(3, 6);
        let planner = AStarPlanner::with_defaults(&grid);
        let route = planner
            .find_path(GridCoord::new(1, 0), GridCoord::new(1, 5), None)
            .unwrap();

        assert_eq!(route.cells.first(), Some(&GridCoord::new(1, 0)));
        assert_eq!(route.cells.last(), Some(&GridCoord::new(1, 5)));
        // Unit cost over 8 directions: 6 cells is the shortest.
        assert_eq!(route.length_cells(), 6);
        for pair in route.cells.windows(2) {
            assert_eq!(pair[0].chebyshev_distance(&pair[1]), 1);
        }
    }

    #[test]
    fn test_diagonal_corner_is_not_cut() {
        // Both orthogonal companions of the only diagonal step are
        // blocked, so no route exists at all.
        let mut grid = open_grid(2, 2);
        grid.set_cell(&GridCoord::new(0, 1), GridCell::Obstacle);
        grid.set_cell(&GridCoord::new(1, 0), GridCell::Obstacle);
        let planner = AStarPlanner::with_defaults(&grid);

        let result = planner.find_path(GridCoord::new(0, 0), GridCoord::new(1, 1), None);
        assert!(matches!(result, Err(PlanError::NoPathExists { .. })));
    }

    #[test]
    fn test_single_blocked_companion_blocks_diagonal() {
        // Only one companion is blocked; the diagonal is still illegal
        // and the route must go the long way around.
        let mut grid = open_grid(2, 3);
        grid.set_cell(&GridCoord::new(0, 1), GridCell::Obstacle);
        let planner = AStarPlanner::with_defaults(&grid);

        let route = planner
            .find_path(GridCoord::new(0, 0), GridCoord::new(1, 1), None)
            .unwrap();
        // Direct diagonal would be 2 cells; the detour takes 3.
        assert_eq!(route.length_cells(), 3);
        for pair in route.cells.windows(2) {
            let step = pair[1] - pair[0];
            if step.row != 0 && step.col != 0 {
                let side_a = GridCoord::new(pair[0].row, pair[1].col);
                let side_b = GridCoord::new(pair[1].row, pair[0].col);
                assert_ne!(grid.cell(&side_a), Some(GridCell::Obstacle));
                assert_ne!(grid.cell(&side_b), Some(GridCell::Obstacle));
            }
        }
    }

    #[test]
    fn test_unreachable_goal() {
        let mut grid = open_grid(7, 7);
        // Wall off the goal completely.
        for coord in GridCoord::new(3, 3).neighbors_8() {
            grid.set_cell(&coord, GridCell::Obstacle);
        }
        let planner = AStarPlanner::with_defaults(&grid);

        let result = planner.find_path(GridCoord::new(0, 0), GridCoord::new(3, 3), None);
        match result {
            Err(PlanError::NoPathExists { expansions }) => assert!(expansions > 0),
            other => panic!("expected NoPathExists, got {:?}", other),
        }

        // Searching outward from inside the wall fails just as fast.
        let result = planner.find_path(GridCoord::new(3, 3), GridCoord::new(0, 0), None);
        assert!(matches!(result, Err(PlanError::NoPathExists { .. })));
    }

    #[test]
    fn test_unknown_penalty_steers_through_observed_space() {
        // Middle row offers a straight lane of unknown cells; the top
        // row is a same-length observed lane.
        let mut grid = open_grid(3, 5);
        for col in 1..4 {
            grid.set_cell(&GridCoord::new(1, col), GridCell::Unknown);
        }
        let config = PlannerSection::default().with_unknown_penalty(100.0);
        let planner = AStarPlanner::new(&grid, config);

        let route = planner
            .find_path(GridCoord::new(1, 0), GridCoord::new(1, 4), None)
            .unwrap();
        for coord in &route.cells {
            assert_ne!(grid.cell(coord), Some(GridCell::Unknown));
        }
    }

    #[test]
    fn test_unknown_cells_remain_passable() {
        // With everything unknown a route still exists.
        let grid = OccupancyGrid::new(GridProjection::new(0.0, 0.0, 1.0, 4, 4));
        let planner = AStarPlanner::with_defaults(&grid);
        let route = planner
            .find_path(GridCoord::new(0, 0), GridCoord::new(3, 3), None)
            .unwrap();
        assert_eq!(route.cells.len(), 4);
    }

    #[test]
    fn test_waypoints_sit_above_ground() {
        let grid = open_grid(3, 3);
        let planner = AStarPlanner::with_defaults(&grid);
        let route = planner
            .find_path(GridCoord::new(0, 0), GridCoord::new(2, 2), Some(1.0))
            .unwrap();

        assert_eq!(route.waypoints.len(), route.cells.len());
        for waypoint in &route.waypoints {
            assert!((waypoint.y - 1.4).abs() < 1e-6);
        }
    }

    #[test]
    fn test_world_endpoint_validation() {
        let grid = open_grid(3, 3);
        let planner = AStarPlanner::with_defaults(&grid);
        let bad = WorldPoint::new(f32::NAN, 0.0, 0.0);
        let good = WorldPoint::new(-0.5, 0.0, -0.5);

        let result = planner.find_path_world(&bad, &good, None);
        assert!(matches!(result, Err(PlanError::InvalidRequest(_))));
    }
}
