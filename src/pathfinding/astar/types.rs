//! Node and result types for the A* search.

use crate::core::{GridCoord, WorldPoint};
use std::cmp::Ordering;

/// Entry in the open queue.
///
/// Ordered so that `BinaryHeap` pops the LOWEST f-cost first, with ties
/// broken by insertion order. The sequence number makes the ordering
/// total and the search deterministic.
#[derive(Clone, Copy, Debug)]
pub(super) struct AStarNode {
    pub coord: GridCoord,
    pub g_cost: f32,
    pub f_cost: f32,
    pub seq: u64,
}

impl PartialEq for AStarNode {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for AStarNode {}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A successfully planned route.
#[derive(Clone, Debug)]
pub struct Route {
    /// Grid cells from start to goal, inclusive.
    pub cells: Vec<GridCoord>,
    /// World-space waypoints at the cell centers, one per cell.
    pub waypoints: Vec<WorldPoint>,
    /// Number of node expansions the search performed.
    pub expansions: usize,
}

impl Route {
    /// Route length in cells, endpoints included.
    #[inline]
    pub fn length_cells(&self) -> usize {
        self.cells.len()
    }

    /// Route length in meters, summed along the waypoints.
    pub fn length_meters(&self) -> f32 {
        self.waypoints
            .windows(2)
            .map(|pair| pair[0].distance(&pair[1]))
            .sum()
    }
}
