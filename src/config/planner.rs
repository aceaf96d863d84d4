//! Route planner settings.

use super::defaults;
use serde::{Deserialize, Serialize};

/// Settings for the A* route planner.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerSection {
    /// Added to a neighbor's estimated total cost when its cell is
    /// unknown. Steers routes through observed space without forbidding
    /// unexplored cells outright.
    #[serde(default = "defaults::unknown_penalty")]
    pub unknown_penalty: f32,

    /// The search aborts after `factor * cell_count` node expansions.
    /// Re-expansions of stale queue entries count, so a value above 1
    /// leaves headroom for them.
    #[serde(default = "defaults::expansion_cap_factor")]
    pub expansion_cap_factor: usize,

    /// Height above the ground estimate at which route waypoints are
    /// emitted, in meters.
    #[serde(default = "defaults::waypoint_clearance")]
    pub waypoint_clearance: f32,
}

impl Default for PlannerSection {
    fn default() -> Self {
        PlannerSection {
            unknown_penalty: defaults::unknown_penalty(),
            expansion_cap_factor: defaults::expansion_cap_factor(),
            waypoint_clearance: defaults::waypoint_clearance(),
        }
    }
}

impl PlannerSection {
    pub fn with_unknown_penalty(mut self, unknown_penalty: f32) -> Self {
        self.unknown_penalty = unknown_penalty;
        self
    }

    pub fn with_expansion_cap_factor(mut self, factor: usize) -> Self {
        self.expansion_cap_factor = factor;
        self
    }

    pub fn with_waypoint_clearance(mut self, clearance: f32) -> Self {
        self.waypoint_clearance = clearance;
        self
    }
}
