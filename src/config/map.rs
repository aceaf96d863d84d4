//! Voxel store and grid projection settings.

use super::defaults;
use serde::{Deserialize, Serialize};

/// Settings for voxel quantization and grid classification.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapSection {
    /// Edge length of a cubic voxel (and of a projected grid cell), in
    /// meters.
    #[serde(default = "defaults::cell_size")]
    pub cell_size: f32,

    /// Minimum observation count before a voxel participates in grid
    /// projection and snapshot emission. Filters sensor noise.
    #[serde(default = "defaults::noise_level")]
    pub noise_level: u32,

    /// Voxels whose center lies less than this height above the ground
    /// estimate classify as free; at or above it, as obstacles. Meters.
    #[serde(default = "defaults::ground_margin")]
    pub ground_margin: f32,
}

impl Default for MapSection {
    fn default() -> Self {
        MapSection {
            cell_size: defaults::cell_size(),
            noise_level: defaults::noise_level(),
            ground_margin: defaults::ground_margin(),
        }
    }
}

impl MapSection {
    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_noise_level(mut self, noise_level: u32) -> Self {
        self.noise_level = noise_level;
        self
    }

    pub fn with_ground_margin(mut self, ground_margin: f32) -> Self {
        self.ground_margin = ground_margin;
        self
    }
}
