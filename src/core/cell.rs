//! Semantic cell states for the projected occupancy grid.

use serde::{Deserialize, Serialize};

/// State of one cell in the projected 2D grid.
///
/// Stored as a `u8` so grids serialize compactly and can be diffed as
/// raw byte planes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum GridCell {
    /// Never observed, or observed below the density threshold.
    #[default]
    Unknown = 0,
    /// Observed near ground height: traversable.
    Free = 1,
    /// Observed above the ground margin: blocked.
    Obstacle = 2,
    /// A planned route passes through this cell.
    PathMarker = 3,
}

impl GridCell {
    /// True for cells a route may pass through. Unknown cells are
    /// walkable (at a cost penalty); only obstacles block.
    #[inline]
    pub fn is_walkable(&self) -> bool {
        !matches!(self, GridCell::Obstacle)
    }

    #[inline]
    pub fn is_obstacle(&self) -> bool {
        matches!(self, GridCell::Obstacle)
    }

    /// True once the cell has been classified from observations.
    #[inline]
    pub fn is_known(&self) -> bool {
        !matches!(self, GridCell::Unknown)
    }

    /// Decodes a raw byte, mapping anything unrecognized to `Unknown`.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => GridCell::Free,
            2 => GridCell::Obstacle,
            3 => GridCell::PathMarker,
            _ => GridCell::Unknown,
        }
    }

    /// Single-character rendering for ASCII grid dumps.
    #[inline]
    pub fn as_char(&self) -> char {
        match self {
            GridCell::Unknown => '?',
            GridCell::Free => '.',
            GridCell::Obstacle => '#',
            GridCell::PathMarker => '*',
        }
    }
}
