//! Error types for map ingestion and route planning.
//!
//! Two categories are kept deliberately separate:
//!
//! - [`MapError`] reports contract violations on input data (non-finite
//!   coordinates, quantization overflow). These are caller bugs and are
//!   rejected at the API boundary before any state is touched.
//! - [`PlanError`] reports planning outcomes that are expected in normal
//!   operation (a blocked goal, an unreachable target). Callers are meant
//!   to match on these and react, not to treat them as failures.

use crate::core::WorldPoint;
use thiserror::Error;

/// Rejects non-finite route endpoints before they can quantize into
/// plausible-looking grid coordinates.
pub(crate) fn ensure_finite_endpoint(point: &WorldPoint) -> Result<(), MapError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(MapError::NonFiniteEndpoint {
            x: point.x,
            y: point.y,
            z: point.z,
        })
    }
}

/// Contract violation on data fed into the map.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    /// An observed point contained a NaN or infinite component.
    #[error("observation contains non-finite coordinates ({x}, {y}, {z})")]
    NonFiniteObservation { x: f32, y: f32, z: f32 },

    /// A ground height update was NaN or infinite.
    #[error("ground height is not finite: {0}")]
    NonFiniteGround(f32),

    /// A route endpoint contained a NaN or infinite component.
    #[error("route endpoint contains non-finite coordinates ({x}, {y}, {z})")]
    NonFiniteEndpoint { x: f32, y: f32, z: f32 },

    /// A finite point was too far from the origin for its voxel index
    /// to fit in an `i32` at the configured cell size.
    #[error("point ({x}, {y}, {z}) overflows voxel index range at cell size {cell_size}")]
    QuantizationOverflow {
        x: f32,
        y: f32,
        z: f32,
        cell_size: f32,
    },
}

/// Outcome of a route planning request that did not produce a route.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// The request itself violated the input contract.
    #[error("invalid planning request: {0}")]
    InvalidRequest(#[from] MapError),

    /// No occupancy grid can be built yet (no qualifying observations).
    #[error("no occupancy grid is available")]
    GridUnavailable,

    /// Start or end lies outside the current grid.
    #[error("endpoint lies outside the grid")]
    OutOfBounds,

    /// The start cell is occupied by an obstacle.
    #[error("start cell is blocked")]
    StartBlocked,

    /// The end cell is occupied by an obstacle.
    #[error("end cell is blocked")]
    EndBlocked,

    /// Start and end resolve to the same grid cell.
    #[error("start and end resolve to the same cell")]
    TrivialRequest,

    /// The search space was exhausted (or the expansion cap was hit)
    /// without reaching the goal.
    #[error("no path exists after {expansions} expansions")]
    NoPathExists { expansions: usize },
}
