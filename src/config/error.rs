//! Configuration loading and validation errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(String),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("cell_size must be positive and finite, got {0}")]
    InvalidCellSize(f32),

    #[error("ground_margin must be non-negative and finite, got {0}")]
    InvalidGroundMargin(f32),

    #[error("unknown_penalty must be non-negative and finite, got {0}")]
    InvalidUnknownPenalty(f32),

    #[error("expansion_cap_factor must be at least 1")]
    InvalidExpansionCap,

    #[error("waypoint_clearance must be non-negative and finite, got {0}")]
    InvalidWaypointClearance(f32),
}
