//! Core types for the ghana-map voxel mapping library.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`WorldPoint`]: Continuous 3D position in the world frame
//! - [`VoxelCoord`]: Integer index of a voxel in the sparse store
//! - [`GridCoord`]: Row/column address in the projected 2D grid
//! - [`HorizontalBounds`]: Axis-aligned extent of the map on the ground plane
//! - [`GridCell`]: Semantic state of a projected grid cell

mod bounds;
mod cell;
mod point;

pub use bounds::HorizontalBounds;
pub use cell::GridCell;
pub use point::{GridCoord, VoxelCoord, WorldPoint};
