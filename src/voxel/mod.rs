//! Sparse voxel occupancy store.
//!
//! Observed 3D points are quantized into cubic voxels kept in a hash
//! map, so memory scales with the observed surface rather than the
//! bounding volume. Each voxel counts how often it has been hit, which
//! downstream consumers use to filter sensor noise.

mod store;

pub use store::{Voxel, VoxelStore};
