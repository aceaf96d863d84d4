//! Hash-backed voxel storage with density counting and incremental
//! snapshot emission.

use crate::core::{VoxelCoord, WorldPoint};
use crate::error::MapError;
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One occupied voxel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Voxel {
    /// Integer index in the store.
    pub coord: VoxelCoord,
    /// World position of the voxel center.
    pub center: WorldPoint,
    /// Number of observations that landed in this voxel.
    pub density: u32,
}

/// Sparse voxel store.
///
/// Only observed voxels consume memory. The store also remembers which
/// voxels it has already handed out through [`qualifying_voxels`], so
/// repeated snapshot calls return only what is new since the last call.
///
/// [`qualifying_voxels`]: VoxelStore::qualifying_voxels
#[derive(Clone, Debug)]
pub struct VoxelStore {
    cell_size: f32,
    voxels: HashMap<VoxelCoord, Voxel>,
    emitted: HashSet<VoxelCoord>,
}

impl VoxelStore {
    pub fn new(cell_size: f32) -> Self {
        VoxelStore {
            cell_size,
            voxels: HashMap::new(),
            emitted: HashSet::new(),
        }
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    #[inline]
    pub fn get(&self, coord: &VoxelCoord) -> Option<&Voxel> {
        self.voxels.get(coord)
    }

    /// Iterates over all stored voxels in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Voxel> {
        self.voxels.values()
    }

    /// Folds one observed point into the store.
    ///
    /// A point landing in a known voxel bumps that voxel's density; a
    /// point in a new voxel inserts it with density 1. Non-finite
    /// points and points whose voxel index would overflow are rejected
    /// without touching any state.
    pub fn add_observation(&mut self, point: &WorldPoint) -> Result<(), MapError> {
        if !point.is_finite() {
            return Err(MapError::NonFiniteObservation {
                x: point.x,
                y: point.y,
                z: point.z,
            });
        }
        let coord = VoxelCoord::from_world(point, self.cell_size).ok_or(
            MapError::QuantizationOverflow {
                x: point.x,
                y: point.y,
                z: point.z,
                cell_size: self.cell_size,
            },
        )?;

        match self.voxels.get_mut(&coord) {
            Some(voxel) => {
                voxel.density = voxel.density.saturating_add(1);
            }
            None => {
                trace!("[Voxel] new voxel at {:?}", coord);
                self.voxels.insert(
                    coord,
                    Voxel {
                        coord,
                        center: coord.center(self.cell_size),
                        density: 1,
                    },
                );
            }
        }
        Ok(())
    }

    /// Folds a batch of points into the store, stopping at the first
    /// invalid point. Points before the invalid one stay applied.
    pub fn add_observations(&mut self, points: &[WorldPoint]) -> Result<(), MapError> {
        for point in points {
            self.add_observation(point)?;
        }
        Ok(())
    }

    /// Returns voxels at or above the density threshold that have not
    /// been emitted yet, and marks the returned ones as emitted.
    ///
    /// With `full_redraw` the emission memory is cleared first, so every
    /// qualifying voxel is returned again.
    pub fn qualifying_voxels(&mut self, threshold: u32, full_redraw: bool) -> Vec<Voxel> {
        self.qualifying_voxels_where(threshold, full_redraw, |_| true)
    }

    /// Like [`qualifying_voxels`], with an extra caller-side filter.
    ///
    /// Voxels the filter rejects are NOT marked as emitted; they remain
    /// eligible for a later snapshot whose filter admits them.
    ///
    /// [`qualifying_voxels`]: VoxelStore::qualifying_voxels
    pub fn qualifying_voxels_where<F>(
        &mut self,
        threshold: u32,
        full_redraw: bool,
        mut keep: F,
    ) -> Vec<Voxel>
    where
        F: FnMut(&Voxel) -> bool,
    {
        if full_redraw {
            self.emitted.clear();
        }

        let mut out = Vec::new();
        for voxel in self.voxels.values() {
            if voxel.density < threshold {
                continue;
            }
            if self.emitted.contains(&voxel.coord) {
                continue;
            }
            if !keep(voxel) {
                continue;
            }
            out.push(*voxel);
        }
        for voxel in &out {
            self.emitted.insert(voxel.coord);
        }
        out
    }
}
