//! Coordinate types: world positions, voxel indices, and grid addresses.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A point in continuous 3D world coordinates (meters).
///
/// The world frame is Y-up: `x` and `z` span the horizontal plane,
/// `y` is height.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPoint {
    pub const ZERO: WorldPoint = WorldPoint {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        WorldPoint { x, y, z }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Distance projected onto the horizontal (XZ) plane, ignoring height.
    #[inline]
    pub fn distance_xz(&self, other: &WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// True when all three components are finite (no NaN, no infinities).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for WorldPoint {
    type Output = WorldPoint;

    #[inline]
    fn add(self, other: WorldPoint) -> WorldPoint {
        WorldPoint::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for WorldPoint {
    type Output = WorldPoint;

    #[inline]
    fn sub(self, other: WorldPoint) -> WorldPoint {
        WorldPoint::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f32> for WorldPoint {
    type Output = WorldPoint;

    #[inline]
    fn mul(self, scalar: f32) -> WorldPoint {
        WorldPoint::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

/// Integer index of a voxel in the sparse store.
///
/// A world point maps to the voxel containing it by flooring each
/// component divided by the cell size, so every point strictly inside
/// a cell maps to the same index regardless of sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VoxelCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelCoord {
    #[inline]
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        VoxelCoord { x, y, z }
    }

    /// Quantizes a world point to its voxel index.
    ///
    /// Returns `None` when any component is non-finite or the resulting
    /// index does not fit in an `i32`. The division is carried out in
    /// `f64` so the range check is exact even for coordinates near the
    /// overflow boundary.
    pub fn from_world(point: &WorldPoint, cell_size: f32) -> Option<Self> {
        Some(VoxelCoord {
            x: quantize(point.x, cell_size)?,
            y: quantize(point.y, cell_size)?,
            z: quantize(point.z, cell_size)?,
        })
    }

    /// World position of this voxel's center.
    #[inline]
    pub fn center(&self, cell_size: f32) -> WorldPoint {
        WorldPoint::new(
            (self.x as f32 + 0.5) * cell_size,
            (self.y as f32 + 0.5) * cell_size,
            (self.z as f32 + 0.5) * cell_size,
        )
    }
}

#[inline]
fn quantize(v: f32, cell_size: f32) -> Option<i32> {
    let idx = (f64::from(v) / f64::from(cell_size)).floor();
    if idx >= f64::from(i32::MIN) && idx <= f64::from(i32::MAX) {
        Some(idx as i32)
    } else {
        None
    }
}

/// Row/column address of a cell in the projected 2D grid.
///
/// Rows run along decreasing world X, columns along decreasing world Z;
/// see `GridProjection` for the exact mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    pub row: i32,
    pub col: i32,
}

impl GridCoord {
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        GridCoord { row, col }
    }

    /// All 8 neighbors. The four orthogonal neighbors come first, so the
    /// index into this array tells the caller whether a step is diagonal
    /// (index >= 4).
    pub fn neighbors_8(&self) -> [GridCoord; 8] {
        [
            GridCoord::new(self.row - 1, self.col),     // up
            GridCoord::new(self.row + 1, self.col),     // down
            GridCoord::new(self.row, self.col - 1),     // left
            GridCoord::new(self.row, self.col + 1),     // right
            GridCoord::new(self.row - 1, self.col - 1), // up-left
            GridCoord::new(self.row - 1, self.col + 1), // up-right
            GridCoord::new(self.row + 1, self.col - 1), // down-left
            GridCoord::new(self.row + 1, self.col + 1), // down-right
        ]
    }

    /// Manhattan distance to another coordinate.
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Chebyshev distance: 1 for any adjacent cell, diagonals included.
    #[inline]
    pub fn chebyshev_distance(&self, other: &GridCoord) -> i32 {
        (self.row - other.row).abs().max((self.col - other.col).abs())
    }

    /// Euclidean distance in cell units.
    #[inline]
    pub fn euclidean_distance(&self, other: &GridCoord) -> f32 {
        let dr = (self.row - other.row) as f32;
        let dc = (self.col - other.col) as f32;
        (dr * dr + dc * dc).sqrt()
    }
}

impl Add for GridCoord {
    type Output = GridCoord;

    #[inline]
    fn add(self, other: GridCoord) -> GridCoord {
        GridCoord::new(self.row + other.row, self.col + other.col)
    }
}

impl Sub for GridCoord {
    type Output = GridCoord;

    #[inline]
    fn sub(self, other: GridCoord) -> GridCoord {
        GridCoord::new(self.row - other.row, self.col - other.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_point_distance() {
        let a = WorldPoint::new(0.0, 0.0, 0.0);
        let b = WorldPoint::new(3.0, 4.0, 0.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_world_point_distance_xz_ignores_height() {
        let a = WorldPoint::new(0.0, 10.0, 0.0);
        let b = WorldPoint::new(3.0, -2.0, 4.0);
        assert!((a.distance_xz(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_world_point_is_finite() {
        assert!(WorldPoint::new(1.0, 2.0, 3.0).is_finite());
        assert!(!WorldPoint::new(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!WorldPoint::new(0.0, f32::INFINITY, 0.0).is_finite());
    }

    #[test]
    fn test_world_point_arithmetic() {
        let a = WorldPoint::new(1.0, 2.0, 3.0);
        let b = WorldPoint::new(0.5, 0.5, 0.5);
        let sum = a + b;
        assert!((sum.x - 1.5).abs() < 1e-6);
        let diff = a - b;
        assert!((diff.z - 2.5).abs() < 1e-6);
        let scaled = a * 2.0;
        assert!((scaled.y - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_voxel_quantization_floors_toward_negative() {
        let cell = 0.1;
        let p = WorldPoint::new(-0.05, 0.05, -0.15);
        let v = VoxelCoord::from_world(&p, cell).unwrap();
        assert_eq!(v, VoxelCoord::new(-1, 0, -2));
    }

    #[test]
    fn test_voxel_quantization_same_cell() {
        let cell = 0.1;
        let a = VoxelCoord::from_world(&WorldPoint::new(0.31, 0.02, 0.99), cell).unwrap();
        let b = VoxelCoord::from_world(&WorldPoint::new(0.39, 0.08, 0.91), cell).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_voxel_quantization_rejects_non_finite() {
        assert!(VoxelCoord::from_world(&WorldPoint::new(f32::NAN, 0.0, 0.0), 0.1).is_none());
        assert!(VoxelCoord::from_world(&WorldPoint::new(0.0, f32::INFINITY, 0.0), 0.1).is_none());
    }

    #[test]
    fn test_voxel_quantization_rejects_overflow() {
        // 1e30 / 0.1 is far beyond i32 range.
        assert!(VoxelCoord::from_world(&WorldPoint::new(1e30, 0.0, 0.0), 0.1).is_none());
        assert!(VoxelCoord::from_world(&WorldPoint::new(0.0, 0.0, -1e30), 0.1).is_none());
    }

    #[test]
    fn test_voxel_center_round_trips() {
        let cell = 0.25;
        let v = VoxelCoord::new(3, -2, 7);
        let back = VoxelCoord::from_world(&v.center(cell), cell).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_grid_coord_neighbors_order() {
        let c = GridCoord::new(5, 5);
        let neighbors = c.neighbors_8();
        // Orthogonal neighbors occupy the first four slots.
        for n in &neighbors[..4] {
            assert_eq!(c.manhattan_distance(n), 1);
        }
        for n in &neighbors[4..] {
            assert_eq!(c.manhattan_distance(n), 2);
            assert_eq!(c.chebyshev_distance(n), 1);
        }
    }

    #[test]
    fn test_grid_coord_distances() {
        let a = GridCoord::new(0, 0);
        let b = GridCoord::new(3, 4);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(a.chebyshev_distance(&b), 4);
        assert!((a.euclidean_distance(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_grid_coord_arithmetic() {
        let a = GridCoord::new(3, 4);
        let step = GridCoord::new(-1, 1);
        assert_eq!(a + step, GridCoord::new(2, 5));
        assert_eq!(a - step, GridCoord::new(4, 3));
    }
}
