//! Horizontal extent of the mapped region.
//!
//! [`HorizontalBounds`] tracks the axis-aligned rectangle on the ground
//! plane (world XZ) covered by the voxels observed so far. A fresh value
//! starts in the empty state and grows one point at a time.
//!
//! # Examples
//!
//! ```
//! use ghana_map::{HorizontalBounds, WorldPoint};
//!
//! let mut bounds = HorizontalBounds::empty();
//! assert!(bounds.is_empty());
//!
//! bounds.expand_to_include(&WorldPoint::new(1.0, 0.0, -2.0));
//! bounds.expand_to_include(&WorldPoint::new(-1.0, 5.0, 3.0));
//!
//! assert!(!bounds.is_empty());
//! assert!((bounds.width() - 2.0).abs() < 1e-6);
//! assert!((bounds.depth() - 5.0).abs() < 1e-6);
//! ```

use crate::core::WorldPoint;

/// Axis-aligned bounds on the horizontal (XZ) plane.
///
/// The empty state is represented by inverted infinite bounds, which
/// fold correctly under `min`/`max` without any magic sentinel values.
/// Heights (world Y) do not participate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl HorizontalBounds {
    #[inline]
    pub fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32) -> Self {
        HorizontalBounds {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// Bounds covering nothing. Expanding with any finite point makes
    /// them non-empty.
    #[inline]
    pub fn empty() -> Self {
        HorizontalBounds {
            min_x: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            min_z: f32::INFINITY,
            max_z: f32::NEG_INFINITY,
        }
    }

    /// True when no point has been included yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_z > self.max_z
    }

    /// Bounds covering exactly one point.
    #[inline]
    pub fn from_point(point: &WorldPoint) -> Self {
        HorizontalBounds::new(point.x, point.x, point.z, point.z)
    }

    /// Grows the bounds to include the given point's XZ position.
    #[inline]
    pub fn expand_to_include(&mut self, point: &WorldPoint) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_z = self.min_z.min(point.z);
        self.max_z = self.max_z.max(point.z);
    }

    /// Extent along world X. Zero for empty bounds.
    #[inline]
    pub fn width(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.max_x - self.min_x
        }
    }

    /// Extent along world Z. Zero for empty bounds.
    #[inline]
    pub fn depth(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.max_z - self.min_z
        }
    }

    /// True when the point's XZ position lies within the bounds
    /// (inclusive on all edges).
    #[inline]
    pub fn contains(&self, point: &WorldPoint) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.z >= self.min_z
            && point.z <= self.max_z
    }
}
