//! Core value types shared by the partitioning modules.

use glam::Vec3;

/// Axis-aligned bounding box over single-precision extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
  /// Minimum corner.
  pub min: Vec3,
  /// Maximum corner.
  pub max: Vec3,
}

impl Aabb {
  /// Create an AABB with inverted extents (ready for merging).
  ///
  /// Merging any real box into an empty one yields that box.
  pub fn empty() -> Self {
    Self {
      min: Vec3::INFINITY,
      max: Vec3::NEG_INFINITY,
    }
  }

  /// Create an AABB from min and max corners.
  ///
  /// # Panics
  /// Debug-asserts that min <= max on all axes.
  pub fn new(min: Vec3, max: Vec3) -> Self {
    debug_assert!(
      min.x <= max.x && min.y <= max.y && min.z <= max.z,
      "AABB min must be <= max on all axes"
    );
    Self { min, max }
  }

  /// Expand this AABB to enclose another.
  #[inline]
  pub fn merge(&mut self, other: &Aabb) {
    self.min = self.min.min(other.min);
    self.max = self.max.max(other.max);
  }

  /// Extent of the box (max - min).
  #[inline]
  pub fn size(&self) -> Vec3 {
    self.max - self.min
  }

  /// Check if the AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
  }
}

impl Default for Aabb {
  fn default() -> Self {
    Self::empty()
  }
}

/// Split axis selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
  X,
  Y,
  Z,
}

impl Axis {
  /// All three axes, in index order.
  pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

  /// Coordinate index of this axis (X = 0, Y = 1, Z = 2).
  #[inline]
  pub fn index(self) -> usize {
    match self {
      Axis::X => 0,
      Axis::Y => 1,
      Axis::Z => 2,
    }
  }

  /// Axis of greatest span in `extent`.
  ///
  /// Comparisons are strict, so equal spans keep the earlier axis.
  pub fn largest_of(extent: Vec3) -> Axis {
    let mut best = Axis::X;
    for axis in [Axis::Y, Axis::Z] {
      if extent[axis.index()] > extent[best.index()] {
        best = axis;
      }
    }
    best
  }
}

/// Capability to report an axis-aligned bounding extent.
///
/// Implementations must be pure and deterministic for a fixed primitive
/// state: the partitioner calls this repeatedly inside hot comparison paths
/// and never caches the result.
pub trait Bounded {
  /// The primitive's bounding extent.
  fn aabb(&self) -> Aabb;
}
