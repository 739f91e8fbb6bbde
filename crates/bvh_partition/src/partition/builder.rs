//! Root owner of the primitive backing array.

use std::collections::TryReserveError;

use thiserror::Error;

use super::region::Region;

/// Errors surfaced while setting up a build.
#[derive(Debug, Error)]
pub enum BuildError {
  /// Backing storage for the requested capacity could not be allocated.
  #[error("failed to reserve storage for {capacity} primitives")]
  Allocation {
    /// Requested primitive capacity.
    capacity: usize,
    /// Underlying reservation failure.
    source: TryReserveError,
  },
}

/// Owns the backing primitive array and hands out the root region.
///
/// The builder is filled once, up to the capacity it was created with, and
/// then split repeatedly through [`Builder::region`]. Child regions borrow
/// the same storage and cannot outlive it; the storage is released exactly
/// once, when the builder is dropped.
pub struct Builder<P> {
  prims: Vec<P>,
  capacity: usize,
}

impl<P> Builder<P> {
  /// Reserve backing storage for up to `capacity` primitive references.
  ///
  /// Allocation failure is reported to the caller; no partial state is
  /// retained.
  pub fn create(capacity: usize) -> Result<Self, BuildError> {
    let mut prims = Vec::new();
    prims
      .try_reserve_exact(capacity)
      .map_err(|source| BuildError::Allocation { capacity, source })?;
    Ok(Self { prims, capacity })
  }

  /// Append a primitive reference into the next free slot.
  ///
  /// # Panics
  /// Panics when called beyond the capacity passed to [`Builder::create`].
  pub fn add(&mut self, prim: P) {
    assert!(
      self.prims.len() < self.capacity,
      "builder is full ({} primitives)",
      self.capacity
    );
    self.prims.push(prim);
  }

  /// Number of primitives added so far.
  #[inline]
  pub fn len(&self) -> usize {
    self.prims.len()
  }

  /// Check if no primitives were added yet.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.prims.is_empty()
  }

  /// Mutable view over every primitive added so far.
  pub fn region(&mut self) -> Region<'_, P> {
    Region::new(&mut self.prims)
  }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
