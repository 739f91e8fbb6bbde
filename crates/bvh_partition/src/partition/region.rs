//! Mutable region views over the shared primitive array.

use smallvec::SmallVec;

use crate::constants::MAX_CHILDREN;
use crate::types::{Aabb, Axis, Bounded};

use super::select;
use super::split::ChildOffsets;

/// A contiguous, mutable view over a subrange of the backing primitive
/// array, together with the offsets of its most recent split.
///
/// Regions produced by [`Region::child`] or [`Region::into_children`] alias
/// disjoint subranges of the same backing storage; the borrow checker keeps
/// every view inside the root storage's lifetime.
pub struct Region<'a, P> {
  prims: &'a mut [P],
  offsets: ChildOffsets,
}

impl<'a, P> Region<'a, P> {
  /// Wrap a raw subrange. Fresh regions start with no realized children.
  pub fn new(prims: &'a mut [P]) -> Self {
    Self {
      prims,
      offsets: ChildOffsets::default(),
    }
  }

  /// Number of elements in the region.
  #[inline]
  pub fn len(&self) -> usize {
    self.prims.len()
  }

  /// Check if the region holds no elements.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.prims.is_empty()
  }

  /// Offsets of the most recent split (all zero before any split).
  #[inline]
  pub fn offsets(&self) -> &ChildOffsets {
    &self.offsets
  }

  /// Read-only access to the underlying elements.
  #[inline]
  pub fn as_slice(&self) -> &[P] {
    self.prims
  }

  /// Reborrow the `index`-th child of the most recent split.
  ///
  /// The child is a fresh region (its own offsets start empty) spanning
  /// `[offsets[index], offsets[index + 1])` of this region's subrange. No
  /// elements are copied.
  ///
  /// # Panics
  /// Panics when `index` is not below the realized child count.
  pub fn child(&mut self, index: usize) -> Region<'_, P> {
    assert!(
      index < self.offsets.child_count(),
      "child {index} not realized by the last split"
    );
    let range = self.offsets.child_range(index);
    Region::new(&mut self.prims[range])
  }

  /// Consume the region, carving it into its realized child views.
  ///
  /// The children are disjoint and keep the backing lifetime, so they can
  /// be handed to different tasks. Returns an empty collection before any
  /// split.
  pub fn into_children(self) -> SmallVec<[Region<'a, P>; MAX_CHILDREN]> {
    let Region { prims, offsets } = self;
    let mut children = SmallVec::new();
    let mut rest = prims;
    for i in 0..offsets.child_count() {
      let (head, tail) = rest.split_at_mut(offsets.child_len(i));
      children.push(Region::new(head));
      rest = tail;
    }
    children
  }
}

impl<'a, P: Bounded + Copy> Region<'a, P> {
  /// Axis of greatest span of the union extent of every element.
  ///
  /// Equal spans keep the earlier axis, so the result is deterministic for
  /// degenerate geometry.
  pub fn largest_axis(&self) -> Axis {
    let mut bounds = Aabb::empty();
    for prim in self.prims.iter() {
      bounds.merge(&prim.aabb());
    }
    Axis::largest_of(bounds.size())
  }

  /// Split the region into at most `children` contiguous children with
  /// left-balanced counts, ordered along `axis`.
  ///
  /// Elements are rearranged in place so that for every adjacent child
  /// pair, every key in the left child is <= every key in the right child.
  /// Within a child, order is unspecified. Returns the number of children
  /// actually realized, which is lower than requested when there are not
  /// enough elements to populate every child.
  ///
  /// # Panics
  /// Panics when the region is empty or `children` is outside
  /// `2..=MAX_CHILDREN`.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "partition::mean_split")
  )]
  pub fn mean_split(&mut self, children: usize, axis: Axis) -> usize {
    let n = self.len();
    assert!(n > 0, "cannot split an empty region");

    self.offsets = ChildOffsets::plan(n, children);
    let realized = self.offsets.child_count();

    // Carve each internal boundary in increasing order. Earlier boundaries
    // stay fixed because later selections only touch [prev, n).
    for boundary in 1..realized {
      let prev = self.offsets.offset(boundary - 1);
      let nth = self.offsets.offset(boundary);
      debug_assert!(prev < nth && nth < n);
      select::select_nth(&mut self.prims[prev..n], axis, nth - prev);
    }

    debug_assert_eq!(self.offsets.offset(0), 0);
    debug_assert_eq!(self.offsets.offset(realized), n);

    #[cfg(feature = "tracing")]
    tracing::trace!(len = n, requested = children, realized, "mean_split");

    realized
  }

  /// Split on the axis of greatest extent of the region.
  pub fn mean_split_on_largest_axis(&mut self, children: usize) -> usize {
    let axis = self.largest_axis();
    self.mean_split(children, axis)
  }
}

impl<'a, P: Send> Region<'a, P> {
  /// Run `op` on every realized child of the most recent split,
  /// concurrently.
  ///
  /// Children view disjoint index ranges of the backing array, so they need
  /// no synchronization; rayon joins every task before returning.
  pub fn par_children<F>(self, op: F)
  where
    F: Fn(usize, Region<'a, P>) + Sync,
  {
    let children = self.into_children();
    rayon::scope(|scope| {
      for (index, child) in children.into_iter().enumerate() {
        let op = &op;
        scope.spawn(move |_| op(index, child));
      }
    });
  }
}
