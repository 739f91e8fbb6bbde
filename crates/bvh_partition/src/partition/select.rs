//! Order-statistic selection over a primitive range.
//!
//! An adapted `nth_element`: repeated median-of-three pivoting with a Hoare
//! two-pointer partition, finishing small ranges with a stable insertion
//! sort. The comparison key of an element is the **maximum** coordinate of
//! its own extent along the split axis (not its center and not its minimum),
//! which pins down where primitives with overlapping extents land.

use crate::constants::SMALL_RANGE;
use crate::types::{Axis, Bounded};

/// Comparison key: the upper extent of `prim` along `axis`.
#[inline]
fn axis_key<P: Bounded>(prim: &P, axis: Axis) -> f32 {
  prim.aabb().max[axis.index()]
}

/// Index of the median key among positions `a`, `b`, `c`.
fn median_of_three<P: Bounded>(prims: &[P], axis: Axis, a: usize, b: usize, c: usize) -> usize {
  let fa = axis_key(&prims[a], axis);
  let fb = axis_key(&prims[b], axis);
  let fc = axis_key(&prims[c], axis);

  if fb < fa {
    if fc < fb {
      b
    } else if fc < fa {
      c
    } else {
      a
    }
  } else if fc < fb {
    if fc < fa {
      a
    } else {
      c
    }
  } else {
    b
  }
}

/// Hoare two-pointer pass over `[lo, hi)` around the key at `pivot`.
///
/// Returns a split point strictly inside the range: everything left of it
/// has a key <= the pivot key, everything at or right of it has a key >= it.
fn partition_once<P: Bounded>(
  prims: &mut [P],
  axis: Axis,
  lo: usize,
  pivot: usize,
  hi: usize,
) -> usize {
  let x = axis_key(&prims[pivot], axis);

  let mut i = lo;
  let mut j = hi;
  loop {
    while axis_key(&prims[i], axis) < x {
      i += 1;
    }
    j -= 1;
    while x < axis_key(&prims[j], axis) {
      j -= 1;
    }
    if i >= j {
      return i;
    }
    prims.swap(i, j);
    i += 1;
  }
}

/// Stable insertion sort over `[lo, hi)`.
fn insertion_sort<P: Bounded + Copy>(prims: &mut [P], axis: Axis, lo: usize, hi: usize) {
  for i in lo..hi {
    let held = prims[i];
    let held_key = axis_key(&held, axis);
    let mut j = i;
    while j != lo && held_key < axis_key(&prims[j - 1], axis) {
      prims[j] = prims[j - 1];
      j -= 1;
    }
    prims[j] = held;
  }
}

/// Rearrange `prims` in place so the element at `n` sits at its ordered
/// position along `axis`.
///
/// Afterwards every element before `n` has a key <= the key at `n` and every
/// element at or after `n` has a key >= it; no further ordering is
/// guaranteed. Terminates for any key distribution, including all-equal
/// keys.
///
/// # Panics
/// Panics when `n` is not a valid position in `prims`.
pub fn select_nth<P: Bounded + Copy>(prims: &mut [P], axis: Axis, n: usize) {
  assert!(
    n < prims.len(),
    "order statistic {n} outside range 0..{}",
    prims.len()
  );

  let mut begin = 0;
  let mut end = prims.len();
  while end - begin > SMALL_RANGE {
    let mid = begin + (end - begin) / 2;
    let pivot = median_of_three(prims, axis, begin, mid, end - 1);
    let cut = partition_once(prims, axis, begin, pivot, end);
    if cut <= n {
      begin = cut;
    } else {
      end = cut;
    }
  }
  insertion_sort(prims, axis, begin, end);
}

#[cfg(test)]
#[path = "select_test.rs"]
mod select_test;
