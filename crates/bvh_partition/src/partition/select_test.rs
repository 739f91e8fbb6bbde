use glam::Vec3;

use super::*;
use crate::types::{Aabb, Axis, Bounded};

/// Test primitive: a unit-deep box whose upper X extent is the sort key.
/// `id` tags the original position so stability can be checked.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Prim {
  key: f32,
  id: usize,
}

impl Prim {
  fn new(key: f32, id: usize) -> Self {
    Self { key, id }
  }
}

impl Bounded for Prim {
  fn aabb(&self) -> Aabb {
    Aabb::new(
      Vec3::new(self.key - 1.0, -1.0, 0.0),
      Vec3::new(self.key, self.id as f32, 1.0),
    )
  }
}

fn prims(keys: &[f32]) -> Vec<Prim> {
  keys
    .iter()
    .enumerate()
    .map(|(id, &key)| Prim::new(key, id))
    .collect()
}

/// The quickselect guarantee: everything left of `n` compares <= the key at
/// `n`, everything at or right of `n` compares >= it.
fn assert_selected(prims: &[Prim], n: usize) {
  let nth = prims[n].key;
  for (i, prim) in prims.iter().enumerate() {
    if i < n {
      assert!(prim.key <= nth, "position {i} ({}) > nth ({nth})", prim.key);
    } else {
      assert!(prim.key >= nth, "position {i} ({}) < nth ({nth})", prim.key);
    }
  }
}

#[test]
fn test_select_every_rank() {
  let keys = [5.0, 1.0, 9.0, 3.0, 7.0, 2.0, 8.0];
  for n in 0..keys.len() {
    let mut set = prims(&keys);
    select_nth(&mut set, Axis::X, n);
    assert_selected(&set, n);
  }
}

#[test]
fn test_select_with_duplicates() {
  let keys = [4.0, 4.0, 1.0, 4.0, 2.0, 4.0, 2.0, 1.0, 4.0, 3.0];
  for n in 0..keys.len() {
    let mut set = prims(&keys);
    select_nth(&mut set, Axis::X, n);
    assert_selected(&set, n);
  }
}

#[test]
fn test_select_all_equal_keys_terminates() {
  let mut set = prims(&[2.5; 33]);
  select_nth(&mut set, Axis::X, 16);
  assert_selected(&set, 16);
}

#[test]
fn test_select_sorted_and_reversed() {
  let ascending: Vec<f32> = (0..64).map(|i| i as f32).collect();
  let descending: Vec<f32> = (0..64).rev().map(|i| i as f32).collect();
  for keys in [ascending, descending] {
    let mut set = prims(&keys);
    select_nth(&mut set, Axis::X, 20);
    assert_selected(&set, 20);
    assert_eq!(set[20].key, 20.0);
  }
}

#[test]
fn test_small_ranges_end_up_sorted() {
  // Ranges at or below the pivot cutoff fall through to insertion sort.
  let mut set = prims(&[3.0, 1.0, 2.0]);
  select_nth(&mut set, Axis::X, 1);
  let keys: Vec<f32> = set.iter().map(|p| p.key).collect();
  assert_eq!(keys, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_single_element() {
  let mut set = prims(&[7.0]);
  select_nth(&mut set, Axis::X, 0);
  assert_eq!(set[0].key, 7.0);
}

#[test]
fn test_key_is_max_extent_on_requested_axis() {
  // Keys on Y come from max.y, which is the id here: selecting on Y must
  // reorder by id regardless of the X extents.
  let mut set = vec![
    Prim::new(1.0, 9),
    Prim::new(2.0, 4),
    Prim::new(3.0, 7),
    Prim::new(4.0, 1),
    Prim::new(5.0, 8),
    Prim::new(6.0, 2),
    Prim::new(7.0, 6),
  ];
  select_nth(&mut set, Axis::Y, 3);
  let nth = set[3].id;
  for (i, prim) in set.iter().enumerate() {
    if i < 3 {
      assert!(prim.id <= nth);
    } else {
      assert!(prim.id >= nth);
    }
  }
}

#[test]
fn test_insertion_sort_is_stable() {
  let mut set = vec![
    Prim::new(5.0, 0),
    Prim::new(5.0, 1),
    Prim::new(3.0, 2),
  ];
  insertion_sort(&mut set, Axis::X, 0, 3);
  assert_eq!(set[0], Prim::new(3.0, 2));
  assert_eq!(set[1], Prim::new(5.0, 0));
  assert_eq!(set[2], Prim::new(5.0, 1));
}

#[test]
fn test_median_of_three_picks_middle_value() {
  // All six orderings of three distinct keys select the index holding 2.0.
  let orderings = [
    [1.0, 2.0, 3.0],
    [1.0, 3.0, 2.0],
    [2.0, 1.0, 3.0],
    [2.0, 3.0, 1.0],
    [3.0, 1.0, 2.0],
    [3.0, 2.0, 1.0],
  ];
  for keys in orderings {
    let set = prims(&keys);
    let median = median_of_three(&set, Axis::X, 0, 1, 2);
    assert_eq!(set[median].key, 2.0, "ordering {keys:?}");
  }
}

#[test]
fn test_median_of_three_equal_keys_returns_middle_index() {
  let set = prims(&[1.0, 1.0, 1.0]);
  assert_eq!(median_of_three(&set, Axis::X, 0, 1, 2), 1);
}

#[test]
#[should_panic(expected = "order statistic")]
fn test_rank_out_of_range_panics() {
  let mut set = prims(&[1.0, 2.0, 3.0]);
  select_nth(&mut set, Axis::X, 3);
}
