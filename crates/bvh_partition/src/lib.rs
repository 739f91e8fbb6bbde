//! bvh_partition - balanced in-place space partitioning for BVH builds
//!
//! This crate organizes an unordered collection of renderable primitives
//! into balanced, axis-coherent contiguous groups - the heavy step of
//! building a k-ary bounding volume hierarchy. All splits happen in place
//! over one shared backing array; children are disjoint borrowed views that
//! can be split again recursively, sequentially or in parallel.
//!
//! # Features
//!
//! - **Left-balanced multi-way splits**: a split realizes exactly as many
//!   non-empty children as the element count allows, sized for a complete
//!   k-ary tree
//! - **Order-statistic selection**: generalized quickselect with
//!   median-of-three pivoting and an insertion-sort fallback, so nothing is
//!   ever fully sorted
//! - **Disjoint child views**: children borrow non-overlapping subranges,
//!   making post-split recursion safe to parallelize with rayon
//!
//! # Example
//!
//! ```ignore
//! use bvh_partition::{Aabb, Bounded, Builder};
//!
//! #[derive(Clone, Copy)]
//! struct Sphere {
//!   center: glam::Vec3,
//!   radius: f32,
//! }
//!
//! impl Bounded for Sphere {
//!   fn aabb(&self) -> Aabb {
//!     Aabb::new(self.center - self.radius, self.center + self.radius)
//!   }
//! }
//!
//! let mut builder = Builder::create(spheres.len())?;
//! for sphere in spheres {
//!   builder.add(sphere);
//! }
//!
//! let mut root = builder.region();
//! let realized = root.mean_split_on_largest_axis(4);
//! for child in 0..realized {
//!   // recurse into root.child(child) until a leaf threshold is reached
//! }
//! ```

pub mod constants;
pub mod types;

// Re-export commonly used items
pub use constants::MAX_CHILDREN;
pub use types::{Aabb, Axis, Bounded};

// Partitioning core
pub mod partition;
pub use partition::{BuildError, Builder, ChildOffsets, Region};
