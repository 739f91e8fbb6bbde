//! Compile-time bounds for the partitioning core.

/// Maximum fan-out a single split may request.
///
/// The child offset table is an inline array sized to this bound.
/// Requesting more children is a contract violation and panics.
pub const MAX_CHILDREN: usize = 8;

/// Ranges at or below this length finish with insertion sort instead of
/// further pivoting.
pub(crate) const SMALL_RANGE: usize = 3;
