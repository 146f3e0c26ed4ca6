//! Minimum-effort path search on integer grids.
//!
//! The *effort* of a path is the largest absolute difference between two
//! consecutive cells along it. [`MinEffortSearch`] finds the smallest
//! achievable effort from the top-left to the bottom-right corner of a
//! [`Board`](effort_core::Board), moving in the four axis directions.
//!
//! The search is Dijkstra's algorithm with `max` in place of `+` as the
//! relaxation step, running on a [`MinHeap`](effort_heap::MinHeap). Since
//! extending a path never lowers its effort, a cell popped for the first
//! time already carries its final value. Later, more expensive entries for
//! the same cell are dropped when popped (lazy deletion).

mod neighbors;
mod search;

pub use neighbors::Neighbors;
pub use search::{MinEffortSearch, min_effort};
