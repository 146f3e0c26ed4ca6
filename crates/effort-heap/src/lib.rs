//! Binary min-heap priority queue for grid searches.
//!
//! The queue is a complete binary tree encoded in a flat array:
//!
//! | Relation | Index |
//! |---|---|
//! | parent of `i` | `(i + 1) / 2 - 1` |
//! | left child of `i` | `2 * (i + 1) - 1` |
//! | right child of `i` | `2 * (i + 1)` |
//!
//! [`MinHeap`] keeps every parent's priority at most its children's, so the
//! root is always a minimum. Entries are [`PriorityNode`]s pairing an
//! effort value with the [`Coordinates`](effort_core::Coordinates) they
//! refer to. There is no decrease-key: searches push duplicates and discard
//! stale entries when they are popped.

mod min_heap;
mod node;
mod store;

pub use min_heap::{HeapError, MinHeap};
pub use node::PriorityNode;
pub use store::HeapStore;
