use std::fmt;

use crate::node::PriorityNode;
use crate::store::HeapStore;

// ---------------------------------------------------------------------------
// Index arithmetic for the complete-binary-tree encoding
// ---------------------------------------------------------------------------

#[inline]
const fn parent(i: usize) -> usize {
    (i + 1) / 2 - 1
}

#[inline]
const fn left(i: usize) -> usize {
    (i + 1) * 2 - 1
}

#[inline]
const fn right(i: usize) -> usize {
    (i + 1) * 2
}

// ---------------------------------------------------------------------------
// MinHeap
// ---------------------------------------------------------------------------

/// A min-priority queue of [`PriorityNode`]s backed by a binary heap.
///
/// The node with the lowest `priority` is always at the root. Among equal
/// priorities no particular order is guaranteed.
///
/// A `MinHeap` is meant to have a single owner. Mutating one from several
/// threads requires external synchronization (for example a `Mutex`).
///
/// Equality is structural: two queues are equal when they have the same
/// size and their storage holds the same nodes in the same order. Queues
/// built along different paths from the same nodes may therefore differ.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinHeap {
    store: HeapStore,
    size: usize,
}

impl MinHeap {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            store: HeapStore::new(),
            size: 0,
        }
    }

    /// Create an empty queue with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: HeapStore::with_capacity(capacity),
            size: 0,
        }
    }

    /// Build a queue from arbitrary nodes.
    ///
    /// Nodes are loaded in input order, then [`heapify`](Self::heapify)
    /// restores heap order.
    pub fn of(nodes: impl IntoIterator<Item = PriorityNode>) -> Self {
        let store = HeapStore::from_nodes(nodes.into_iter().collect());
        let size = store.len();
        let mut heap = Self { store, size };
        heap.heapify();
        log::trace!("min-heap: built from {size} nodes");
        heap
    }

    /// Wrap `store` as-is, without reordering.
    ///
    /// The caller is responsible for `store` already being in heap order.
    /// Mostly useful for describing an exact expected layout in tests.
    pub fn from_raw_parts(store: HeapStore) -> Self {
        let size = store.len();
        Self { store, size }
    }

    /// Number of nodes in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The backing storage, in heap layout.
    #[inline]
    pub fn store(&self) -> &HeapStore {
        &self.store
    }

    /// The node with the lowest priority, without removing it.
    pub fn peek(&self) -> Option<&PriorityNode> {
        self.store.nodes().first()
    }

    /// Insert a node.
    pub fn enqueue(&mut self, node: PriorityNode) {
        self.store.push(node);
        self.size += 1;
        self.sift_up(self.size - 1);
    }

    /// Remove and return a node with the lowest priority.
    ///
    /// Returns [`HeapError::Empty`] if the queue holds no nodes.
    pub fn dequeue(&mut self) -> Result<PriorityNode, HeapError> {
        if self.size == 0 {
            return Err(HeapError::Empty);
        }
        // Park the root in the last live slot, then shrink the logical heap
        // so sift_down no longer sees it.
        self.store.swap(0, self.size - 1);
        self.size -= 1;
        self.sift_down(0);
        self.store.pop().ok_or(HeapError::Empty)
    }

    /// Restore heap order over every stored node.
    ///
    /// Sifts each internal node down, starting from the last one.
    pub fn heapify(&mut self) {
        for i in (0..self.size / 2).rev() {
            self.sift_down(i);
        }
    }

    /// Drain the queue into a vector, lowest priority first.
    pub fn into_sorted_vec(mut self) -> Vec<PriorityNode> {
        let mut out = Vec::with_capacity(self.size);
        while let Ok(node) = self.dequeue() {
            out.push(node);
        }
        out
    }

    /// Consume the queue and return its storage in heap layout.
    pub fn into_vec(self) -> Vec<PriorityNode> {
        self.store.into_nodes()
    }

    // -----------------------------------------------------------------------
    // Sifting
    // -----------------------------------------------------------------------

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 && i < self.size {
            let p = parent(i);
            if self.store.priority_at(p) <= self.store.priority_at(i) {
                break;
            }
            self.store.swap(i, p);
            i = p;
        }
    }

    /// Sift down within the logical size. Prefers the right child only when
    /// it is strictly smaller than both the node and the left child.
    fn sift_down(&mut self, mut i: usize) {
        while left(i) < self.size {
            let l = left(i);
            let r = right(i);
            let cur = self.store.priority_at(i);
            let lp = self.store.priority_at(l);
            if r < self.size {
                let rp = self.store.priority_at(r);
                if rp < cur && rp < lp {
                    self.store.swap(i, r);
                    i = r;
                    continue;
                }
            }
            if lp < cur {
                self.store.swap(i, l);
                i = l;
            } else {
                break;
            }
        }
    }
}

impl FromIterator<PriorityNode> for MinHeap {
    fn from_iter<I: IntoIterator<Item = PriorityNode>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl From<Vec<PriorityNode>> for MinHeap {
    fn from(nodes: Vec<PriorityNode>) -> Self {
        Self::of(nodes)
    }
}

impl fmt::Display for MinHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MinHeap(size {}) {}", self.size, self.store)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MinHeap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.store, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MinHeap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let nodes: Vec<PriorityNode> = serde::Deserialize::deserialize(deserializer)?;
        // Input order is untrusted; re-establish heap order.
        Ok(MinHeap::of(nodes))
    }
}

/// Errors returned by [`MinHeap`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `dequeue` was called on a queue with no nodes.
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "min-heap: dequeue from an empty queue"),
        }
    }
}

impl std::error::Error for HeapError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use effort_core::Coordinates;

    #[test]
    fn min_heap_round_trip() {
        let heap = MinHeap::of(vec![
            PriorityNode::new(3, Coordinates::new(0, 1)),
            PriorityNode::new(1, Coordinates::new(2, 2)),
        ]);
        let json = serde_json::to_string(&heap).unwrap();
        let back: MinHeap = serde_json::from_str(&json).unwrap();
        assert_eq!(heap, back);
    }

    #[test]
    fn unordered_input_is_heapified() {
        let json = r#"[
            {"priority":5,"coordinates":{"row":0,"column":0}},
            {"priority":1,"coordinates":{"row":0,"column":1}}
        ]"#;
        let mut heap: MinHeap = serde_json::from_str(json).unwrap();
        assert_eq!(heap.dequeue().map(|n| n.priority), Ok(1));
    }
}
