use std::fmt;

use crate::node::PriorityNode;

/// Backing storage for [`MinHeap`](crate::MinHeap).
///
/// A plain ordered sequence of nodes. Two stores are equal only if they
/// hold the same nodes in the same order; the layout is never
/// canonicalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HeapStore {
    nodes: Vec<PriorityNode>,
}

impl HeapStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create a store holding `nodes` in the given order.
    pub fn from_nodes(nodes: Vec<PriorityNode>) -> Self {
        Self { nodes }
    }

    /// Create an empty store with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Append a node at the end.
    #[inline]
    pub fn push(&mut self, node: PriorityNode) {
        self.nodes.push(node);
    }

    /// Exchange the nodes at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.nodes.swap(a, b);
    }

    /// Remove and return the last node.
    #[inline]
    pub fn pop(&mut self) -> Option<PriorityNode> {
        self.nodes.pop()
    }

    /// Priority of the node at `i`.
    #[inline]
    pub(crate) fn priority_at(&self, i: usize) -> u32 {
        self.nodes[i].priority
    }

    /// The stored nodes, in storage order.
    #[inline]
    pub fn nodes(&self) -> &[PriorityNode] {
        &self.nodes
    }

    /// Number of stored nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the store is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn into_nodes(self) -> Vec<PriorityNode> {
        self.nodes
    }
}

impl fmt::Display for HeapStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nodes: ")?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}
