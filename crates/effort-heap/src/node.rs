use effort_core::Coordinates;
use std::fmt;

/// A queue entry: an effort value and the cell it was reached at.
///
/// Efforts are never negative, so `priority` is unsigned. The heap orders
/// entries by `priority` alone. Equality compares both fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriorityNode {
    pub priority: u32,
    pub coordinates: Coordinates,
}

impl PriorityNode {
    /// Create a new node.
    #[inline]
    pub const fn new(priority: u32, coordinates: Coordinates) -> Self {
        Self {
            priority,
            coordinates,
        }
    }
}

impl fmt::Display for PriorityNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.priority, self.coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_node() {
        let a = PriorityNode::new(1, Coordinates::new(2, 3));
        let b = PriorityNode::new(1, Coordinates::new(2, 3));
        assert_eq!(a.priority, 1);
        assert_eq!(a.coordinates.row, 2);
        assert_eq!(a.coordinates.column, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn equality_uses_both_fields() {
        let a = PriorityNode::new(1, Coordinates::new(0, 0));
        assert_ne!(a, PriorityNode::new(2, Coordinates::new(0, 0)));
        assert_ne!(a, PriorityNode::new(1, Coordinates::new(0, 1)));
    }

    #[test]
    fn display() {
        assert_eq!(PriorityNode::new(4, Coordinates::new(1, 2)).to_string(), "4@(1, 2)");
    }
}
