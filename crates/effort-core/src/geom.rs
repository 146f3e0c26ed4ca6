//! Geometry primitive: [`Coordinates`].
//!
//! Rows grow downward and columns grow to the right, so `(0, 0)` is the
//! top-left cell of a board.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// A (row, column) position on a board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub row: i32,
    pub column: i32,
}

impl Coordinates {
    /// Top-left corner (0, 0).
    pub const ORIGIN: Self = Self { row: 0, column: 0 };

    /// Create new coordinates.
    #[inline]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Return coordinates shifted by (drow, dcolumn).
    #[inline]
    pub const fn shift(self, drow: i32, dcolumn: i32) -> Self {
        Self {
            row: self.row + drow,
            column: self.column + dcolumn,
        }
    }

    /// The four axis-aligned neighbours, in left, right, up, down order.
    #[inline]
    pub fn neighbors_4(self) -> [Coordinates; 4] {
        [
            Self::new(self.row, self.column - 1),
            Self::new(self.row, self.column + 1),
            Self::new(self.row - 1, self.column),
            Self::new(self.row + 1, self.column),
        ]
    }
}

// --- trait impls for Coordinates ---

impl PartialOrd for Coordinates {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinates {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row
            .cmp(&other.row)
            .then(self.column.cmp(&other.column))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl Add for Coordinates {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.column + rhs.column)
    }
}

impl Sub for Coordinates {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.column - rhs.column)
    }
}

impl From<(i32, i32)> for Coordinates {
    fn from((row, column): (i32, i32)) -> Self {
        Self::new(row, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn create_coordinates() {
        let c = Coordinates::new(1, 2);
        assert_eq!(c.row, 1);
        assert_eq!(c.column, 2);
        assert_eq!(c, Coordinates::new(1, 2));
        assert_ne!(c, Coordinates::new(2, 1));
    }

    #[test]
    fn shift_and_arithmetic() {
        let c = Coordinates::new(3, 4);
        assert_eq!(c.shift(-1, 2), Coordinates::new(2, 6));
        assert_eq!(c + Coordinates::new(1, 1), Coordinates::new(4, 5));
        assert_eq!(c - Coordinates::new(3, 4), Coordinates::ORIGIN);
    }

    #[test]
    fn neighbors_order() {
        let n = Coordinates::new(1, 1).neighbors_4();
        assert_eq!(
            n,
            [
                Coordinates::new(1, 0),
                Coordinates::new(1, 2),
                Coordinates::new(0, 1),
                Coordinates::new(2, 1),
            ]
        );
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![
            Coordinates::new(1, 0),
            Coordinates::new(0, 2),
            Coordinates::new(0, 1),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Coordinates::new(0, 1),
                Coordinates::new(0, 2),
                Coordinates::new(1, 0),
            ]
        );
    }

    #[test]
    fn hash_by_value() {
        let mut set = HashSet::new();
        set.insert(Coordinates::new(2, 3));
        assert!(set.contains(&Coordinates::from((2, 3))));
    }

    #[test]
    fn display() {
        assert_eq!(Coordinates::new(2, 5).to_string(), "(2, 5)");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coordinates_round_trip() {
        let c = Coordinates::new(3, 7);
        let json = serde_json::to_string(&c).unwrap();
        let back: Coordinates = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
