//! A rectangular grid of integer elevations.
//!
//! [`Board`] stores cells row-major in a flat buffer. It is only ever built
//! through validating constructors, so every row has the same width, the
//! board holds at least one cell, and every flat index fits in an `i32`.

use crate::geom::Coordinates;
use std::fmt;

/// A validated, rectangular 2D grid of `i32` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<i32>,
    rows: i32,
    columns: i32,
}

impl Board {
    /// Create a `rows` x `columns` board with every cell set to `fill`.
    ///
    /// Returns [`BoardError::Empty`] if either dimension is not positive and
    /// [`BoardError::TooLarge`] if the cell count does not fit in an `i32`.
    pub fn new(rows: i32, columns: i32, fill: i32) -> Result<Self, BoardError> {
        if rows <= 0 || columns <= 0 {
            return Err(BoardError::Empty);
        }
        let len = cell_count(rows as usize, columns as usize)?;
        Ok(Self {
            cells: vec![fill; len],
            rows,
            columns,
        })
    }

    /// Build a board from a sequence of rows.
    ///
    /// The first row fixes the width. Every following row must match it.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[i32]>,
    {
        let mut cells = Vec::new();
        let mut width = 0usize;
        let mut height = 0usize;
        for (i, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            if i == 0 {
                width = row.len();
                if width == 0 {
                    return Err(BoardError::Empty);
                }
            } else if row.len() != width {
                return Err(BoardError::Ragged {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
            height += 1;
        }
        if height == 0 {
            return Err(BoardError::Empty);
        }
        cell_count(height, width)?;
        Ok(Self {
            cells,
            rows: height as i32,
            columns: width as i32,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a board holds at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Top-left corner.
    #[inline]
    pub fn origin(&self) -> Coordinates {
        Coordinates::ORIGIN
    }

    /// Bottom-right corner.
    #[inline]
    pub fn destination(&self) -> Coordinates {
        Coordinates::new(self.rows - 1, self.columns - 1)
    }

    /// Whether `c` lies inside the board.
    #[inline]
    pub fn contains(&self, c: Coordinates) -> bool {
        c.row >= 0 && c.row < self.rows && c.column >= 0 && c.column < self.columns
    }

    /// Flat row-major index of `c`, or `None` if it is outside the board.
    #[inline]
    pub fn index(&self, c: Coordinates) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some((c.row * self.columns + c.column) as usize)
    }

    /// Value at `c`, or `None` if it is outside the board.
    #[inline]
    pub fn at(&self, c: Coordinates) -> Option<i32> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Set the value at `c`. Returns `false` if `c` is outside the board.
    pub fn set(&mut self, c: Coordinates, value: i32) -> bool {
        match self.index(c) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Iterate over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[i32]> {
        self.cells.chunks(self.columns as usize)
    }
}

/// Number of cells in a `rows` x `columns` board, provided the product and
/// both dimensions fit in an `i32`.
fn cell_count(rows: usize, columns: usize) -> Result<usize, BoardError> {
    let too_large = BoardError::TooLarge { rows, columns };
    let r = i32::try_from(rows).map_err(|_| too_large.clone())?;
    let c = i32::try_from(columns).map_err(|_| too_large.clone())?;
    match r.checked_mul(c) {
        Some(n) => Ok(n as usize),
        None => Err(too_large),
    }
}

impl TryFrom<Vec<Vec<i32>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl<const R: usize, const C: usize> TryFrom<[[i32; C]; R]> for Board {
    type Error = BoardError;

    fn try_from(rows: [[i32; C]; R]) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

/// Errors that can occur when building a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The board has no rows, or its rows have no columns.
    Empty,
    /// A row's width differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The cell count exceeds `i32::MAX`.
    TooLarge { rows: usize, columns: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "board: must have at least one row and one column"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "board: row {row} has {found} columns, expected {expected}"
            ),
            Self::TooLarge { rows, columns } => {
                write!(f, "board: {rows}x{columns} exceeds {} cells", i32::MAX)
            }
        }
    }
}

impl std::error::Error for BoardError {}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter_rows())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows: Vec<Vec<i32>> = serde::Deserialize::deserialize(deserializer)?;
        Board::from_rows(rows).map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_round_trip() {
        let b = Board::from_rows([[1, 2, 2], [3, 8, 2]]).unwrap();
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, "[[1,2,2],[3,8,2]]");
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }

    #[test]
    fn ragged_json_is_rejected() {
        let res: Result<Board, _> = serde_json::from_str("[[1,2],[3]]");
        assert!(res.is_err());
    }
}
