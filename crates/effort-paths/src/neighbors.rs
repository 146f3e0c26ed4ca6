use effort_core::Coordinates;

/// Yields the left, right, up and down neighbors of a cell.
///
/// A predicate decides which of them to keep. The result slice is backed
/// by a buffer that is reused between calls.
pub struct Neighbors {
    buf: Vec<Coordinates>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the left, right, up and down neighbors of `c`, in that order,
    /// keeping only those for which `keep` returns `true`.
    pub fn cardinal(
        &mut self,
        c: Coordinates,
        keep: impl Fn(Coordinates) -> bool,
    ) -> &[Coordinates] {
        self.buf.clear();
        for n in c.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use effort_core::Board;

    #[test]
    fn interior_cell_has_four() {
        let mut nb = Neighbors::new();
        let ns = nb.cardinal(Coordinates::new(1, 1), |_| true);
        assert_eq!(
            ns,
            &[
                Coordinates::new(1, 0),
                Coordinates::new(1, 2),
                Coordinates::new(0, 1),
                Coordinates::new(2, 1),
            ]
        );
    }

    #[test]
    fn corner_is_clipped_by_board() {
        let board = Board::new(3, 3, 0).unwrap();
        let mut nb = Neighbors::default();
        let ns = nb.cardinal(Coordinates::ORIGIN, |n| board.contains(n));
        assert_eq!(ns, &[Coordinates::new(0, 1), Coordinates::new(1, 0)]);

        let ns = nb.cardinal(board.destination(), |n| board.contains(n));
        assert_eq!(ns, &[Coordinates::new(2, 1), Coordinates::new(1, 2)]);
    }

    #[test]
    fn single_cell_has_none() {
        let board = Board::new(1, 1, 0).unwrap();
        let mut nb = Neighbors::new();
        assert!(nb.cardinal(Coordinates::ORIGIN, |n| board.contains(n)).is_empty());
    }
}
