use effort_core::{Board, Coordinates};
use effort_heap::{MinHeap, PriorityNode};

use crate::neighbors::Neighbors;

/// Effort of the step between two cell values. Exact for any pair of
/// `i32` elevations.
#[inline]
fn step_effort(from: i32, to: i32) -> u32 {
    from.abs_diff(to)
}

/// One-shot minimum-effort search over a [`Board`].
///
/// Build it with [`new`](Self::new) and run it with [`solve`](Self::solve),
/// which consumes the search. Use [`min_effort`] when only the result is
/// needed.
pub struct MinEffortSearch<'a> {
    board: &'a Board,
    queue: MinHeap,
    visited: Vec<bool>,
    current: Coordinates,
    end: Coordinates,
    min_effort: u32,
    nbuf: Neighbors,
    pops: usize,
}

impl<'a> MinEffortSearch<'a> {
    /// Prepare a search from the top-left to the bottom-right of `board`.
    pub fn new(board: &'a Board) -> Self {
        let start = board.origin();
        let mut queue = MinHeap::with_capacity(board.len());
        queue.enqueue(PriorityNode::new(0, start));
        Self {
            board,
            queue,
            visited: vec![false; board.len()],
            current: start,
            end: board.destination(),
            min_effort: 0,
            nbuf: Neighbors::new(),
            pops: 0,
        }
    }

    /// Run the search to completion and return the minimum effort.
    ///
    /// A single-cell board needs no moves and yields 0.
    pub fn solve(mut self) -> u32 {
        log::debug!(
            "min-effort: searching {}x{} board from {} to {}",
            self.board.rows(),
            self.board.columns(),
            self.current,
            self.end
        );

        while self.current != self.end {
            if self.step().is_none() {
                // Unreachable on a validated board: every cell is connected.
                log::warn!("min-effort: queue exhausted before reaching {}", self.end);
                break;
            }
        }

        log::debug!(
            "min-effort: result {} after {} pops",
            self.min_effort,
            self.pops
        );
        self.min_effort
    }

    /// Pop one entry and process it. Returns the popped entry, or `None`
    /// if the queue is empty.
    pub(crate) fn step(&mut self) -> Option<PriorityNode> {
        let active = self.queue.dequeue().ok()?;
        self.pops += 1;
        self.current = active.coordinates;

        if self.current == self.end {
            self.min_effort = active.priority;
            return Some(active);
        }

        let Some(ci) = self.board.index(self.current) else {
            return Some(active);
        };
        if self.visited[ci] {
            log::trace!(
                "min-effort: skipping stale entry {} (already settled)",
                active
            );
            return Some(active);
        }

        self.explore(active);
        self.visited[ci] = true;
        Some(active)
    }

    /// Push an entry for every unvisited neighbor of `active`.
    fn explore(&mut self, active: PriorityNode) {
        let board = self.board;
        let visited = &self.visited;
        let Some(here) = board.at(active.coordinates) else {
            return;
        };

        let ns = self.nbuf.cardinal(active.coordinates, |n| {
            board.index(n).is_some_and(|i| !visited[i])
        });
        for &n in ns {
            let Some(there) = board.at(n) else {
                continue;
            };
            let effort = step_effort(here, there).max(active.priority);
            self.queue.enqueue(PriorityNode::new(effort, n));
        }
    }
}

/// Minimum effort needed to cross `board` from its top-left to its
/// bottom-right corner.
pub fn min_effort(board: &Board) -> u32 {
    MinEffortSearch::new(board).solve()
}
