use super::*;

use std::cmp::Ordering;

/// One state in the search tree.
///
/// Nodes live in an append-only arena, so the predecessor link is an index
/// into that arena rather than a pointer.
#[derive(Debug, Clone)]
pub struct SearchNode {
    board: Board,
    moves: usize,
    previous: Option<usize>,
    manhattan: usize,
}

impl SearchNode {
    pub fn new(board: Board, moves: usize, previous: Option<usize>) -> Self {
        let manhattan = board.manhattan();
        SearchNode {
            board,
            moves,
            previous,
            manhattan,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    pub fn manhattan(&self) -> usize {
        self.manhattan
    }

    #[inline]
    pub fn priority(&self) -> usize {
        self.moves + self.manhattan
    }
}

/// Heap entry pointing at a node in the arena.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed: the lowest
/// priority wins, then the lowest Manhattan distance, then the oldest node.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct NodeIndex {
    pub index: usize,
    pub priority: usize,
    pub manhattan: usize,
}

impl NodeIndex {
    pub fn new(index: usize, node: &SearchNode) -> Self {
        NodeIndex {
            index,
            priority: node.priority(),
            manhattan: node.manhattan(),
        }
    }
}

impl Ord for NodeIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.manhattan.cmp(&self.manhattan))
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for NodeIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
