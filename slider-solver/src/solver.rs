use super::*;

use smallvec::SmallVec;
use std::{
    collections::BinaryHeap,
    time::{Duration, Instant},
};
use tracing::{debug, trace};

type Successors = SmallVec<[Board; 4]>;

/// Runs the search on `initial` to completion.
pub fn solve(initial: Board) -> Solver {
    Solver::new(initial)
}

/// Terminal state of a finished search.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    Unsolvable,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from either queue.
    pub expanded: usize,
    /// Nodes created in either search tree, roots included.
    pub generated: usize,
    pub elapsed: Duration,
}

/// Minimum-move solver for one initial board.
///
/// All the work happens in [`Solver::new`]: two A* searches advance one node
/// at a time, one from the initial board and one from its twin. The first to
/// pop a goal board decides the outcome. If it is the twin's, the initial
/// board is unsolvable.
#[derive(Debug, Clone)]
pub struct Solver {
    solution: Option<Vec<Board>>,
    stats: SearchStats,
}

impl Solver {
    pub fn new(initial: Board) -> Self {
        let timer = Instant::now();
        debug!(
            dimension = initial.dimension(),
            manhattan = initial.manhattan(),
            "starting search"
        );

        let twin = initial.twin();
        let mut main = Search::new(initial);
        let mut twin = Search::new(twin);
        let mut expanded = 0;

        let solution = loop {
            let main_index = main.pop();
            let twin_index = twin.pop();
            expanded += main_index.is_some() as usize + twin_index.is_some() as usize;

            // Every board of dimension two or more has a neighbor left after
            // pruning, so the main queue only drains for a non-goal 1x1 board,
            // which cannot exist.
            let Some(main_index) = main_index else {
                break None;
            };
            if main.board(main_index).is_goal() {
                break Some(main.path(main_index));
            }
            if let Some(twin_index) = twin_index
                && twin.board(twin_index).is_goal()
            {
                break None;
            }

            trace!(
                moves = main.nodes[main_index].moves(),
                priority = main.nodes[main_index].priority(),
                "expanding"
            );
            main.expand(main_index);
            if let Some(twin_index) = twin_index {
                twin.expand(twin_index);
            }
        };

        let stats = SearchStats {
            expanded,
            generated: main.nodes.len() + twin.nodes.len(),
            elapsed: timer.elapsed(),
        };
        debug!(
            solvable = solution.is_some(),
            moves = solution.as_ref().map(|path| path.len() - 1),
            expanded = stats.expanded,
            generated = stats.generated,
            "search finished"
        );

        Solver { solution, stats }
    }

    /// Validates `rows` as a board, then solves it.
    pub fn from_rows<R: AsRef<[u16]>>(rows: &[R]) -> Result<Self> {
        Ok(Self::new(Board::new(rows)?))
    }

    pub fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    pub fn outcome(&self) -> Outcome {
        if self.is_solvable() {
            Outcome::Solved
        } else {
            Outcome::Unsolvable
        }
    }

    /// Minimum number of slides to the goal, or `None` when unsolvable.
    pub fn moves(&self) -> Option<usize> {
        self.solution.as_ref().map(|path| path.len() - 1)
    }

    /// Boards of a shortest solution, from the initial board to the goal.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// One side of the lockstep search: an arena of nodes and the open queue.
struct Search {
    nodes: Vec<SearchNode>,
    open: BinaryHeap<NodeIndex>,
}

impl Search {
    fn new(root: Board) -> Self {
        let mut search = Search {
            nodes: Vec::new(),
            open: BinaryHeap::new(),
        };
        search.push(SearchNode::new(root, 0, None));
        search
    }

    fn push(&mut self, node: SearchNode) {
        let index = self.nodes.len();
        self.open.push(NodeIndex::new(index, &node));
        self.nodes.push(node);
    }

    fn pop(&mut self) -> Option<usize> {
        self.open.pop().map(|entry| entry.index)
    }

    fn board(&self, index: usize) -> &Board {
        self.nodes[index].board()
    }

    /// Queues every neighbor of the node except the board it came from.
    fn expand(&mut self, index: usize) {
        let node = &self.nodes[index];
        let previous = node.previous().map(|p| self.board(p));
        let successors: Successors = node
            .board()
            .neighbors()
            .filter(|next| previous != Some(next))
            .collect();
        let moves = node.moves() + 1;

        for board in successors {
            self.push(SearchNode::new(board, moves, Some(index)));
        }
    }

    /// Follows predecessor links from `index` back to the root.
    fn path(&self, index: usize) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.nodes[index].moves() + 1);
        let mut current = Some(index);
        while let Some(i) = current {
            let node = &self.nodes[i];
            path.push(node.board().clone());
            current = node.previous();
        }
        path.reverse();
        path
    }
}
