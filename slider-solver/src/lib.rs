//! This crate finds minimum-move solutions to N×N sliding-tile puzzles with A* search.
//!
//! Unsolvable boards are detected without exhausting the state space: a second
//! search runs in lockstep on the board's twin, and exactly one of the two can
//! reach the goal.
mod node;
mod solver;

use crate::node::*;

pub use crate::node::SearchNode;
pub use crate::solver::{Outcome, SearchStats, Solver, solve};
pub use slider_common::{Board, Error, Result};
