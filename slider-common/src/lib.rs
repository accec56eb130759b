//! Shared types for the sliding-tile puzzle: the immutable [`Board`], the
//! [`Direction`] a blank can slide in, and the crate-wide [`Error`].
pub mod board;
pub mod direction;
pub mod error;
mod generate;

pub use crate::board::{Board, Neighbors};
pub use crate::direction::Direction;
pub use crate::error::{Error, Result};
