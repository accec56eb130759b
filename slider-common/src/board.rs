use crate::direction::Direction;
use crate::error::{Error, Result};

use smallvec::SmallVec;
use std::fmt;

/// Largest supported dimension; every label must fit in a `u16`.
pub const MAX_DIMENSION: usize = 255;

/// Boards up to 4x4 keep their tiles inline.
const INLINE_TILES: usize = 16;

type Tiles = SmallVec<[u16; INLINE_TILES]>;

/// One configuration of an N×N sliding-tile puzzle. `0` marks the blank.
///
/// A `Board` is never mutated after construction; sliding a tile or building
/// the twin produces a new value. Two boards are equal iff every cell matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dimension: usize,
    tiles: Tiles,
    blank: usize,
}

impl Board {
    /// Builds a board from a square matrix of tile labels.
    ///
    /// Fails with [`Error::InvalidArgument`] when the matrix is empty, is not
    /// square, or is not a permutation of `0..N²`.
    pub fn new<R: AsRef<[u16]>>(rows: &[R]) -> Result<Self> {
        let dimension = rows.len();
        check_dimension(dimension)?;
        let mut tiles = Tiles::with_capacity(dimension * dimension);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != dimension {
                return Err(Error::invalid(format!(
                    "row {i} has {} tiles, expected {dimension}",
                    row.len()
                )));
            }
            tiles.extend_from_slice(row);
        }
        Self::from_tiles(dimension, tiles)
    }

    /// Builds a board from `dimension * dimension` labels in row-major order.
    pub fn from_flat(dimension: usize, tiles: &[u16]) -> Result<Self> {
        Self::from_tiles(dimension, tiles.iter().copied().collect())
    }

    /// The solved board: labels `1..N²` in row-major order, blank last.
    pub fn goal(dimension: usize) -> Result<Self> {
        check_dimension(dimension)?;
        let total = dimension * dimension;
        let tiles = (1..total as u16).chain(std::iter::once(0)).collect();
        Ok(Self {
            dimension,
            tiles,
            blank: total - 1,
        })
    }

    fn from_tiles(dimension: usize, tiles: Tiles) -> Result<Self> {
        check_dimension(dimension)?;
        let total = dimension * dimension;
        if tiles.len() != total {
            return Err(Error::invalid(format!(
                "expected {total} tiles for a {dimension}x{dimension} board, got {}",
                tiles.len()
            )));
        }

        let mut seen = vec![false; total];
        for &tile in &tiles {
            let idx = tile as usize;
            if idx >= total {
                return Err(Error::invalid(format!(
                    "tile {tile} is out of range 0..{total}"
                )));
            }
            if seen[idx] {
                return Err(Error::invalid(format!("tile {tile} appears more than once")));
            }
            seen[idx] = true;
        }

        // A permutation of 0..total always contains the blank.
        let blank = tiles.iter().position(|&t| t == 0).unwrap_or_default();
        Ok(Self {
            dimension,
            tiles,
            blank,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Tile labels in row-major order.
    pub fn tiles(&self) -> &[u16] {
        &self.tiles
    }

    pub fn tile(&self, row: usize, col: usize) -> u16 {
        self.tiles[row * self.dimension + col]
    }

    /// Row and column of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.dimension, self.blank % self.dimension)
    }

    /// Number of non-blank tiles outside their goal cell.
    pub fn hamming(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(i, &tile)| tile != 0 && tile as usize != i + 1)
            .count()
    }

    /// Sum over non-blank tiles of the row and column distance to the goal cell.
    pub fn manhattan(&self) -> usize {
        let n = self.dimension;
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(i, &tile)| {
                let target = tile as usize - 1;
                (i / n).abs_diff(target / n) + (i % n).abs_diff(target % n)
            })
            .sum()
    }

    pub fn is_goal(&self) -> bool {
        self.hamming() == 0
    }

    /// Moves the blank one cell in `direction`, swapping it with the tile
    /// there. Returns `None` when that cell is off the board.
    pub fn slide(&self, direction: Direction) -> Option<Board> {
        let (row, col) = self.blank();
        let (dr, dc) = direction.offset();
        let row = row.checked_add_signed(dr).filter(|&r| r < self.dimension)?;
        let col = col.checked_add_signed(dc).filter(|&c| c < self.dimension)?;
        Some(self.swapped(self.blank, row * self.dimension + col))
    }

    /// Every board one slide away, in [`Direction::ALL`] order.
    pub fn neighbors(&self) -> Neighbors<'_> {
        Neighbors {
            board: self,
            directions: Direction::ALL.iter(),
        }
    }

    /// A board with one pair of horizontally adjacent non-blank tiles
    /// exchanged. Exactly one of a board and its twin is solvable.
    ///
    /// The pair is columns 0 and 1 of row 0, or of row 1 when the blank sits
    /// in one of those two cells of row 0. A 1x1 board is its own twin.
    pub fn twin(&self) -> Board {
        let n = self.dimension;
        if n < 2 {
            return self.clone();
        }
        let row = if self.blank < 2 { 1 } else { 0 };
        self.swapped(row * n, row * n + 1)
    }

    /// Inversion-parity test for solvability.
    ///
    /// For odd N a board is solvable iff its inversion count is even. For even
    /// N the blank's row (from the top) is added, and the sum must be odd.
    pub fn has_solvable_parity(&self) -> bool {
        let inversions = self.inversions();
        if self.dimension % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.blank / self.dimension) % 2 == 1
        }
    }

    fn inversions(&self) -> usize {
        let tiles = &self.tiles;
        tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(i, &tile)| {
                tiles[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < tile)
                    .count()
            })
            .sum()
    }

    fn swapped(&self, a: usize, b: usize) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(a, b);
        let blank = if self.blank == a {
            b
        } else if self.blank == b {
            a
        } else {
            self.blank
        };
        Board {
            dimension: self.dimension,
            tiles,
            blank,
        }
    }
}

fn check_dimension(dimension: usize) -> Result<()> {
    if dimension == 0 {
        return Err(Error::invalid("board must have at least one row"));
    }
    if dimension > MAX_DIMENSION {
        return Err(Error::invalid(format!(
            "dimension {dimension} exceeds the maximum of {MAX_DIMENSION}"
        )));
    }
    Ok(())
}

/// Lazy iterator over the boards one slide away from a source board.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    board: &'a Board,
    directions: std::slice::Iter<'static, Direction>,
}

impl Iterator for Neighbors<'_> {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        let board = self.board;
        self.directions.find_map(|&direction| board.slide(direction))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.directions.len()))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.dimension)?;
        for row in self.tiles.chunks(self.dimension) {
            for tile in row {
                write!(f, "{tile:2} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
