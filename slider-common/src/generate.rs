use crate::board::Board;
use crate::direction::Direction;
use crate::error::Result;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use smallvec::SmallVec;

impl Board {
    /// A uniformly shuffled board. About half of these are unsolvable.
    pub fn random<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Result<Self> {
        let goal = Self::goal(dimension)?;
        let mut tiles = goal.tiles().to_vec();
        tiles.shuffle(rng);
        Self::from_flat(dimension, &tiles)
    }

    /// A uniformly shuffled board that passes [`Board::has_solvable_parity`].
    pub fn random_solvable<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Result<Self> {
        loop {
            let board = Self::random(dimension, rng)?;
            if board.has_solvable_parity() {
                return Ok(board);
            }
        }
    }

    /// Walks the blank `steps` random slides away from the goal, never
    /// undoing the previous slide. The result is solvable in at most `steps`
    /// moves.
    pub fn scrambled<R: Rng + ?Sized>(dimension: usize, steps: usize, rng: &mut R) -> Result<Self> {
        let mut board = Self::goal(dimension)?;
        let mut last: Option<Direction> = None;
        for _ in 0..steps {
            let candidates: SmallVec<[(Direction, Board); 4]> = Direction::ALL
                .into_iter()
                .filter(|&direction| last != Some(direction.opposite()))
                .filter_map(|direction| board.slide(direction).map(|next| (direction, next)))
                .collect();
            let Some((direction, next)) = candidates.choose(rng).cloned() else {
                break;
            };
            last = Some(direction);
            board = next;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_random_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for dimension in 1..=4 {
            let board = Board::random(dimension, &mut rng).unwrap();
            let mut tiles = board.tiles().to_vec();
            tiles.sort_unstable();
            let expected: Vec<u16> = (0..(dimension * dimension) as u16).collect();
            assert_eq!(tiles, expected);
        }
    }

    #[test]
    fn test_random_solvable() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert!(Board::random_solvable(3, &mut rng).unwrap().has_solvable_parity());
            assert!(Board::random_solvable(4, &mut rng).unwrap().has_solvable_parity());
        }
    }

    #[test]
    fn test_scrambled_stays_within_steps() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = Board::scrambled(3, 0, &mut rng).unwrap();
        assert!(board.is_goal());

        for steps in [1, 5, 12, 30] {
            let board = Board::scrambled(4, steps, &mut rng).unwrap();
            assert!(board.has_solvable_parity());
            assert!(board.manhattan() <= steps);
        }

        let single = Board::scrambled(1, 10, &mut rng).unwrap();
        assert!(single.is_goal());
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = Board::random(3, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = Board::random(3, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
        assert!(Board::random(0, &mut StdRng::seed_from_u64(99)).is_err());
    }
}
