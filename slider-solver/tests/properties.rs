//! Property tests for boards and the twin-search solver.

use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use slider_solver::{Board, Solver};

fn any_board(dimensions: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Board> {
    dimensions.prop_flat_map(|n| {
        Just((0..(n * n) as u16).collect::<Vec<_>>())
            .prop_shuffle()
            .prop_map(move |tiles| Board::from_flat(n, &tiles).unwrap())
    })
}

fn scrambled_board(dimension: usize, max_steps: usize) -> impl Strategy<Value = (Board, usize)> {
    (any::<u64>(), 0..=max_steps).prop_map(move |(seed, steps)| {
        let mut rng = StdRng::seed_from_u64(seed);
        (Board::scrambled(dimension, steps, &mut rng).unwrap(), steps)
    })
}

fn differing_cells(a: &Board, b: &Board) -> Vec<usize> {
    a.tiles()
        .iter()
        .zip(b.tiles())
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(i, _)| i)
        .collect()
}

fn assert_valid_solution(solver: &Solver, initial: &Board) -> Result<(), TestCaseError> {
    let path = solver.solution().unwrap();
    prop_assert_eq!(path.len(), solver.moves().unwrap() + 1);
    prop_assert_eq!(&path[0], initial);
    prop_assert!(path.last().unwrap().is_goal());
    for pair in path.windows(2) {
        prop_assert!(pair[0].neighbors().any(|next| next == pair[1]));
    }
    Ok(())
}

proptest! {
    #[test]
    fn goal_iff_hamming_is_zero(board in any_board(1..=4)) {
        prop_assert_eq!(board.is_goal(), board.hamming() == 0);
    }

    #[test]
    fn manhattan_bounds_hamming(board in any_board(2..=5)) {
        prop_assert!(board.manhattan() >= board.hamming());
    }

    #[test]
    fn neighbors_match_blank_position(board in any_board(2..=5)) {
        let n = board.dimension();
        let (row, col) = board.blank();
        let on_edge = |x: usize| x == 0 || x == n - 1;
        let expected = 4 - on_edge(row) as usize - on_edge(col) as usize;

        let neighbors: Vec<_> = board.neighbors().collect();
        prop_assert_eq!(neighbors.len(), expected);

        let blank = row * n + col;
        for next in &neighbors {
            let cells = differing_cells(&board, next);
            prop_assert_eq!(cells.len(), 2);
            prop_assert!(cells.contains(&blank));
            let other = if cells[0] == blank { cells[1] } else { cells[0] };
            let distance = (other / n).abs_diff(row) + (other % n).abs_diff(col);
            prop_assert_eq!(distance, 1);
            prop_assert_eq!(next.tiles()[blank], board.tiles()[other]);
        }
    }

    #[test]
    fn exactly_one_of_board_and_twin_is_solvable(board in any_board(2..=6)) {
        let twin = board.twin();
        prop_assert_ne!(&twin, &board);
        prop_assert_ne!(board.has_solvable_parity(), twin.has_solvable_parity());
    }

    #[test]
    fn solver_agrees_with_parity_on_two_by_two(board in any_board(2..=2)) {
        let solver = Solver::new(board.clone());
        prop_assert_eq!(solver.is_solvable(), board.has_solvable_parity());
        if solver.is_solvable() {
            assert_valid_solution(&solver, &board)?;
        } else {
            prop_assert_eq!(solver.moves(), None);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn scrambled_three_by_three_is_solved_optimally((board, steps) in scrambled_board(3, 14)) {
        let solver = Solver::new(board.clone());
        prop_assert!(solver.is_solvable());
        let moves = solver.moves().unwrap();
        prop_assert!(moves <= steps);
        prop_assert!(moves >= board.manhattan());
        prop_assert_eq!(moves % 2, steps % 2);
        assert_valid_solution(&solver, &board)?;
    }
}
