//! Property tests over arbitrary boards.
//!
//! Checks the universal guarantees of the deduction/representation
//! pipeline that must hold for every input, not just hand-picked
//! scenarios.

use mosaic_init::board::Board;
use mosaic_init::chromosome::{decode, Chromosome, PopulationGenerator};
use mosaic_init::deduce::{CellState, Deduction};
use mosaic_init::random::create_rng;
use proptest::prelude::*;

fn board_strategy() -> impl Strategy<Value = Board> {
    (1usize..=6).prop_flat_map(|size| {
        proptest::collection::vec(proptest::option::weighted(0.3, 0u8..=9), size * size)
            .prop_map(move |clues| Board::from_clues(size, clues))
    })
}

proptest! {
    #[test]
    fn white_and_black_are_disjoint(board in board_strategy()) {
        let deduction = Deduction::from_board(&board);
        for row in 0..board.size() {
            for col in 0..board.size() {
                prop_assert!(!(deduction.is_white(row, col) && deduction.is_black(row, col)));
            }
        }
    }

    #[test]
    fn numbered_cells_are_white(board in board_strategy()) {
        let deduction = Deduction::from_board(&board);
        for constraint in deduction.constraints() {
            prop_assert!(deduction.is_white(constraint.row, constraint.col));
        }
    }

    #[test]
    fn zero_clues_whiten_their_neighborhood(board in board_strategy()) {
        let size = board.size();
        let deduction = Deduction::from_board(&board);
        for row in 0..size {
            for col in 0..size {
                if board.clue(row, col) != Some(0) {
                    continue;
                }
                for r in row.saturating_sub(1)..=(row + 1).min(size - 1) {
                    for c in col.saturating_sub(1)..=(col + 1).min(size - 1) {
                        prop_assert!(deduction.is_white(r, c));
                    }
                }
            }
        }
    }

    #[test]
    fn variables_are_the_row_major_complement(board in board_strategy()) {
        let deduction = Deduction::from_board(&board);
        let mut expected = Vec::new();
        for row in 0..board.size() {
            for col in 0..board.size() {
                if deduction.state(row, col) == CellState::Unknown {
                    expected.push((row, col));
                }
            }
        }
        prop_assert_eq!(deduction.variables(), expected.as_slice());
    }

    #[test]
    fn decoding_zeros_gives_the_black_mask(board in board_strategy()) {
        let deduction = Deduction::from_board(&board);
        let zeros = Chromosome::new(vec![0; deduction.variable_count()]);
        let grid = decode(&deduction, &zeros);
        for row in 0..board.size() {
            for col in 0..board.size() {
                prop_assert_eq!(grid[row][col], u8::from(deduction.is_black(row, col)));
            }
        }
    }

    #[test]
    fn generation_is_deterministic(board in board_strategy(), seed in any::<u64>(), count in 0usize..8) {
        let deduction = Deduction::from_board(&board);
        let generator = PopulationGenerator::new(&deduction);
        let first = generator.generate(count, &mut create_rng(seed));
        let second = generator.generate(count, &mut create_rng(seed));
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), count);
        for chromosome in &first {
            prop_assert_eq!(chromosome.len(), deduction.variable_count());
            prop_assert!(chromosome.genes().iter().all(|&g| g <= 1));
        }
    }
}
