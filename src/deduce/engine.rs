//! The deduction pass.

use super::types::{Constraint, Deduction};
use crate::board::Board;

/// Cells of the clipped 3×3 Moore neighborhood of `(row, col)`, the cell
/// itself included, in row-major order. Edges clip; nothing wraps.
fn neighborhood(size: usize, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    let rows = row.saturating_sub(1)..=(row + 1).min(size - 1);
    let cols = col.saturating_sub(1)..=(col + 1).min(size - 1);
    rows.flat_map(move |r| cols.clone().map(move |c| (r, c)))
}

impl Deduction {
    /// Runs the deduction pass over `board` and returns the terminal
    /// snapshot.
    ///
    /// The pass is single-shot: anchor and zero rules over all clues in
    /// row-major scan order, then the saturation rule over the collected
    /// constraints in the same order. Cells blackened by saturation are
    /// not re-examined, and black cells still count as saturation
    /// candidates for later constraints — only white cells are excluded.
    pub fn from_board(board: &Board) -> Self {
        let size = board.size();
        let mut white = vec![false; size * size];
        let mut black = vec![false; size * size];
        let mut constraints = Vec::new();

        // Anchor + zero rules, row-major scan.
        for row in 0..size {
            for col in 0..size {
                if let Some(count) = board.clue(row, col) {
                    constraints.push(Constraint { row, col, count });
                    white[row * size + col] = true;
                    if count == 0 {
                        for (r, c) in neighborhood(size, row, col) {
                            white[r * size + c] = true;
                        }
                    }
                }
            }
        }

        // Saturation rule, over the constraints collected above.
        for constraint in &constraints {
            let candidates: Vec<(usize, usize)> =
                neighborhood(size, constraint.row, constraint.col)
                    .filter(|&(r, c)| !white[r * size + c])
                    .collect();
            if candidates.len() == constraint.count as usize {
                for (r, c) in candidates {
                    black[r * size + c] = true;
                }
            }
        }

        // Everything still unmarked is a variable, in row-major order.
        let mut variables = Vec::new();
        for row in 0..size {
            for col in 0..size {
                let i = row * size + col;
                if !white[i] && !black[i] {
                    variables.push((row, col));
                }
            }
        }

        Self {
            size,
            white,
            black,
            constraints,
            variables,
        }
    }
}
