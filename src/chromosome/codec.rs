//! Chromosome → board decoding.

use super::types::Chromosome;
use crate::deduce::Deduction;

/// Expands a chromosome into a full board assignment.
///
/// Returns a `size × size` grid of `0` (white) / `1` (black): every cell
/// starts white, the deduced black cells are set to 1, then each gene is
/// written to its variable's coordinate. Deduced white cells are never
/// touched by genes, since they are not variables.
///
/// # Panics
/// Panics if the chromosome is shorter than the deduction's variable
/// list. Supplying a correctly sized chromosome is a caller contract.
pub fn decode(deduction: &Deduction, chromosome: &Chromosome) -> Vec<Vec<u8>> {
    let size = deduction.size();
    let mut grid = vec![vec![0u8; size]; size];

    for row in 0..size {
        for col in 0..size {
            if deduction.is_black(row, col) {
                grid[row][col] = 1;
            }
        }
    }

    for (i, &(row, col)) in deduction.variables().iter().enumerate() {
        grid[row][col] = chromosome[i];
    }

    grid
}
