//! Random initial population generation.

use super::types::{Chromosome, Population};
use crate::deduce::Deduction;
use rand::Rng;

/// Draws random initial chromosomes for a deduced board.
///
/// Genes are drawn independently and uniformly from {0, 1}, consuming
/// the supplied RNG in strict sequential order: chromosome 0 gene 0,
/// gene 1, …, then chromosome 1 gene 0, and so on. For a fixed seed and
/// request shape the generated population is therefore bit-for-bit
/// reproducible. The RNG must not be shared or drawn from concurrently
/// while a generation call is running.
///
/// # Usage
///
/// ```
/// use mosaic_init::board::Board;
/// use mosaic_init::chromosome::PopulationGenerator;
/// use mosaic_init::deduce::Deduction;
/// use mosaic_init::random::create_rng;
///
/// let board = Board::parse("3\n1..\n...\n...\n").unwrap();
/// let deduction = Deduction::from_board(&board);
/// let mut rng = create_rng(42);
/// let population = PopulationGenerator::new(&deduction).generate(10, &mut rng);
/// assert_eq!(population.len(), 10);
/// assert!(population.iter().all(|c| c.len() == deduction.variable_count()));
/// ```
pub struct PopulationGenerator<'a> {
    deduction: &'a Deduction,
}

impl<'a> PopulationGenerator<'a> {
    /// Binds a generator to a deduction snapshot.
    pub fn new(deduction: &'a Deduction) -> Self {
        Self { deduction }
    }

    /// Draws one chromosome of length `variable_count()`.
    pub fn generate_individual<R: Rng>(&self, rng: &mut R) -> Chromosome {
        let genes = (0..self.deduction.variable_count())
            .map(|_| rng.random_range(0..2u8))
            .collect();
        Chromosome::new(genes)
    }

    /// Draws `count` chromosomes. `count == 0` yields an empty
    /// population.
    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Population {
        (0..count).map(|_| self.generate_individual(rng)).collect()
    }
}
