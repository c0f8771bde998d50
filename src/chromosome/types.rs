//! Chromosome and population types.

use std::ops::Index;

/// One candidate assignment of colors to the undetermined cells.
///
/// Gene `i` (0 = white, 1 = black) colors the cell at index `i` of the
/// deduction's variable list. All chromosomes for a given board share
/// the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<u8>,
}

impl Chromosome {
    /// Wraps a gene vector. Genes are expected to be 0 or 1.
    pub fn new(genes: Vec<u8>) -> Self {
        Self { genes }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the chromosome has no genes (fully deduced board).
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The gene vector.
    pub fn genes(&self) -> &[u8] {
        &self.genes
    }
}

impl Index<usize> for Chromosome {
    type Output = u8;

    fn index(&self, i: usize) -> &u8 {
        &self.genes[i]
    }
}

/// An ordered batch of chromosomes.
pub type Population = Vec<Chromosome>;

/// Aggregate gene counts of a population, for caller-side reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationStats {
    /// Number of chromosomes.
    pub individuals: usize,
    /// Genes per chromosome (the board's variable count).
    pub genes_per_individual: usize,
    /// Total number of 1-genes across the population.
    pub black_genes: usize,
}

impl PopulationStats {
    /// Fraction of genes set to 1, in [0, 1]. Zero for an empty
    /// population or zero-length chromosomes.
    pub fn black_ratio(&self) -> f64 {
        let total = self.individuals * self.genes_per_individual;
        if total == 0 {
            0.0
        } else {
            self.black_genes as f64 / total as f64
        }
    }
}

/// Computes aggregate gene counts over a population.
pub fn population_stats(population: &[Chromosome]) -> PopulationStats {
    PopulationStats {
        individuals: population.len(),
        genes_per_individual: population.first().map_or(0, Chromosome::len),
        black_genes: population
            .iter()
            .map(|chromosome| chromosome.genes().iter().map(|&g| g as usize).sum::<usize>())
            .sum(),
    }
}
