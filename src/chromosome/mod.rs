//! Chromosome representation and initial population generation.
//!
//! A [`Chromosome`] carries one gene (0 = white, 1 = black) per
//! undetermined cell of a deduced board, in the deduction's row-major
//! variable order. The mapping back to a full board assignment is
//! one-directional: [`decode`] overlays the genes onto the fixed
//! white/black cells; no encode operation exists.
//!
//! [`PopulationGenerator`] draws random initial chromosomes from a
//! caller-supplied RNG, consuming it strictly sequentially so that a
//! fixed seed reproduces the exact same population.

mod codec;
mod generator;
mod types;

pub use codec::decode;
pub use generator::PopulationGenerator;
pub use types::{population_stats, Chromosome, Population, PopulationStats};
