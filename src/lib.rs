//! Search-space preparation for genetic-algorithm Mosaic puzzle solving.
//!
//! Mosaic is a grid puzzle where a numbered cell states how many cells of
//! its 3×3 neighborhood (itself included) are black. Before a genetic
//! search over the remaining cells can start, two things must be done:
//!
//! - **Deduction**: locally forced cells are fixed White or Black once,
//!   up front ([`deduce::Deduction`]).
//! - **Representation**: the still-undetermined cells become the gene
//!   positions of every chromosome, and an initial random population is
//!   drawn ([`chromosome::PopulationGenerator`]).
//!
//! # Pipeline
//!
//! [`board::Board`] → [`deduce::Deduction`] → [`chromosome`] (decoding and
//! population generation). The deduction snapshot is produced once per
//! board and is read-only afterwards, so it can back any number of
//! decodes or generation requests.
//!
//! # Scope
//!
//! This crate prepares the search space only. Fitness evaluation and the
//! evolutionary loop itself (selection, crossover, mutation) live in
//! consumer layers.

pub mod board;
pub mod chromosome;
pub mod deduce;
pub mod random;
