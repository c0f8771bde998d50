//! Constraint deduction engine.
//!
//! Examines the numbered cells of a [`Board`](crate::board::Board) and
//! permanently fixes every cell whose color is locally forced, before any
//! search begins. Three rules are applied, in order:
//!
//! 1. **Anchor rule** — a numbered cell is itself always white.
//! 2. **Zero rule** — a `0` clue whitens its whole 3×3 neighborhood.
//! 3. **Saturation rule** — once all clues have been anchored and zeros
//!    expanded, a clue whose non-white neighborhood cells number exactly
//!    its count forces all of them black.
//!
//! # Key Types
//!
//! - [`Deduction`]: the terminal snapshot — white/black masks, the clue
//!   list, and the ordered variable list
//! - [`CellState`]: per-cell classification after deduction
//! - [`Constraint`]: one numbered cell
//!
//! # Design
//!
//! Deduction runs in a single logical pass. Cells blackened by the
//! saturation rule are never re-examined, so chains of forced moves that
//! a fixpoint engine would find are deliberately left to the downstream
//! search. Contradictory puzzles (fewer candidates than the clue
//! requires) are not detected here; the inconsistency surfaces later in
//! fitness evaluation.

mod engine;
mod types;

pub use types::{CellState, Constraint, Deduction, DeductionSummary};
