//! Puzzle board representation and loading.
//!
//! [`Board`] holds the raw clue grid exactly as read from a puzzle file:
//! a square grid where some cells carry a digit and the rest are blank.
//! The board is immutable after construction; all interpretation of the
//! clues happens in [`crate::deduce`].

mod grid;
mod parse;

pub use grid::Board;
pub use parse::ParseError;
