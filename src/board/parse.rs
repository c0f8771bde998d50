//! Puzzle file parsing.
//!
//! The format is line-oriented: the first line holds the board size, the
//! next `size` lines hold one grid row each, where a digit is a clue and
//! `.` is an unconstrained cell. Rows shorter than `size` leave their
//! trailing cells unconstrained; characters past column `size` are
//! ignored.

use super::grid::Board;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading a puzzle description.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input was empty.
    #[error("missing size line")]
    MissingSize,

    /// The size line was not a positive integer.
    #[error("invalid size line: {0:?}")]
    InvalidSize(String),

    /// Fewer than `size` grid rows were present.
    #[error("missing grid row {row}")]
    MissingRow {
        /// Zero-based index of the first absent row.
        row: usize,
    },

    /// A grid character was neither a digit nor `.`.
    #[error("invalid character {found:?} at row {row}, column {col}")]
    InvalidCell {
        /// Zero-based row of the offending character.
        row: usize,
        /// Zero-based column of the offending character.
        col: usize,
        /// The character found.
        found: char,
    },

    /// The puzzle file could not be read.
    #[error("failed to read puzzle file: {0}")]
    Io(#[from] std::io::Error),
}

impl Board {
    /// Parses a puzzle description from text.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut lines = input.lines();

        let size_line = lines.next().ok_or(ParseError::MissingSize)?.trim();
        let size: usize = size_line
            .parse()
            .map_err(|_| ParseError::InvalidSize(size_line.to_string()))?;
        if size == 0 {
            return Err(ParseError::InvalidSize(size_line.to_string()));
        }

        let mut clues = vec![None; size * size];
        for row in 0..size {
            let line = lines.next().ok_or(ParseError::MissingRow { row })?.trim();
            for (col, ch) in line.chars().take(size).enumerate() {
                match ch {
                    '.' => {}
                    '0'..='9' => clues[row * size + col] = Some(ch as u8 - b'0'),
                    _ => return Err(ParseError::InvalidCell { row, col, found: ch }),
                }
            }
        }

        Ok(Self { size, clues })
    }

    /// Reads and parses a puzzle file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        Self::parse(&std::fs::read_to_string(path)?)
    }
}
