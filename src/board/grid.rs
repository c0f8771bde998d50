//! The raw clue grid.

/// A Mosaic puzzle board: a `size × size` grid of optional clues.
///
/// A clue is the digit carried by a numbered cell; `None` marks an
/// unconstrained cell. Clues are stored as read — the parser accepts
/// `0`–`9` even though only `0`–`8` are satisfiable on a 3×3
/// neighborhood.
///
/// Boards are read once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    pub(crate) size: usize,
    /// Row-major flat storage: cell `(row, col)` lives at `row * size + col`.
    pub(crate) clues: Vec<Option<u8>>,
}

impl Board {
    /// Creates a board from an explicit clue grid.
    ///
    /// `clues` is row-major and must contain exactly `size * size`
    /// entries.
    ///
    /// # Panics
    /// Panics if `clues.len() != size * size`.
    pub fn from_clues(size: usize, clues: Vec<Option<u8>>) -> Self {
        assert_eq!(
            clues.len(),
            size * size,
            "clue grid must contain size * size entries"
        );
        Self { size, clues }
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The clue at `(row, col)`, or `None` for an unconstrained cell.
    pub fn clue(&self, row: usize, col: usize) -> Option<u8> {
        self.clues[row * self.size + col]
    }
}
