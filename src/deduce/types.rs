//! Deduction output types.

/// Classification of a single cell after deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Proven white.
    White,
    /// Proven black.
    Black,
    /// Undetermined; one gene position in every chromosome.
    Unknown,
}

/// A numbered cell: `count` of the up-to-9 cells in the 3×3 neighborhood
/// of `(row, col)` — the cell itself included — must be black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    /// Row of the numbered cell.
    pub row: usize,
    /// Column of the numbered cell.
    pub col: usize,
    /// The clue value as read (0–9 accepted; 0–8 satisfiable).
    pub count: u8,
}

/// Terminal deduction snapshot for one board.
///
/// Produced once by [`Deduction::from_board`] and read-only afterwards.
/// It may be shared freely across threads: decoding and population
/// generation only ever read it.
///
/// The variable list is the authoritative gene-to-coordinate mapping.
/// Its row-major order is a hard contract — chromosome index `i` refers
/// to `variables()[i]` for the lifetime of the run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deduction {
    pub(crate) size: usize,
    /// Row-major flat mask of proven-white cells.
    pub(crate) white: Vec<bool>,
    /// Row-major flat mask of proven-black cells. Disjoint from `white`.
    pub(crate) black: Vec<bool>,
    /// Numbered cells in row-major scan order.
    pub(crate) constraints: Vec<Constraint>,
    /// Undetermined cells in row-major order.
    pub(crate) variables: Vec<(usize, usize)>,
}

/// Cell counts of a finished deduction, for caller-side reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeductionSummary {
    /// Board side length.
    pub size: usize,
    /// Number of proven-white cells.
    pub white: usize,
    /// Number of proven-black cells.
    pub black: usize,
    /// Number of undetermined cells.
    pub variables: usize,
}

impl Deduction {
    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `(row, col)` was proven white.
    pub fn is_white(&self, row: usize, col: usize) -> bool {
        self.white[row * self.size + col]
    }

    /// Whether `(row, col)` was proven black.
    pub fn is_black(&self, row: usize, col: usize) -> bool {
        self.black[row * self.size + col]
    }

    /// The state of `(row, col)`.
    pub fn state(&self, row: usize, col: usize) -> CellState {
        if self.is_white(row, col) {
            CellState::White
        } else if self.is_black(row, col) {
            CellState::Black
        } else {
            CellState::Unknown
        }
    }

    /// The numbered cells, in row-major scan order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// The undetermined cells, in row-major order.
    ///
    /// Index `i` of every chromosome for this board refers to entry `i`
    /// of this slice.
    pub fn variables(&self) -> &[(usize, usize)] {
        &self.variables
    }

    /// Number of undetermined cells (the chromosome length).
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Number of proven-white cells.
    pub fn white_count(&self) -> usize {
        self.white.iter().filter(|&&w| w).count()
    }

    /// Number of proven-black cells.
    pub fn black_count(&self) -> usize {
        self.black.iter().filter(|&&b| b).count()
    }

    /// Cell counts for reporting.
    pub fn summary(&self) -> DeductionSummary {
        DeductionSummary {
            size: self.size,
            white: self.white_count(),
            black: self.black_count(),
            variables: self.variable_count(),
        }
    }
}
