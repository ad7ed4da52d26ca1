//! Core domain types for tic-tac-toe.

use crate::error::BoardError;
use crate::rules;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// One of the two players' marks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    /// X always moves first.
    #[display("x")]
    X,
    /// O moves second.
    #[display("o")]
    O,
}

impl Symbol {
    /// Returns the other player's symbol.
    pub fn opposite(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

impl FromStr for Symbol {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Symbol::X),
            "o" | "O" => Ok(Symbol::O),
            other => Err(BoardError::Parse {
                reason: format!("expected x or o, got {:?}", other),
            }),
        }
    }
}

/// Occupant of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell taken by a player.
    Occupied(Symbol),
}

impl Cell {
    /// Glyph used when printing or parsing boards.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Occupied(Symbol::X) => 'x',
            Cell::Occupied(Symbol::O) => 'o',
        }
    }

    fn from_glyph(c: char) -> Option<Self> {
        match c {
            '_' | '.' => Some(Cell::Empty),
            'x' | 'X' => Some(Cell::Occupied(Symbol::X)),
            'o' | 'O' => Some(Cell::Occupied(Symbol::O)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order, so index `i` sits at row `i / 3`,
/// column `i % 3`. The board only stores marks; whose turn it is lives with
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Creates a board from an explicit cell layout.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index, or `None` when out of range.
    pub fn cell(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Places `player` at `pos`.
    ///
    /// The cell is overwritten whatever it held before; callers check
    /// [`Board::empty_at`] first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if `pos` is not in `0..9`.
    #[instrument(skip(self))]
    pub fn replace(&mut self, pos: usize, player: Symbol) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(pos)
            .ok_or(BoardError::OutOfRange { pos })?;
        *cell = Cell::Occupied(player);
        Ok(())
    }

    /// Writes a cell directly. `pos` must be in range.
    pub(crate) fn set(&mut self, pos: usize, cell: Cell) {
        self.cells[pos] = cell;
    }

    /// Checks if a cell is empty. Out-of-range positions are never empty.
    pub fn empty_at(&self, pos: usize) -> bool {
        matches!(self.cell(pos), Some(Cell::Empty))
    }

    /// Indices of all empty cells, ascending.
    pub fn empty_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(pos, _)| pos)
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.empty_positions().count()
    }

    /// True when no cell is empty.
    pub fn full(&self) -> bool {
        rules::is_full(self)
    }

    /// True when `player` occupies every cell of some line.
    pub fn has_winner(&self, player: Symbol) -> bool {
        rules::has_winner(self, player)
    }

    /// Returns the symbol holding a complete line, if any.
    pub fn winner(&self) -> Option<Symbol> {
        rules::check_winner(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {} {}", chunk[0], chunk[1], chunk[2])?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine cell glyphs (`x`, `o`, `_` or `.`). Whitespace and `|`
    /// separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;

        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let cell = Cell::from_glyph(c).ok_or_else(|| BoardError::Parse {
                reason: format!("unexpected character {:?}", c),
            })?;
            if count == CELL_COUNT {
                return Err(BoardError::Parse {
                    reason: format!("more than {} cells", CELL_COUNT),
                });
            }
            cells[count] = cell;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(BoardError::Parse {
                reason: format!("expected {} cells, found {}", CELL_COUNT, count),
            });
        }

        Ok(Self { cells })
    }
}
