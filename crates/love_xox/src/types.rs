//! Core domain types for the XOX board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Which side owns a mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// The human player (always moves first).
    #[strum(to_string = "❤")]
    Player,
    /// The computer opponent.
    #[strum(to_string = "💔")]
    Opponent,
}

impl Mark {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Player => Mark::Opponent,
            Mark::Opponent => Mark::Player,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 board stored in row-major order (indices 0-8).
///
/// The board is `Copy` so search branches can work on their own scratch
/// copy instead of mutating and undoing a shared buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from raw cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns true if `index` is on the board and unoccupied.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Unoccupied indices in ascending order.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Writes `mark` at `index`.
    ///
    /// Callers check bounds and vacancy first; this only places the mark.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Occupied(mark);
        }
    }

    /// Returns a copy of this board with `mark` written at `index`.
    pub(crate) fn with_mark(mut self, index: usize, mark: Mark) -> Self {
        self.place(index, mark);
        self
    }

    /// Formats the board as a compact grid for logs.
    #[instrument(skip(self))]
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Occupied(Mark::Player) => "X".to_string(),
                    Cell::Occupied(Mark::Opponent) => "O".to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Outcome derived from a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No line completed and cells remain.
    #[default]
    InProgress,
    /// The human completed a line.
    PlayerWin,
    /// The opponent completed a line.
    OpponentWin,
    /// Board full with no completed line.
    Draw,
}

impl GameOutcome {
    /// Returns true for any outcome other than `InProgress`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Short status line shown by hosts.
    pub fn message(self) -> &'static str {
        match self {
            GameOutcome::InProgress => "",
            GameOutcome::PlayerWin => "You won! 🎉",
            GameOutcome::OpponentWin => "Hmm… try again 😏",
            GameOutcome::Draw => "It's a draw! Restarting… 🔄",
        }
    }
}
