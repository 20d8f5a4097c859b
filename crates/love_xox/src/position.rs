//! Named cells for hosts that navigate the board by direction.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the 3x3 grid, row-major.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Position {
    /// Index 0.
    #[strum(to_string = "Top-left")]
    TopLeft,
    /// Index 1.
    #[strum(to_string = "Top-center")]
    TopCenter,
    /// Index 2.
    #[strum(to_string = "Top-right")]
    TopRight,
    /// Index 3.
    #[strum(to_string = "Middle-left")]
    MiddleLeft,
    /// Index 4.
    #[strum(to_string = "Center")]
    Center,
    /// Index 5.
    #[strum(to_string = "Middle-right")]
    MiddleRight,
    /// Index 6.
    #[strum(to_string = "Bottom-left")]
    BottomLeft,
    /// Index 7.
    #[strum(to_string = "Bottom-center")]
    BottomCenter,
    /// Index 8.
    #[strum(to_string = "Bottom-right")]
    BottomRight,
}

/// Direction of a cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl Position {
    /// All nine positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Position for a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Moves one cell in `step`, staying put at the edge.
    #[instrument]
    pub fn step(self, step: Step) -> Self {
        let (row, col) = (self.row(), self.col());
        let (row, col) = match step {
            Step::Up => (row.saturating_sub(1), col),
            Step::Down => ((row + 1).min(2), col),
            Step::Left => (row, col.saturating_sub(1)),
            Step::Right => (row, (col + 1).min(2)),
        };
        Self::ALL[row * 3 + col]
    }

    /// Positions that are still open on `board`.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(pos.to_index()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip_matches_iteration_order() {
        for (index, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_step_inside_grid() {
        assert_eq!(Position::Center.step(Step::Up), Position::TopCenter);
        assert_eq!(Position::Center.step(Step::Right), Position::MiddleRight);
        assert_eq!(Position::TopLeft.step(Step::Down), Position::MiddleLeft);
    }

    #[test]
    fn test_step_clamps_at_edges() {
        assert_eq!(Position::TopLeft.step(Step::Up), Position::TopLeft);
        assert_eq!(Position::TopLeft.step(Step::Left), Position::TopLeft);
        assert_eq!(Position::BottomRight.step(Step::Down), Position::BottomRight);
        assert_eq!(Position::BottomRight.step(Step::Right), Position::BottomRight);
    }

    #[test]
    fn test_valid_moves_skip_occupied() {
        let board = Board::new().with_mark(4, Mark::Player);
        let moves = Position::valid_moves(&board);
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Position::Center));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Position::BottomCenter.to_string(), "Bottom-center");
    }
}
