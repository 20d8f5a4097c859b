//! Single winner: both marks never complete a line on the same board.

use super::Invariant;
use crate::rules::WINNING_LINES;
use crate::{Board, Cell, Mark};

/// Invariant: at most one mark owns a completed line.
pub struct SingleWinnerInvariant;

impl SingleWinnerInvariant {
    fn owns_line(board: &Board, mark: Mark) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&i| board.get(i) == Some(Cell::Occupied(mark))))
    }
}

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        !(Self::owns_line(board, Mark::Player) && Self::owns_line(board, Mark::Opponent))
    }

    fn description() -> &'static str {
        "At most one mark completes a winning line"
    }
}
