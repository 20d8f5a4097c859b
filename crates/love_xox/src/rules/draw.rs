//! Full-board and outcome evaluation.

use super::win::check_winner;
use crate::types::{Board, Cell, GameOutcome, Mark};
use tracing::instrument;

/// Returns true if every cell is occupied.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

/// Derives the outcome of `board`.
///
/// A completed line takes priority over a full board.
#[instrument(level = "trace", skip(board))]
pub fn outcome(board: &Board) -> GameOutcome {
    match check_winner(board) {
        Some(Mark::Player) => GameOutcome::PlayerWin,
        Some(Mark::Opponent) => GameOutcome::OpponentWin,
        None if is_full(board) => GameOutcome::Draw,
        None => GameOutcome::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: Cell = Cell::Occupied(Mark::Player);
    const O: Cell = Cell::Occupied(Mark::Opponent);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert_eq!(outcome(&Board::new()), GameOutcome::InProgress);
    }

    #[test]
    fn test_draw_detection() {
        // P O P / P O O / O P P
        let board = Board::from_cells([P, O, P, P, O, O, O, P, P]);
        assert!(is_full(&board));
        assert_eq!(outcome(&board), GameOutcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        // P P P / O O P / P O O
        let board = Board::from_cells([P, P, P, O, O, P, P, O, O]);
        assert_eq!(outcome(&board), GameOutcome::PlayerWin);
    }

    #[test]
    fn test_opponent_win() {
        let board = Board::from_cells([P, P, O, E, O, E, O, P, E]);
        assert_eq!(outcome(&board), GameOutcome::OpponentWin);
    }
}
