//! Mark balance: the player moves first in every turn pair.

use super::Invariant;
use crate::{Board, Mark};

/// Invariant: player marks equal opponent marks, or exceed them by one.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let player = board.count(Mark::Player);
        let opponent = board.count(Mark::Opponent);
        player == opponent || player == opponent + 1
    }

    fn description() -> &'static str {
        "Player marks equal opponent marks or exceed them by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_boards_hold() {
        let board = Board::new();
        assert!(MarkBalanceInvariant::holds(&board));
        let board = board.with_mark(4, Mark::Player);
        assert!(MarkBalanceInvariant::holds(&board));
        let board = board.with_mark(0, Mark::Opponent);
        assert!(MarkBalanceInvariant::holds(&board));
    }

    #[test]
    fn test_opponent_ahead_violates() {
        let board = Board::new().with_mark(0, Mark::Opponent);
        assert!(!MarkBalanceInvariant::holds(&board));
    }

    #[test]
    fn test_player_two_ahead_violates() {
        let board = Board::new()
            .with_mark(0, Mark::Player)
            .with_mark(1, Mark::Player);
        assert!(!MarkBalanceInvariant::holds(&board));
    }
}
