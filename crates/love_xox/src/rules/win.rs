//! Win detection.

use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// The eight lines that win the game: rows, then columns, then diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the mark filling any winning line.
///
/// Lines are scanned in [`WINNING_LINES`] order and the first full line wins.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(mark) if cells[b] == cells[a] && cells[c] == cells[a] => Some(mark),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, &(index, mark)| board.with_mark(index, mark))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_both_marks() {
        for mark in [Mark::Player, Mark::Opponent] {
            for line in WINNING_LINES {
                let board = board_with(&line.map(|index| (index, mark)));
                assert_eq!(check_winner(&board), Some(mark), "line {line:?}");
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Mark::Player), (1, Mark::Player), (2, Mark::Opponent)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_iff_some_line_full() {
        // Walk every board reachable by alternating play and compare against
        // a direct scan of the lines.
        fn walk(board: Board, to_move: Mark) {
            let expected = WINNING_LINES.iter().find_map(|line| {
                let first = board.get(line[0])?.mark()?;
                line.iter()
                    .all(|&i| board.get(i) == Some(Cell::Occupied(first)))
                    .then_some(first)
            });
            assert_eq!(check_winner(&board), expected);
            if expected.is_some() {
                return;
            }
            for index in board.empty_indices() {
                walk(board.with_mark(index, to_move), to_move.opponent());
            }
        }
        walk(Board::new(), Mark::Player);
    }
}
