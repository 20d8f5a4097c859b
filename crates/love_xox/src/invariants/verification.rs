//! Kani harnesses for the board invariants.

#[cfg(kani)]
mod proofs {
    use crate::invariants::{Invariant, MarkBalanceInvariant, SingleWinnerInvariant};
    use crate::rules::check_winner;
    use crate::{Board, Mark};

    /// Alternating play from an empty board keeps marks balanced and never
    /// produces two winners, as long as play stops at the first win.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_alternating_play_preserves_invariants() {
        let mut board = Board::new();
        let mut to_move = Mark::Player;

        for _ in 0..9 {
            if check_winner(&board).is_some() {
                break;
            }
            let index: usize = kani::any();
            kani::assume(board.is_empty(index));
            board = board.with_mark(index, to_move);
            to_move = to_move.opponent();

            assert!(MarkBalanceInvariant::holds(&board));
            assert!(SingleWinnerInvariant::holds(&board));
        }
    }
}
