//! Monotonic board invariant: occupied cells never change within a game.

use super::Invariant;
use crate::{Board, Cell};

/// Invariant: every occupied cell keeps its mark across a move.
///
/// Checked over a `(before, after)` pair. Only a reset may clear cells, and
/// resets are not moves, so they are never checked against this.
pub struct MonotonicBoardInvariant;

impl Invariant<(Board, Board)> for MonotonicBoardInvariant {
    fn holds((before, after): &(Board, Board)) -> bool {
        before
            .cells()
            .iter()
            .zip(after.cells())
            .all(|(old, new)| *old == Cell::Empty || old == new)
    }

    fn description() -> &'static str {
        "Occupied cells are never overwritten or cleared by a move"
    }
}
