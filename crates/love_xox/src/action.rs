//! Results and rejections of a player move.

use crate::types::GameOutcome;
use serde::{Deserialize, Serialize};

/// What happened when the player's move was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveReport {
    /// Index the player marked.
    pub player: usize,
    /// Index the opponent answered with, if the game was still open.
    pub opponent: Option<usize>,
    /// Outcome after both moves.
    pub outcome: GameOutcome,
}

/// Why a player move was rejected.
///
/// These are expected rejections from normal play (a click on a taken cell,
/// a click after the game ended). The board is untouched whenever one is
/// returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index is not on the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The current game reached a terminal outcome.
    #[display("Game is already over ({:?})", _0)]
    GameOver(GameOutcome),

    /// The host marked this stage as completed.
    #[display("Stage already completed")]
    AlreadyCompleted,
}

impl std::error::Error for MoveError {}
