//! Opponent move selection.
//!
//! The opponent plays perfect minimax most of the time. With a fixed
//! probability it instead picks a random open cell, which keeps the game
//! winnable for the human.

use crate::rules;
use crate::types::{Board, GameOutcome, Mark};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Probability of a random move used by the stage.
pub const DEFAULT_MISTAKE_PROBABILITY: f64 = 0.4;

/// Leaf score for a completed line. Positive favours the opponent.
pub const WIN_SCORE: i32 = 10;

/// Scores `board` by exhaustive search.
///
/// `maximizing` is true when the opponent is to move. Leaves score
/// `+WIN_SCORE` for an opponent win, `-WIN_SCORE` for a player win and 0 for
/// a draw, with no depth discount. Every branch works on its own copy of the
/// board.
pub fn minimax(board: Board, maximizing: bool) -> i32 {
    match rules::outcome(&board) {
        GameOutcome::OpponentWin => return WIN_SCORE,
        GameOutcome::PlayerWin => return -WIN_SCORE,
        GameOutcome::Draw => return 0,
        GameOutcome::InProgress => {}
    }

    let mark = if maximizing { Mark::Opponent } else { Mark::Player };
    let scores = board
        .empty_indices()
        .into_iter()
        .map(|index| minimax(board.with_mark(index, mark), !maximizing));

    let best = if maximizing { scores.max() } else { scores.min() };
    // An in-progress board always has an open cell.
    best.unwrap_or(0)
}

/// Best opponent move on `board`, or `None` if the board is full.
///
/// Candidates are tried in ascending index order and only a strictly better
/// score replaces the current pick, so ties go to the lowest index.
#[instrument(skip(board))]
pub fn best_move(board: &Board) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for index in board.empty_indices() {
        let score = minimax(board.with_mark(index, Mark::Opponent), false);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }
    debug!(?best, "Search finished");
    best.map(|(index, _)| index)
}

/// The computer opponent: minimax weakened by random mistakes.
#[derive(Debug, Clone)]
pub struct Opponent<R = StdRng> {
    rng: R,
    mistake_probability: f64,
}

impl Opponent<StdRng> {
    /// Opponent seeded for reproducible play.
    pub fn seeded(seed: u64, mistake_probability: f64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), mistake_probability)
    }

    /// Opponent seeded from OS entropy.
    pub fn from_entropy(mistake_probability: f64) -> Self {
        Self::with_rng(StdRng::from_os_rng(), mistake_probability)
    }

    /// Opponent that always searches and never loses.
    pub fn perfect() -> Self {
        Self::seeded(0, 0.0)
    }
}

impl<R: Rng> Opponent<R> {
    /// Opponent drawing its mistakes from `rng`.
    ///
    /// A probability of 0.0 always searches; 1.0 always plays randomly.
    pub fn with_rng(rng: R, mistake_probability: f64) -> Self {
        Self {
            rng,
            mistake_probability,
        }
    }

    /// Chance of playing a random move instead of searching.
    pub fn mistake_probability(&self) -> f64 {
        self.mistake_probability
    }

    /// Picks the opponent's next cell, or `None` if the board is full.
    #[instrument(skip(self, board), fields(mistake_probability = self.mistake_probability))]
    pub fn choose(&mut self, board: &Board) -> Option<usize> {
        let open = board.empty_indices();
        if open.is_empty() {
            return None;
        }

        if self.rng.random::<f64>() < self.mistake_probability {
            let index = open[self.rng.random_range(0..open.len())];
            debug!(index, "Opponent plays a random move");
            return Some(index);
        }

        let index = best_move(board);
        debug!(?index, "Opponent plays the searched move");
        index
    }
}
