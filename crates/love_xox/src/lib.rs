//! Love XOX - the board game stage with a beatable opponent.
//!
//! # Architecture
//!
//! - **Types**: marks, cells, the 3x3 board and derived outcomes
//! - **Rules**: win and draw detection as pure functions
//! - **Search**: minimax plus the random-mistake opponent policy
//! - **Session**: [`BoardGame`], turn order, timers and the one-shot
//!   completion notification
//! - **Invariants**: board properties checked after each transition
//!
//! # Example
//!
//! ```
//! use love_xox::{BoardGame, Delays, GameOutcome, Opponent};
//!
//! let mut game = BoardGame::with_opponent(Opponent::perfect(), Delays::default());
//! let report = game.apply_player_move(4).unwrap();
//! assert_eq!(report.opponent, Some(0));
//! assert_eq!(game.outcome(), GameOutcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod position;
mod search;
mod session;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{MoveError, MoveReport};
pub use config::{
    ConfigError, DEFAULT_RESTART_DELAY_MS, DEFAULT_WIN_NOTIFY_DELAY_MS, Delays, GameConfig,
};
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    MonotonicBoardInvariant, SingleWinnerInvariant,
};
pub use position::{Position, Step};
pub use rules::{WINNING_LINES, check_winner, is_full, outcome};
pub use search::{DEFAULT_MISTAKE_PROBABILITY, Opponent, WIN_SCORE, best_move, minimax};
pub use session::{BoardGame, CompletionCallback, GameView, TimerEvent};
pub use types::{Board, CELL_COUNT, Cell, GameOutcome, Mark};
