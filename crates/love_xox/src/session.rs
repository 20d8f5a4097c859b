//! The XOX stage: one human against the weakened opponent.
//!
//! [`BoardGame`] owns the board and enforces turn order. After every
//! accepted player move the opponent answers synchronously. Terminal
//! outcomes lock input and schedule a timer that the host drives through
//! [`BoardGame::poll_timers`]: a player win schedules the one-shot
//! completion notification, a draw or loss schedules a fresh board.

use crate::action::{MoveError, MoveReport};
use crate::config::{Delays, GameConfig};
use crate::rules;
use crate::search::Opponent;
use crate::types::{Board, CELL_COUNT, GameOutcome, Mark};
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, error, info, instrument};

/// Callback invoked once when the player wins the stage.
pub type CompletionCallback = Box<dyn FnMut() + Send>;

/// Work scheduled after a terminal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerEvent {
    /// Tell the host the stage is complete.
    NotifyComplete,
    /// Clear the board for another attempt.
    Reset,
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    event: TimerEvent,
    due: Instant,
}

/// Read-only projection for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Current board.
    pub board: Board,
    /// Outcome of the current board.
    pub outcome: GameOutcome,
    /// Whether the stage has been completed.
    pub completed: bool,
    /// Status line for the outcome.
    pub message: String,
}

/// A game session against the computer opponent.
pub struct BoardGame<R = StdRng> {
    board: Board,
    outcome: GameOutcome,
    completed: bool,
    pending: Option<PendingTimer>,
    delays: Delays,
    opponent: Opponent<R>,
    on_complete: Option<CompletionCallback>,
}

impl BoardGame<StdRng> {
    /// Creates a session from configuration.
    ///
    /// Uses the configured seed when present, OS entropy otherwise.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        let probability = *config.mistake_probability();
        let opponent = match config.seed() {
            Some(seed) => Opponent::seeded(*seed, probability),
            None => Opponent::from_entropy(probability),
        };
        info!(mistake_probability = probability, seed = ?config.seed(), "Creating game session");
        Self::with_opponent(opponent, config.delays())
    }
}

impl<R: Rng> BoardGame<R> {
    /// Creates a session with a specific opponent.
    pub fn with_opponent(opponent: Opponent<R>, delays: Delays) -> Self {
        Self {
            board: Board::new(),
            outcome: GameOutcome::InProgress,
            completed: false,
            pending: None,
            delays,
            opponent,
            on_complete: None,
        }
    }

    /// Registers the completion callback.
    pub fn with_completion(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Resumes play from `board`.
    ///
    /// The outcome is recomputed from the board. No timer is scheduled, so
    /// a terminal board stays put until [`reset`](Self::reset).
    #[instrument(skip(self, board))]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self.outcome = rules::outcome(&board);
        self.pending = None;
        self.check_invariants();
        debug!(outcome = ?self.outcome, "Resumed from board");
        self
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// True while a terminal outcome is on the board.
    pub fn is_locked(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// True once the host was notified, or marked the stage done itself.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Marks the stage as already completed (or not), e.g. when restoring
    /// progress. A completed stage rejects every move.
    #[instrument(skip(self))]
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    /// When the pending timer fires, if one is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|pending| pending.due)
    }

    /// Event the pending timer will fire, if one is scheduled.
    pub fn pending_event(&self) -> Option<TimerEvent> {
        self.pending.map(|pending| pending.event)
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> GameView {
        GameView {
            board: self.board,
            outcome: self.outcome,
            completed: self.completed,
            message: self.outcome.message().to_string(),
        }
    }

    /// Plays the human's mark at `index` and lets the opponent answer.
    ///
    /// Rejected moves leave the session untouched.
    #[instrument(skip(self))]
    pub fn apply_player_move(&mut self, index: usize) -> Result<MoveReport, MoveError> {
        if self.completed {
            return Err(MoveError::AlreadyCompleted);
        }
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfBounds(index));
        }
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver(self.outcome));
        }
        if !self.board.is_empty(index) {
            return Err(MoveError::CellOccupied(index));
        }

        let before = self.board;
        self.board.place(index, Mark::Player);
        self.outcome = rules::outcome(&self.board);
        debug!(index, outcome = ?self.outcome, "Player moved");

        let mut answer = None;
        if !self.outcome.is_terminal() {
            match self.opponent.choose(&self.board) {
                Some(reply) => {
                    self.board.place(reply, Mark::Opponent);
                    self.outcome = rules::outcome(&self.board);
                    answer = Some(reply);
                    debug!(index = reply, outcome = ?self.outcome, "Opponent moved");
                }
                None => error!("Opponent found no open cell on an unfinished board"),
            }
        }

        self.check_invariants();
        self.check_transition(&before);
        self.schedule_for_outcome();
        debug!(board = %self.board.display(), "Board after move");

        Ok(MoveReport::new(index, answer, self.outcome))
    }

    /// Clears the board and cancels any pending timer.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.outcome = GameOutcome::InProgress;
        self.pending = None;
        info!("Board reset");
    }

    /// Fires the pending timer if `now` has reached its deadline.
    ///
    /// Returns the event that fired.
    #[instrument(skip(self))]
    pub fn poll_timers(&mut self, now: Instant) -> Option<TimerEvent> {
        let pending = self.pending.filter(|pending| pending.due <= now)?;
        self.pending = None;

        match pending.event {
            TimerEvent::NotifyComplete => self.notify_completion(),
            TimerEvent::Reset => self.reset(),
        }
        Some(pending.event)
    }

    fn notify_completion(&mut self) {
        if self.completed {
            debug!("Stage already completed, skipping notification");
            return;
        }
        self.completed = true;
        info!("Stage complete");
        if let Some(callback) = self.on_complete.as_mut() {
            callback();
        }
    }

    fn schedule_for_outcome(&mut self) {
        let (event, delay) = match self.outcome {
            GameOutcome::InProgress => return,
            GameOutcome::PlayerWin => (TimerEvent::NotifyComplete, self.delays.win_notify),
            GameOutcome::OpponentWin | GameOutcome::Draw => {
                (TimerEvent::Reset, self.delays.restart)
            }
        };
        info!(outcome = ?self.outcome, ?event, ?delay, "Game over");
        self.pending = Some(PendingTimer {
            event,
            due: Instant::now() + delay,
        });
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use crate::invariants::{BoardInvariants, InvariantSet};

        if let Err(violations) = BoardInvariants::check_all(&self.board) {
            for violation in &violations {
                error!(%violation, board = %self.board.display(), "Invariant violated");
            }
        }
    }

    #[cfg(not(debug_assertions))]
    fn check_invariants(&self) {}

    #[cfg(debug_assertions)]
    fn check_transition(&self, before: &Board) {
        use crate::invariants::{self, MonotonicBoardInvariant};

        if let Err(violation) =
            invariants::check::<_, MonotonicBoardInvariant>(&(*before, self.board))
        {
            error!(
                %violation,
                before = %before.display(),
                after = %self.board.display(),
                "Invariant violated"
            );
        }
    }

    #[cfg(not(debug_assertions))]
    fn check_transition(&self, _before: &Board) {}
}

impl<R> std::fmt::Debug for BoardGame<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardGame")
            .field("board", &self.board)
            .field("outcome", &self.outcome)
            .field("completed", &self.completed)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
