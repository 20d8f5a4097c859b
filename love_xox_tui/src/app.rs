//! Application state and logic.

use crate::input::Action;
use love_xox::{BoardGame, GameConfig, GameOutcome, GameView, Position, TimerEvent};
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Subtitle shown while the stage is locked.
const STAGE_HINT: &str = "Win to unlock the next challenge";

/// Secret revealed by winning this stage.
pub const UNLOCKED_SECRET: &str = "I smiled for 20 minutes after our first chat. 😊";

/// Overall progress, in percent, once this stage is complete.
pub const STAGE_PROGRESS: u16 = 33;

/// Main application state.
pub struct App {
    game: BoardGame,
    cursor: Position,
    completions: mpsc::UnboundedReceiver<()>,
    stage_unlocked: bool,
    should_quit: bool,
}

impl App {
    /// Creates an application with a session built from `config`.
    pub fn new(config: &GameConfig, completed: bool) -> Self {
        Self::from_game(BoardGame::new(config), completed)
    }

    /// Wraps an existing session, wiring its completion notification.
    pub fn from_game(game: BoardGame, completed: bool) -> Self {
        let (tx, completions) = mpsc::unbounded_channel();
        let mut game = game.with_completion(move || {
            if tx.send(()).is_err() {
                warn!("Completion receiver dropped");
            }
        });
        game.set_completed(completed);

        Self {
            game,
            cursor: Position::Center,
            completions,
            stage_unlocked: completed,
            should_quit: false,
        }
    }

    /// Projection of the board for rendering.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the host has been told the stage is won.
    pub fn stage_unlocked(&self) -> bool {
        self.stage_unlocked
    }

    /// Secret shown on the completion panel, once earned.
    pub fn unlocked_secret(&self) -> Option<&'static str> {
        self.stage_unlocked.then_some(UNLOCKED_SECRET)
    }

    /// Progress across all stages, in percent.
    pub fn progress(&self) -> u16 {
        if self.stage_unlocked { STAGE_PROGRESS } else { 0 }
    }

    /// True after the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// When the session next needs a tick.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.game.next_deadline()
    }

    /// Status line under the board.
    pub fn status_line(&self) -> String {
        if self.stage_unlocked {
            return "Completed! The next challenge is unlocked.".to_string();
        }
        match self.game.outcome() {
            GameOutcome::InProgress => STAGE_HINT.to_string(),
            outcome => outcome.message().to_string(),
        }
    }

    /// Applies a user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Cursor(step) => self.cursor = self.cursor.step(step),
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::Place(position) => {
                self.cursor = position;
                self.place(position);
            }
            Action::Reset => self.game.reset(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn place(&mut self, position: Position) {
        match self.game.apply_player_move(position.to_index()) {
            Ok(report) => debug!(?report, "Move applied"),
            // Rejections are ordinary clicks on the wrong cell; ignore them.
            Err(e) => debug!(error = %e, "Move ignored"),
        }
    }

    /// Fires due timers and collects completion notifications.
    #[instrument(skip(self))]
    pub fn tick(&mut self, now: Instant) {
        if let Some(event) = self.game.poll_timers(now) {
            debug!(?event, "Timer fired");
            if event == TimerEvent::Reset {
                self.cursor = Position::Center;
            }
        }
        while self.completions.try_recv().is_ok() {
            info!("Stage unlocked");
            self.stage_unlocked = true;
        }
    }
}
