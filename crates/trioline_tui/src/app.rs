//! Application state and key handling.

use crate::i18n::Messages;
use crate::input;
use crossterm::event::KeyCode;
use tracing::{debug, info, warn};
use trioline::{Game, MoveOutcome, Outcome};

/// Main application state.
///
/// Owns the game engine and the injected message resolver. The renderer
/// reads this struct and never mutates it; all mutation happens through
/// [`App::handle_key`].
pub struct App {
    game: Game,
    messages: Messages,
    cursor: usize,
    modal: Option<Outcome>,
}

impl App {
    /// Creates a new application with the given message resolver.
    pub fn new(messages: Messages) -> Self {
        Self {
            game: Game::new(),
            messages,
            cursor: 4,
            modal: None,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the message resolver.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Gets the cursor position (0-8).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Gets the pending end-of-game modal, if one is showing.
    pub fn modal(&self) -> Option<Outcome> {
        self.modal
    }

    /// Handles a key press.
    ///
    /// While the end-of-game modal is up, board input is swallowed so a
    /// late click cannot race the notification; only acknowledging the
    /// modal is possible.
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.modal.is_some() {
            if matches!(key, KeyCode::Enter | KeyCode::Char('o')) {
                debug!("Modal acknowledged");
                self.modal = None;
            }
            return;
        }

        match key {
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('l') => {
                self.messages.toggle_lang();
                info!(lang = %self.messages.lang(), "Language switched");
            }
            KeyCode::Enter => self.play(self.cursor),
            key => {
                if let Some(pos) = input::digit_to_position(key) {
                    self.play(pos);
                } else {
                    self.cursor = input::move_cursor(self.cursor, key);
                }
            }
        }
    }

    /// Applies a move and raises the modal when the game ends.
    fn play(&mut self, pos: usize) {
        match self.game.apply_move(pos) {
            Ok(MoveOutcome::Placed) => {
                debug!(pos, "Mark placed");
            }
            Ok(MoveOutcome::Ended(outcome)) => {
                info!(%outcome, "Game ended");
                self.modal = Some(outcome);
            }
            Ok(MoveOutcome::Ignored) => {
                debug!(pos, "Input ignored");
            }
            Err(e) => {
                // Key mapping only produces 0-8, so this is a bug.
                warn!(error = %e, pos, "Engine rejected move");
            }
        }
    }

    /// Resets the game and clears any pending modal.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.modal = None;
    }
}
