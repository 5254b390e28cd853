//! Game engine for tic-tac-toe.
//!
//! The engine owns the game state and is the only writer. Callers apply
//! moves by board index and observe the result through [`MoveOutcome`];
//! the `Ended` variant is the game-ended signal, produced exactly once
//! per terminal transition.

use crate::rules;
use crate::types::{GameState, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Result of applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Mark placed; the game continues with the other player.
    Placed,
    /// Mark placed and the game ended with this outcome.
    ///
    /// This is the game-ended signal: it is returned only by the call
    /// that made the terminal transition, so a notification collaborator
    /// can act on it without tracking state itself.
    Ended(Outcome),
    /// Input ignored: the square was occupied or the game was already
    /// over. The state is unchanged.
    Ignored,
}

/// Error that can occur when applying a move.
///
/// Anything a player can cause through normal (possibly latent) UI
/// events is a defined no-op, not an error; only an out-of-range index,
/// which indicates a caller bug, surfaces here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Position outside the board (must be 0-8).
    #[display("Position {} is out of range (must be 0-8)", _0)]
    InvalidPosition(usize),
}

impl std::error::Error for MoveError {}

/// Tic-tac-toe game engine.
///
/// Sole authority over game progression: the board and turn are always
/// mutually consistent, and the status always reflects the current board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies a move at the given position (0-8).
    ///
    /// A move on an occupied square or a finished game is a no-op
    /// returning [`MoveOutcome::Ignored`]; retries and late clicks are
    /// expected from the UI. When the move ends the game the turn stays
    /// with the mover and [`MoveOutcome::Ended`] carries the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidPosition`] if `pos` is outside 0-8.
    /// This is checked before anything else: a contract violation is
    /// surfaced even when the game is over.
    #[instrument(skip(self), fields(player = %self.state.to_move()))]
    pub fn apply_move(&mut self, pos: usize) -> Result<MoveOutcome, MoveError> {
        if pos >= 9 {
            return Err(MoveError::InvalidPosition(pos));
        }

        if self.state.status().is_over() {
            debug!(pos, "Move ignored: game is over");
            return Ok(MoveOutcome::Ignored);
        }

        if !self.state.board().is_empty(pos) {
            debug!(pos, "Move ignored: square occupied");
            return Ok(MoveOutcome::Ignored);
        }

        self.state.place(pos);

        match rules::evaluate(self.state.board()) {
            GameStatus::InProgress => {
                self.state.flip_turn();
                debug!(pos, next = %self.state.to_move(), "Mark placed");
                Ok(MoveOutcome::Placed)
            }
            GameStatus::Won(winner) => {
                info!(pos, %winner, board = %self.state.board(), "Game won");
                Ok(MoveOutcome::Ended(Outcome::Winner(winner)))
            }
            GameStatus::Draw => {
                info!(pos, board = %self.state.board(), "Game drawn");
                Ok(MoveOutcome::Ended(Outcome::Draw))
            }
        }
    }

    /// Resets the game to the initial state.
    ///
    /// Always succeeds and never produces a game-ended signal; the state
    /// is replaced wholesale.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.state = GameState::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
