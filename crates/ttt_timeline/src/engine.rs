//! The game engine: sole owner of the current [`GameState`].
//!
//! Presentation layers hold a `GameEngine`, read from [`GameEngine::state`]
//! and forward user events to [`play`](GameEngine::play),
//! [`jump_to`](GameEngine::jump_to) and
//! [`toggle_order`](GameEngine::toggle_order). Each event swaps in a new
//! state value; earlier values handed out by [`GameEngine::snapshot`] are
//! never modified.

#[cfg(debug_assertions)]
use super::contracts::{Contract, JumpContract, PlayContract};
use super::error::{EngineError, Rejection};
use super::state::GameState;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
#[cfg(debug_assertions)]
use tracing::error;

/// What happened to a `play` request.
///
/// Purely informational: an ignored move is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// The mark was placed.
    Played,
    /// The move was refused and the state is unchanged.
    Ignored(Rejection),
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates a new game.
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

    /// Returns an owned copy of the current state.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Plays the next player's mark at `index` (0-8).
    ///
    /// Moves on a won board, on an occupied square or outside the board are
    /// ignored and leave the state unchanged.
    #[instrument(skip(self), fields(step = self.state.step_number()))]
    pub fn play(&mut self, index: usize) -> PlayOutcome {
        let next = match self.state.play(index) {
            Ok(next) => next,
            Err(rejection) => {
                debug!(%rejection, "Move ignored");
                return PlayOutcome::Ignored(rejection);
            }
        };

        #[cfg(debug_assertions)]
        if let Err(e) = PlayContract::post(&self.state, &next) {
            error!(error = %e, "Move produced an inconsistent state, keeping previous state");
            return PlayOutcome::Ignored(Rejection::Inconsistent);
        }

        self.state = next;
        PlayOutcome::Played
    }

    /// Views the snapshot at `step` without altering the history.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StepOutOfRange`] if `step` is not a history
    /// index; the state is unchanged.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        let next = self.state.jump_to(step)?;

        #[cfg(debug_assertions)]
        if let Err(e) = JumpContract::post(&self.state, &next) {
            error!(error = %e, "Jump produced an inconsistent state");
            return Err(e);
        }

        debug!(step, x_is_next = next.x_is_next(), "Jumped");
        self.state = next;
        Ok(())
    }

    /// Flips the history display order.
    #[instrument(skip(self), fields(order_ascending = self.state.order_ascending()))]
    pub fn toggle_order(&mut self) {
        self.state = self.state.toggle_order();
    }

    /// Starts over with a new game, keeping the display order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        let order_ascending = self.state.order_ascending();
        let mut state = GameState::new();
        if !order_ascending {
            state = state.toggle_order();
        }
        self.state = state;
    }
}
