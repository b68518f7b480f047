//! Game state snapshots and their transitions.
//!
//! A [`GameState`] is a value. Every transition returns a fresh state and
//! leaves the original alone, so earlier states can be kept and compared.

use super::contracts::{CellInBounds, Contract, JumpContract, PlayContract, check_invariants};
use super::error::{EngineError, Rejection};
use super::history::{History, Move};
use super::rules::{self, Evaluation, Line};
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Where the game stands at the viewed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; `next` plays the next mark.
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// A player holds a full line.
    Won {
        /// The winner.
        player: Player,
        /// The winning line.
        line: Line,
    },
    /// Board is full with no winning line.
    Draw,
}

/// Complete game state.
///
/// Deserialized states are checked against the full invariant set, so a
/// stored game with a step outside its history or a broken timeline is
/// refused rather than loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedGameState")]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) step_number: usize,
    pub(crate) x_is_next: bool,
    pub(crate) order_ascending: bool,
}

/// Wire form of [`GameState`] before its invariants are checked.
#[derive(Deserialize)]
struct UncheckedGameState {
    history: History,
    step_number: usize,
    x_is_next: bool,
    order_ascending: bool,
}

impl TryFrom<UncheckedGameState> for GameState {
    type Error = EngineError;

    fn try_from(raw: UncheckedGameState) -> Result<Self, Self::Error> {
        let state = Self {
            history: raw.history,
            step_number: raw.step_number,
            x_is_next: raw.x_is_next,
            order_ascending: raw.order_ascending,
        };
        check_invariants(&state)?;
        Ok(state)
    }
}

impl GameState {
    /// Creates a new game: one empty snapshot, X to move, ascending order.
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step_number: 0,
            x_is_next: true,
            order_ascending: true,
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the viewed snapshot.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// True when X plays the next mark.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Display preference for the history list.
    pub fn order_ascending(&self) -> bool {
        self.order_ascending
    }

    /// Snapshot at the viewed step.
    pub fn current(&self) -> &Move {
        &self.history.moves()[self.step_number]
    }

    /// Board at the viewed step.
    pub fn current_board(&self) -> &Board {
        self.current().squares()
    }

    /// Player who moves next.
    pub fn next_player(&self) -> Player {
        Player::from_x_is_next(self.x_is_next)
    }

    /// Evaluation of the board at the viewed step.
    pub fn evaluation(&self) -> Evaluation {
        rules::evaluate(self.current_board())
    }

    /// Status at the viewed step.
    pub fn status(&self) -> GameStatus {
        match self.evaluation() {
            Evaluation::Winner { player, line } => GameStatus::Won { player, line },
            Evaluation::NoWinner if rules::is_full(self.current_board()) => GameStatus::Draw,
            Evaluation::NoWinner => GameStatus::InProgress {
                next: self.next_player(),
            },
        }
    }

    /// Plays the next player's mark at `index`.
    ///
    /// Any moves after the viewed step are discarded before the new snapshot
    /// is appended.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] when the board is already won, the cell is
    /// occupied, or `index` is not 0-8. The caller keeps its state.
    #[instrument(skip(self), fields(step = self.step_number, x_is_next = self.x_is_next))]
    pub fn play(&self, index: usize) -> Result<Self, Rejection> {
        PlayContract::pre(self, &index)?;
        let pos = CellInBounds::check(index)?;

        let next = self.current().then(pos, self.next_player());
        let history = self.history.branch(self.step_number, next);
        let step_number = history.len() - 1;
        debug!(
            position = %pos,
            step_number,
            discarded = self.history.len() - (self.step_number + 1),
            "Move applied"
        );

        Ok(Self {
            history,
            step_number,
            x_is_next: !self.x_is_next,
            order_ascending: self.order_ascending,
        })
    }

    /// Views the snapshot at `step`. History is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StepOutOfRange`] if `step` is not a history index.
    #[instrument(skip(self), fields(history_len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<Self, EngineError> {
        JumpContract::pre(self, &step)?;

        Ok(Self {
            history: self.history.clone(),
            step_number: step,
            x_is_next: step % 2 == 0,
            order_ascending: self.order_ascending,
        })
    }

    /// Flips the history display order.
    pub fn toggle_order(&self) -> Self {
        Self {
            order_ascending: !self.order_ascending,
            ..self.clone()
        }
    }

    /// Plays `cells` in order from a new game, skipping rejected moves.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Self {
        cells.iter().fold(Self::new(), |state, &cell| {
            state.play(cell).unwrap_or(state)
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
