//! Contract-based validation for state transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use super::error::{EngineError, Rejection};
use super::invariants::{InvariantSet, TimelineInvariants};
use super::position::Position;
use super::state::GameState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Reason an action is refused before it is applied.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), EngineError>;
}

// ─────────────────────────────────────────────────────────────
//  Play Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the index names a square.
pub struct CellInBounds;

impl CellInBounds {
    /// Returns the named position.
    #[instrument]
    pub fn check(index: usize) -> Result<Position, Rejection> {
        Position::from_index(index).ok_or(Rejection::OutOfBounds(index))
    }
}

/// Precondition: nobody has won on the viewed board.
pub struct GameNotWon;

impl GameNotWon {
    /// Checks the viewed board.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), Rejection> {
        if state.evaluation().is_winner() {
            Err(Rejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square is empty on the viewed board.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks `pos` on the viewed board.
    #[instrument(skip(state))]
    pub fn check(pos: Position, state: &GameState) -> Result<(), Rejection> {
        if state.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(pos))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for `play`.
///
/// Preconditions:
/// - Index is 0-8
/// - No winning line on the viewed board
/// - Square is empty
///
/// Postconditions:
/// - Steps up to the old viewed step are carried over unchanged
/// - The new snapshot is the last one and is viewed
/// - All timeline invariants hold
pub struct PlayContract;

impl Contract<GameState, usize> for PlayContract {
    type Rejection = Rejection;

    fn pre(state: &GameState, index: &usize) -> Result<(), Rejection> {
        let pos = CellInBounds::check(*index)?;
        GameNotWon::check(state)?;
        SquareIsEmpty::check(pos, state)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), EngineError> {
        let kept = before.step_number() + 1;
        if after.history().len() != kept + 1
            || after.history().moves()[..kept] != before.history().moves()[..kept]
        {
            return Err(EngineError::InvariantViolation {
                description: "Postcondition failed: history was not branched at the viewed step"
                    .to_string(),
            });
        }
        if after.step_number() != kept {
            return Err(EngineError::InvariantViolation {
                description: "Postcondition failed: new move is not the viewed step".to_string(),
            });
        }
        check_invariants(after)
    }
}

/// Contract for `jump_to`.
///
/// History is untouched and every invariant still holds.
pub struct JumpContract;

impl Contract<GameState, usize> for JumpContract {
    type Rejection = EngineError;

    fn pre(state: &GameState, step: &usize) -> Result<(), EngineError> {
        if *step < state.history().len() {
            Ok(())
        } else {
            Err(EngineError::StepOutOfRange {
                step: *step,
                history_len: state.history().len(),
            })
        }
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), EngineError> {
        if before.history() != after.history() {
            return Err(EngineError::InvariantViolation {
                description: "Postcondition failed: jump altered the history".to_string(),
            });
        }
        check_invariants(after)
    }
}

/// Checks the full invariant set, folding violations into one error.
#[instrument(skip(state))]
pub fn check_invariants(state: &GameState) -> Result<(), EngineError> {
    TimelineInvariants::check_all(state).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Invariant check failed");
        EngineError::InvariantViolation {
            description: format!("Postcondition failed: {}", descriptions),
        }
    })
}

/// Whether `index` can be played on the viewed board.
pub fn is_playable(state: &GameState, index: usize) -> bool {
    PlayContract::pre(state, &index).is_ok()
}
