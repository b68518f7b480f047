//! Error and rejection types for the game engine.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Why a move was not applied.
///
/// Rejections are not failures: the engine leaves its state untouched and
/// carries on. They exist so callers can log or explain the no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The board at the current step already has a winning line.
    #[display("Game is already won")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The cell index does not name a square.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The resulting state failed its consistency checks (debug builds only).
    #[display("Resulting state is inconsistent")]
    Inconsistent,
}

/// Errors reported to the caller by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// `jump_to` was asked for a step that is not in the history.
    #[display("Step {} is out of range (history has {} entries)", step, history_len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Length of the history at the time of the request.
        history_len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", description)]
    InvariantViolation {
        /// Descriptions of the violated invariants.
        description: String,
    },
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            Rejection::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(
            Rejection::OutOfBounds(12).to_string(),
            "Cell 12 is out of bounds (must be 0-8)"
        );
    }

    #[test]
    fn test_step_out_of_range_message() {
        let err = EngineError::StepOutOfRange {
            step: 4,
            history_len: 2,
        };
        assert_eq!(
            err.to_string(),
            "Step 4 is out of range (history has 2 entries)"
        );
    }
}
