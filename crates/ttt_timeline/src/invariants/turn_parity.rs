//! Viewed-step invariants: the step is in range and the turn matches its parity.

use super::super::GameState;
use super::Invariant;

/// Invariant: `step_number` indexes an existing snapshot.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        state.step_number() < state.history().len()
    }

    fn description() -> &'static str {
        "Viewed step is within the history"
    }
}

/// Invariant: X moves next exactly when the viewed step is even.
///
/// `x_is_next` is derived from the step, never independent state.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        state.x_is_next() == (state.step_number() % 2 == 0)
    }

    fn description() -> &'static str {
        "X moves next exactly on even steps"
    }
}
