//! Root invariant: the first snapshot is the empty board.

use super::super::{Board, GameState, Location};
use super::Invariant;

/// Invariant: `history[0]` is the empty board at the default location.
pub struct RootIsEmptyInvariant;

impl Invariant<GameState> for RootIsEmptyInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .get(0)
            .is_some_and(|root| *root.squares() == Board::new() && root.location() == Location::default())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
