//! Alternating marks invariant: X plays odd steps, O plays even steps.

use super::super::{GameState, Player, Square};
use super::Invariant;
use super::single_cell_delta::filled_cell;

/// Invariant: the mark placed at step k is X when k is odd and O when k is even.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let moves = state.history().moves();
        moves.windows(2).enumerate().all(|(i, pair)| {
            let step = i + 1;
            let expected = if step % 2 == 1 { Player::X } else { Player::O };
            filled_cell(&pair[0], &pair[1])
                .and_then(|index| pair[1].squares().get_index(index))
                == Some(Square::Occupied(expected))
        })
    }

    fn description() -> &'static str {
        "Players alternate marks (X, O, X, O, ...)"
    }
}
