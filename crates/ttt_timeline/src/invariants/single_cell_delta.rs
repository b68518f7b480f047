//! Delta invariant: each step fills exactly one previously empty cell.

use super::super::{GameState, Move, Square, location_of};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one cell, which goes
/// from empty to occupied, and the recorded location is that cell.
pub struct SingleCellDeltaInvariant;

/// Index of the single cell filled between `prev` and `next`, if there is exactly one.
pub(crate) fn filled_cell(prev: &Move, next: &Move) -> Option<usize> {
    let mut changed = prev
        .squares()
        .squares()
        .iter()
        .zip(next.squares().squares())
        .enumerate()
        .filter(|(_, (a, b))| a != b);

    match (changed.next(), changed.next()) {
        (Some((index, (Square::Empty, Square::Occupied(_)))), None) => Some(index),
        _ => None,
    }
}

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().moves().windows(2).all(|pair| {
            filled_cell(&pair[0], &pair[1])
                .is_some_and(|index| pair[1].location() == location_of(index))
        })
    }

    fn description() -> &'static str {
        "Each step fills exactly one empty cell at its recorded location"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::History;
    use crate::{Player, Position};

    #[test]
    fn test_played_game_holds() {
        let state = GameState::replay(&[4, 0, 8, 2, 1, 7]);
        assert!(SingleCellDeltaInvariant::holds(&state));
    }

    #[test]
    fn test_two_cells_in_one_step_violates() {
        let start = Move::start();
        let mut next = start.then(Position::Center, Player::X);
        next.squares.set(Position::TopLeft, Square::Occupied(Player::X));

        let mut state = GameState::new();
        state.history = History::from_moves(vec![start, next]);
        assert!(!SingleCellDeltaInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_location_violates() {
        let start = Move::start();
        let mut next = start.then(Position::Center, Player::X);
        next.location = Position::BottomRight.location();

        let mut state = GameState::new();
        state.history = History::from_moves(vec![start, next]);
        assert!(!SingleCellDeltaInvariant::holds(&state));
    }

    #[test]
    fn test_overwrite_violates() {
        let start = Move::start();
        let first = start.then(Position::Center, Player::X);
        let second = first.then(Position::Center, Player::O);

        let mut state = GameState::new();
        state.history = History::from_moves(vec![start, first, second]);
        assert!(!SingleCellDeltaInvariant::holds(&state));
    }
}
