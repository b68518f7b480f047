//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Position};
use super::win::evaluate;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    Position::iter().all(|pos| !board.is_empty(pos))
}

/// A draw is a full board with no winning line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !evaluate(board).is_winner()
}
