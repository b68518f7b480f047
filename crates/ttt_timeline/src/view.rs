//! Presentation-ready views derived from a [`GameState`].
//!
//! Nothing here is engine state. Frontends call these functions on every
//! redraw to get status text, the ordered move list and the cells to
//! highlight.

use super::position::{Location, Position};
use super::state::{GameState, GameStatus};
use super::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status line for the viewed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum StatusLine {
    /// A player holds a full line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Board is full with no winner.
    #[display("Draw")]
    Draw,
    /// Game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl From<GameStatus> for StatusLine {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::Won { player, .. } => StatusLine::Winner(player),
            GameStatus::Draw => StatusLine::Draw,
            GameStatus::InProgress { next } => StatusLine::NextPlayer(next),
        }
    }
}

/// Status line for the viewed step of `state`.
pub fn status_line(state: &GameState) -> StatusLine {
    state.status().into()
}

/// Label of the control that flips the history order.
pub fn sort_label(order_ascending: bool) -> &'static str {
    if order_ascending {
        "Sort Descending"
    } else {
        "Sort Ascending"
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// History index to pass to `jump_to` when this entry is activated.
    pub step: usize,
    /// "Go to game start" or "Go to move #n".
    pub description: String,
    /// Cell played at this step; `None` for the start.
    pub location: Option<Location>,
    /// True for the viewed step.
    pub is_current: bool,
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)?;
        if let Some(location) = self.location {
            write!(f, " Location: {}", location)?;
        }
        Ok(())
    }
}

/// The move list in the order chosen by `order_ascending`.
///
/// Each entry keeps its own history index, so activating any row jumps to
/// the right step whichever way the list is sorted.
#[instrument(skip(state), fields(len = state.history().len(), ascending = state.order_ascending()))]
pub fn history_entries(state: &GameState) -> Vec<HistoryEntry> {
    let entries = state.history().iter().enumerate().map(|(step, mv)| {
        let (description, location) = if step == 0 {
            ("Go to game start".to_string(), None)
        } else {
            (format!("Go to move #{}", step), Some(mv.location()))
        };
        HistoryEntry {
            step,
            description,
            location,
            is_current: step == state.step_number(),
        }
    });

    if state.order_ascending() {
        entries.collect()
    } else {
        entries.rev().collect()
    }
}

/// Cells of the winning line on the viewed board, empty when nobody has won.
pub fn winning_cells(state: &GameState) -> Vec<Position> {
    state
        .evaluation()
        .line()
        .map(|line| line.to_vec())
        .unwrap_or_default()
}
