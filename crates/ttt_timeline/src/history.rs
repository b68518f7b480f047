//! Move snapshots and the history timeline.

use super::error::EngineError;
use super::position::{Location, Position};
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A historical snapshot: the board after a move and where that move was played.
///
/// Moves are never edited once recorded. The first entry of every history is
/// the empty board with the default location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Board after the move.
    pub squares: Board,
    /// Row and column of the cell just played.
    pub location: Location,
}

impl Move {
    /// The empty starting snapshot.
    pub fn start() -> Self {
        Self {
            squares: Board::new(),
            location: Location::default(),
        }
    }

    /// Snapshot following `self` with `player`'s mark at `pos`.
    pub fn then(&self, pos: Position, player: Player) -> Self {
        Self {
            squares: self.squares.with_mark(pos, player),
            location: pos.location(),
        }
    }

    /// Board after this move.
    pub fn squares(&self) -> &Board {
        &self.squares
    }

    /// Location of this move.
    pub fn location(&self) -> Location {
        self.location
    }
}

/// Ordered sequence of moves, oldest first.
///
/// Always holds at least the starting snapshot. Deserializing a history
/// whose first entry is not [`Move::start`] fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedHistory")]
pub struct History {
    moves: Vec<Move>,
}

/// Wire form of [`History`] before the root snapshot is checked.
#[derive(Deserialize)]
struct UncheckedHistory {
    moves: Vec<Move>,
}

impl TryFrom<UncheckedHistory> for History {
    type Error = EngineError;

    fn try_from(raw: UncheckedHistory) -> Result<Self, Self::Error> {
        match raw.moves.first() {
            Some(root) if *root == Move::start() => Ok(Self { moves: raw.moves }),
            _ => Err(EngineError::InvariantViolation {
                description: "History starts with the empty board".to_string(),
            }),
        }
    }
}

impl History {
    /// A history containing only the starting snapshot.
    pub fn new() -> Self {
        Self {
            moves: vec![Move::start()],
        }
    }

    /// Number of snapshots, including the start.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always false: the start snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Move> {
        self.moves.get(step)
    }

    /// Most recent snapshot.
    pub fn latest(&self) -> &Move {
        // The start snapshot is never removed, so there is always a last entry.
        &self.moves[self.moves.len() - 1]
    }

    /// All snapshots, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Iterates snapshots, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// New history keeping steps `0..=step` and appending `next`.
    ///
    /// Steps after `step` belonged to a timeline the viewer rewound away
    /// from; they are dropped.
    #[instrument(skip(self, next), fields(len = self.moves.len()))]
    pub fn branch(&self, step: usize, next: Move) -> Self {
        let keep = (step + 1).min(self.moves.len());
        let mut moves = Vec::with_capacity(keep + 1);
        moves.extend_from_slice(&self.moves[..keep]);
        moves.push(next);
        Self { moves }
    }

    #[cfg(test)]
    pub(crate) fn from_moves(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_has_empty_start() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest(), &Move::start());
        assert_eq!(history.latest().squares().occupied(), 0);
    }

    #[test]
    fn test_branch_appends_at_end() {
        let history = History::new();
        let next = history.latest().then(Position::Center, Player::X);
        let history = history.branch(0, next);
        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().location(), Location::new(1, 1));
    }

    #[test]
    fn test_branch_discards_future() {
        let mut history = History::new();
        for (step, pos) in [Position::TopLeft, Position::Center, Position::BottomRight]
            .into_iter()
            .enumerate()
        {
            let player = if step % 2 == 0 { Player::X } else { Player::O };
            let next = history.latest().then(pos, player);
            history = history.branch(step, next);
        }
        assert_eq!(history.len(), 4);

        let from = *history.get(1).unwrap();
        let rewritten = history.branch(1, from.then(Position::TopRight, Player::O));
        assert_eq!(rewritten.len(), 3);
        assert_eq!(rewritten.get(1), history.get(1));
        assert_eq!(rewritten.latest().location(), Location::new(0, 2));
        // The original value is untouched.
        assert_eq!(history.len(), 4);
    }

    const EMPTY_ROOT: &str = r#"
[[moves]]
location = { row = 0, col = 0 }
squares = { squares = ["Empty", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty"] }
"#;

    #[test]
    fn test_deserialize_empty_root() {
        let history: History = toml::from_str(EMPTY_ROOT).unwrap();
        assert_eq!(history, History::new());
    }

    #[test]
    fn test_deserialize_rejects_missing_root() {
        assert!(toml::from_str::<History>("moves = []").is_err());
    }

    #[test]
    fn test_deserialize_rejects_marked_root() {
        let marked = EMPTY_ROOT.replacen(r#"["Empty""#, r#"[{ Occupied = "X" }"#, 1);
        assert!(toml::from_str::<History>(&marked).is_err());
    }
}
