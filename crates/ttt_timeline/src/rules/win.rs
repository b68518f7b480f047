//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win when held by one player.
pub type Line = [Position; 3];

/// The eight winning lines in checking order.
///
/// Rows top to bottom, then columns left to right, then the main diagonal
/// and the anti-diagonal. When a board holds more than one full line the
/// first match in this order is the one reported.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evaluation {
    /// No line is fully held by one player.
    NoWinner,
    /// `player` holds every cell of `line`.
    Winner {
        /// The winning player.
        player: Player,
        /// The first full line in checking order.
        line: Line,
    },
}

impl Evaluation {
    /// True for [`Evaluation::Winner`].
    pub fn is_winner(&self) -> bool {
        matches!(self, Evaluation::Winner { .. })
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Evaluation::Winner { player, .. } => Some(*player),
            Evaluation::NoWinner => None,
        }
    }

    /// The winning line, if any.
    pub fn line(&self) -> Option<Line> {
        match self {
            Evaluation::Winner { line, .. } => Some(*line),
            Evaluation::NoWinner => None,
        }
    }
}

/// Evaluates a board against the eight lines.
#[instrument]
pub fn evaluate(board: &Board) -> Evaluation {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Evaluation::Winner { player, line };
        }
    }

    Evaluation::NoWinner
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(board: Board, cells: &[usize], player: Player) -> Board {
        cells.iter().fold(board, |b, &i| {
            b.with_mark(Position::from_index(i).unwrap(), player)
        })
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), Evaluation::NoWinner);
    }

    #[test]
    fn test_winner_top_row() {
        let board = mark(Board::new(), &[0, 1, 2], Player::X);
        assert_eq!(
            evaluate(&board),
            Evaluation::Winner {
                player: Player::X,
                line: LINES[0],
            }
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = mark(Board::new(), &[2, 4, 6], Player::O);
        assert_eq!(evaluate(&board).winner(), Some(Player::O));
        assert_eq!(evaluate(&board).line(), Some(LINES[7]));
    }

    #[test]
    fn test_row_reported_before_column() {
        // Top row and left column both full of X.
        let board = mark(Board::new(), &[0, 1, 2, 3, 6], Player::X);
        assert_eq!(evaluate(&board).line(), Some(LINES[0]));
    }

    #[test]
    fn test_column_reported_before_diagonal() {
        // Middle column and both diagonals through the center.
        let board = mark(Board::new(), &[1, 4, 7, 0, 8], Player::O);
        assert_eq!(evaluate(&board).line(), Some(LINES[4]));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = mark(Board::new(), &[0, 1], Player::X);
        let board = mark(board, &[2], Player::O);
        assert_eq!(evaluate(&board).winner(), None);
    }
}
