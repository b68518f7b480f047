//! Key bindings and cursor movement.

use crossterm::event::KeyCode;
use ttt_timeline::Position;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move the move-list selection.
    History,
}

impl Focus {
    /// The other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Cursor direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// User intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor.
    MoveCursor(Direction),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a cell directly by index.
    PlayCell(usize),
    /// Select the previous move-list row.
    SelectPrev,
    /// Select the next move-list row.
    SelectNext,
    /// Jump to the selected move-list row.
    JumpToSelected,
    /// Switch between board and move list.
    ToggleFocus,
    /// Flip the move list order.
    ToggleOrder,
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action given the focused panel.
pub fn action_for(key: KeyCode, focus: Focus) -> Option<Action> {
    match (key, focus) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => Some(Action::Quit),
        (KeyCode::Tab, _) => Some(Action::ToggleFocus),
        (KeyCode::Char('s'), _) => Some(Action::ToggleOrder),
        (KeyCode::Char('r'), _) => Some(Action::Restart),
        (KeyCode::Char(c @ '1'..='9'), _) => c
            .to_digit(10)
            .map(|digit| Action::PlayCell(digit as usize - 1)),

        (KeyCode::Up, Focus::Board) => Some(Action::MoveCursor(Direction::Up)),
        (KeyCode::Down, Focus::Board) => Some(Action::MoveCursor(Direction::Down)),
        (KeyCode::Left, Focus::Board) => Some(Action::MoveCursor(Direction::Left)),
        (KeyCode::Right, Focus::Board) => Some(Action::MoveCursor(Direction::Right)),
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => Some(Action::PlayCursor),

        (KeyCode::Up, Focus::History) => Some(Action::SelectPrev),
        (KeyCode::Down, Focus::History) => Some(Action::SelectNext),
        (KeyCode::Enter | KeyCode::Char(' '), Focus::History) => Some(Action::JumpToSelected),

        _ => None,
    }
}

/// Moves cursor one cell, stopping at the board edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let location = cursor.location();
    let (row, col) = match direction {
        Direction::Up => (location.row.saturating_sub(1), location.col),
        Direction::Down => ((location.row + 1).min(2), location.col),
        Direction::Left => (location.row, location.col.saturating_sub(1)),
        Direction::Right => (location.row, (location.col + 1).min(2)),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
