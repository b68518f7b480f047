//! Application state and logic.

use crate::input::{Action, Focus, move_cursor};
use tracing::{debug, info, instrument, warn};
use ttt_timeline::view::{self, HistoryEntry};
use ttt_timeline::{GameEngine, PlayOutcome, Position};

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    focus: Focus,
    /// Row of the move list under the selection, in display order.
    selected: usize,
    status_message: String,
}

impl App {
    /// Creates a new application.
    pub fn new(order_ascending: bool) -> Self {
        let mut engine = GameEngine::new();
        if !order_ascending {
            engine.toggle_order();
        }
        let mut app = Self {
            engine,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            status_message: String::new(),
        };
        app.select_current();
        app
    }

    /// Gets the game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected move-list row, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feedback from the last action.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Move list in display order.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        view::history_entries(self.engine.state())
    }

    /// Applies an action. Returns false when the app should exit.
    #[instrument(skip(self), fields(step = self.engine.state().step_number()))]
    pub fn handle(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => {
                info!("User quit");
                return false;
            }
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::PlayCursor => self.play(self.cursor.to_index()),
            Action::PlayCell(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.play(index);
            }
            Action::SelectPrev => {
                self.selected = self.selected.saturating_sub(1);
            }
            Action::SelectNext => {
                let last = self.entries().len().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
            }
            Action::JumpToSelected => self.jump_to_selected(),
            Action::ToggleFocus => {
                self.focus = self.focus.toggle();
            }
            Action::ToggleOrder => {
                self.engine.toggle_order();
                self.select_current();
            }
            Action::Restart => {
                debug!("Restarting game");
                self.engine.restart();
                self.status_message = "New game".to_string();
                self.select_current();
            }
        }
        true
    }

    fn play(&mut self, index: usize) {
        let player = self.engine.state().next_player();
        match self.engine.play(index) {
            PlayOutcome::Played => {
                let label = Position::from_index(index).map(|p| p.label()).unwrap_or("?");
                self.status_message = format!("{} played {}", player, label);
                self.select_current();
            }
            PlayOutcome::Ignored(rejection) => {
                self.status_message = rejection.to_string();
            }
        }
    }

    fn jump_to_selected(&mut self) {
        let Some(entry) = self.entries().into_iter().nth(self.selected) else {
            return;
        };
        match self.engine.jump_to(entry.step) {
            Ok(()) => {
                self.status_message = entry.description;
            }
            Err(e) => {
                warn!(error = %e, "Jump failed");
                self.status_message = e.to_string();
            }
        }
    }

    /// Points the selection at the viewed step.
    fn select_current(&mut self) {
        self.selected = self
            .entries()
            .iter()
            .position(|entry| entry.is_current)
            .unwrap_or(0);
    }
}
