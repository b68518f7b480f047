//! Tic-tac-toe with move history and time travel.
//!
//! The crate owns the game state and nothing else: frontends read a
//! [`GameState`] and forward user events to a [`GameEngine`].
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`], [`Location`]
//! - **Rules**: pure board evaluation ([`evaluate`], [`is_draw`])
//! - **History**: immutable [`Move`] snapshots in a branching [`History`]
//! - **State**: [`GameState`] values with value-returning transitions
//! - **Engine**: [`GameEngine`], the single writer of the current state
//! - **Contracts/Invariants**: pre/postconditions checked on every transition
//! - **View**: derived status text, ordered move list, winning cells
//!
//! # Example
//!
//! ```
//! use ttt_timeline::{GameEngine, PlayOutcome, view};
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 1, 3, 4, 6] {
//!     assert_eq!(engine.play(cell), PlayOutcome::Played);
//! }
//! assert_eq!(view::status_line(engine.state()).to_string(), "Winner: X");
//!
//! // Rewind and branch a new timeline from move 1.
//! engine.jump_to(1).unwrap();
//! engine.play(5);
//! assert_eq!(engine.state().history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod history;
mod position;
mod state;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;
pub mod view;

pub use engine::{GameEngine, PlayOutcome};
pub use error::{EngineError, Rejection};
pub use history::{History, Move};
pub use position::{Location, Position, location_of};
pub use rules::{Evaluation, LINES, Line, evaluate, is_draw, is_full};
pub use state::{GameState, GameStatus};
pub use types::{Board, Player, Square};
pub use view::{HistoryEntry, StatusLine};
