//! Tests for the game engine: play, jump_to, toggle_order.

use ttt_timeline::{
    EngineError, GameEngine, GameState, Location, PlayOutcome, Player, Position, Rejection,
    Square, location_of,
};

fn engine_after(cells: &[usize]) -> GameEngine {
    let mut engine = GameEngine::new();
    for &cell in cells {
        assert_eq!(engine.play(cell), PlayOutcome::Played, "cell {}", cell);
    }
    engine
}

#[test]
fn test_initial_state() {
    let engine = GameEngine::new();
    let state = engine.state();
    assert_eq!(state.history().len(), 1);
    assert_eq!(state.current_board().occupied(), 0);
    assert_eq!(state.step_number(), 0);
    assert!(state.x_is_next());
    assert!(state.order_ascending());
}

#[test]
fn test_left_column_win() {
    let engine = engine_after(&[0, 1, 3, 4, 6]);
    let state = engine.state();

    let evaluation = state.evaluation();
    assert_eq!(evaluation.winner(), Some(Player::X));
    assert_eq!(
        evaluation.line(),
        Some([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft])
    );
    assert_eq!(state.history().len(), 6);
}

#[test]
fn test_marks_alternate() {
    let engine = engine_after(&[4, 0, 8]);
    let board = engine.state().current_board();
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::O));
    assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::X));
    assert_eq!(engine.state().next_player(), Player::O);
}

#[test]
fn test_play_on_occupied_cell_is_noop() {
    let mut engine = engine_after(&[4]);
    let before = engine.snapshot();
    assert_eq!(
        engine.play(4),
        PlayOutcome::Ignored(Rejection::SquareOccupied(Position::Center))
    );
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_play_after_win_is_noop() {
    let mut engine = engine_after(&[0, 1, 3, 4, 6]);
    let before = engine.snapshot();
    for cell in [2, 5, 7, 8] {
        assert_eq!(engine.play(cell), PlayOutcome::Ignored(Rejection::GameOver));
    }
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_play_out_of_bounds_is_noop() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.play(9), PlayOutcome::Ignored(Rejection::OutOfBounds(9)));
    assert_eq!(engine.state(), &GameState::new());
}

#[test]
fn test_jump_then_play_truncates_future() {
    let mut engine = engine_after(&[0, 1, 2]);
    assert_eq!(engine.state().step_number(), 3);
    let old_step_one = *engine.state().history().get(1).unwrap();

    engine.jump_to(1).unwrap();
    assert_eq!(engine.state().history().len(), 4);
    assert!(!engine.state().x_is_next());

    assert_eq!(engine.play(5), PlayOutcome::Played);
    let state = engine.state();
    assert_eq!(state.history().len(), 3);
    assert_eq!(state.step_number(), 2);
    assert_eq!(state.history().get(1), Some(&old_step_one));
    assert_eq!(state.history().latest().location(), Location::new(1, 2));
    assert_eq!(
        state.current_board().get(Position::MiddleRight),
        Square::Occupied(Player::O)
    );
    // Cells played on the discarded timeline are free again.
    assert!(state.current_board().is_empty(Position::TopCenter));
    assert!(state.current_board().is_empty(Position::TopRight));
    assert!(state.x_is_next());
}

#[test]
fn test_jump_back_to_a_won_board_allows_play_from_before() {
    let mut engine = engine_after(&[0, 1, 3, 4, 6]);
    engine.jump_to(4).unwrap();
    assert_eq!(engine.play(7), PlayOutcome::Played);
    assert_eq!(engine.state().evaluation().winner(), None);
    assert_eq!(engine.state().history().len(), 6);
}

#[test]
fn test_jump_sets_turn_from_step_parity() {
    let mut engine = engine_after(&[0, 1, 2, 3]);
    for step in 0..engine.state().history().len() {
        engine.jump_to(step).unwrap();
        assert_eq!(engine.state().step_number(), step);
        assert_eq!(engine.state().x_is_next(), step % 2 == 0);
        assert_eq!(engine.state().history().len(), 5);
    }
}

#[test]
fn test_jump_out_of_range_reports_error() {
    let mut engine = engine_after(&[0, 1]);
    let before = engine.snapshot();
    assert_eq!(
        engine.jump_to(3),
        Err(EngineError::StepOutOfRange {
            step: 3,
            history_len: 3,
        })
    );
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_toggle_order_changes_nothing_else() {
    let mut engine = engine_after(&[0, 4, 8]);
    engine.jump_to(2).unwrap();
    let before = engine.snapshot();

    engine.toggle_order();
    let after = engine.state();
    assert!(!after.order_ascending());
    assert_eq!(after.history(), before.history());
    assert_eq!(after.step_number(), before.step_number());
    assert_eq!(after.x_is_next(), before.x_is_next());

    engine.toggle_order();
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_each_step_differs_by_one_cell() {
    let engine = engine_after(&[4, 0, 8, 2, 1, 7, 6]);
    let moves = engine.state().history().moves();
    for pair in moves.windows(2) {
        let changed = pair[0]
            .squares()
            .squares()
            .iter()
            .zip(pair[1].squares().squares())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(changed, 1);
    }
}

#[test]
fn test_location_of() {
    assert_eq!(location_of(4), Location::new(1, 1));
    assert_eq!(location_of(8), Location::new(2, 2));
    assert_eq!(location_of(3), Location::new(1, 0));
}
