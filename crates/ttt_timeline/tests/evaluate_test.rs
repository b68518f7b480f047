//! Exhaustive checks of board evaluation over every 3^9 cell assignment.

use ttt_timeline::{Board, Evaluation, LINES, Player, Square, evaluate, is_draw};

/// Decodes `code` (base 3, cell 0 least significant) into a board.
fn board_from_code(mut code: u32) -> Board {
    let mut squares = [Square::Empty; 9];
    for square in squares.iter_mut() {
        *square = match code % 3 {
            0 => Square::Empty,
            1 => Square::Occupied(Player::X),
            _ => Square::Occupied(Player::O),
        };
        code /= 3;
    }
    Board::from_squares(squares)
}

fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(board_from_code)
}

#[test]
fn test_evaluate_reports_first_full_line_in_order() {
    for board in all_boards() {
        let expected = LINES.iter().find_map(|line| {
            let owner = board.get(line[0]).player()?;
            line.iter()
                .all(|pos| board.get(*pos) == Square::Occupied(owner))
                .then_some(Evaluation::Winner {
                    player: owner,
                    line: *line,
                })
        });
        assert_eq!(
            evaluate(&board),
            expected.unwrap_or(Evaluation::NoWinner),
            "board:\n{}",
            board.display()
        );
    }
}

#[test]
fn test_is_draw_iff_no_winner_and_full() {
    for board in all_boards() {
        let full = board.squares().iter().all(|s| *s != Square::Empty);
        assert_eq!(
            is_draw(&board),
            full && evaluate(&board) == Evaluation::NoWinner,
            "board:\n{}",
            board.display()
        );
    }
}

#[test]
fn test_no_three_in_a_row_means_no_winner() {
    let boards_without_lines = all_boards().filter(|board| {
        LINES.iter().all(|line| {
            let first = board.get(line[0]);
            first == Square::Empty || line.iter().any(|pos| board.get(*pos) != first)
        })
    });
    for board in boards_without_lines {
        assert_eq!(evaluate(&board), Evaluation::NoWinner);
    }
}
