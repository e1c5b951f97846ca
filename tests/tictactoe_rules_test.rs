//! Tests for the rules engine.

use timetravel_tictactoe::rules::LINES;
use timetravel_tictactoe::{Board, Evaluation, Player, Position, evaluate};

fn board_from(marks: &str) -> Board {
    // Nine characters, row-major: 'X', 'O', or '.'
    marks
        .chars()
        .zip(Position::ALL)
        .fold(Board::new(), |board, (c, pos)| match c {
            'X' => board.with_mark(pos, Player::X),
            'O' => board.with_mark(pos, Player::O),
            _ => board,
        })
}

#[test]
fn test_lines_scan_order() {
    let indices: Vec<[usize; 3]> = LINES
        .into_iter()
        .map(|line| line.map(Position::to_index))
        .collect();
    assert_eq!(
        indices,
        vec![
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ]
    );
}

#[test]
fn test_column_win() {
    let evaluation = evaluate(&board_from(".O.XOX.O."));
    assert_eq!(
        evaluation,
        Evaluation::Winner {
            player: Player::O,
            line: [Position::TopCenter, Position::Center, Position::BottomCenter],
        }
    );
}

#[test]
fn test_anti_diagonal_win() {
    let evaluation = evaluate(&board_from("OOX.X.X.."));
    assert_eq!(evaluation.winner(), Some(Player::X));
    assert_eq!(
        evaluation.line(),
        &[Position::TopRight, Position::Center, Position::BottomLeft]
    );
}

#[test]
fn test_full_board_without_line() {
    let evaluation = evaluate(&board_from("XOXXOOOXX"));
    assert_eq!(evaluation, Evaluation::NoWinner);
    assert!(evaluation.line().is_empty());
}

#[test]
fn test_evaluate_is_pure() {
    let board = board_from("XXX.OO...");
    let first = evaluate(&board);
    for _ in 0..10 {
        assert_eq!(evaluate(&board), first);
    }
    assert_eq!(board, board_from("XXX.OO..."));
}
