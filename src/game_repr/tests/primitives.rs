use crate::game_repr::directions::{DOWN, UP, UP_LEFT, UP_RIGHT};
use crate::game_repr::{Cell, Color, MoveRule, Type};
use super::{collect, empty_board, place};

// ==================== BUILDING BLOCK TESTS ====================

#[test]
fn test_single_step_never_captures() {
    let mut board = empty_board();
    place(&mut board, Type::Pawn, Color::White, Cell::new(2, 2));

    let rule = MoveRule::SingleStep(UP);
    assert_eq!(collect(rule, &board, Color::White, Cell::new(2, 2)), vec![(Cell::new(2, 3), None)]);

    place(&mut board, Type::Pawn, Color::Black, Cell::new(2, 3));
    assert!(collect(rule, &board, Color::White, Cell::new(2, 2)).is_empty());
}

#[test]
fn test_single_step_off_board() {
    let board = empty_board();
    assert!(collect(MoveRule::SingleStep(DOWN), &board, Color::White, Cell::new(5, 0)).is_empty());
}

#[test]
fn test_double_step_near_edge() {
    let board = empty_board();
    let found = collect(MoveRule::DoubleStep(UP), &board, Color::White, Cell::new(0, 6));
    assert_eq!(found, vec![(Cell::new(0, 7), None)]);
}

#[test]
fn test_diagonal_capture_needs_opponent() {
    let mut board = empty_board();
    place(&mut board, Type::Pawn, Color::White, Cell::new(0, 3));
    let victim = place(&mut board, Type::Pawn, Color::Black, Cell::new(1, 4));

    let rule = MoveRule::DiagonalCapture([UP_LEFT, UP_RIGHT]);
    assert_eq!(collect(rule, &board, Color::White, Cell::new(0, 3)), vec![(Cell::new(1, 4), Some(victim))]);
    assert!(collect(rule, &board, Color::Black, Cell::new(0, 3)).is_empty());
}

#[test]
fn test_legal_moves_buffer_matches_callback() {
    let mut board = empty_board();
    place(&mut board, Type::Queen, Color::White, Cell::new(3, 3));
    let victim = place(&mut board, Type::Rook, Color::Black, Cell::new(3, 6));

    let streamed = collect(MoveRule::queen(), &board, Color::White, Cell::new(3, 3));
    let buffered = MoveRule::queen().legal_moves(&board, Color::White, Cell::new(3, 3));

    assert_eq!(streamed.len(), buffered.len());
    for ((to, captured), mv) in streamed.iter().zip(buffered.iter()) {
        assert_eq!(*to, mv.to);
        assert_eq!(*captured, mv.captured);
    }
    assert!(buffered.iter().any(|mv| mv.to == Cell::new(3, 6) && mv.captured == Some(victim)));
    assert!(!buffered.spilled());
}
