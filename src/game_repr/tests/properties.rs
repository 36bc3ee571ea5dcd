use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_repr::{Board, BoardQuery, BoardSide, Cell, Color, MoveRule, PieceData, Type};

// ==================== RANDOMIZED PROPERTY TESTS ====================

const TYPES: [Type; 6] = [Type::Pawn, Type::Knight, Type::Bishop, Type::Rook, Type::Queen, Type::King];

fn random_board(rng: &mut StdRng) -> Board {
    let mut board = Board::empty();
    let count = rng.gen_range(1..=24);
    for _ in 0..count {
        let color = if rng.gen_bool(0.5) { Color::White } else { Color::Black };
        let side = match color {
            Color::White => BoardSide::Up,
            Color::Black => BoardSide::Down,
        };
        let piece_type = TYPES[rng.gen_range(0..TYPES.len())];
        let cell = Cell::new(rng.gen_range(0..8), rng.gen_range(0..8));
        // Collisions are rejected by the board, which is fine here.
        board.register(PieceData::new(piece_type, color, side), cell);
    }
    board
}

#[test]
fn test_no_self_capture_and_no_off_board_moves() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let board = random_board(&mut rng);
        for piece in board.active_pieces() {
            let rule = MoveRule::for_piece(piece);
            rule.calculate_legal_moves(&board, piece.color(), piece.position(), |to, captured| {
                assert!(to.is_inside_board(), "{:?} reported {}", piece, to);
                assert!(!board.has_ally(to, piece.color()), "{:?} may not land on an ally at {}", piece, to);
                match captured {
                    Some(victim) => {
                        assert_eq!(victim.position(), to);
                        assert!(!victim.is(piece.color()));
                    }
                    None => assert!(board.is_empty(to)),
                }
            });
        }
    }
}

#[test]
fn test_queries_off_board_are_negative() {
    let mut rng = StdRng::seed_from_u64(42);
    let board = random_board(&mut rng);

    for _ in 0..500 {
        let col = rng.gen_range(-50..50);
        let row = rng.gen_range(-50..50);
        let cell = Cell::new(col, row);
        if cell.is_inside_board() {
            continue;
        }
        assert!(!board.is_empty(cell));
        assert!(!board.has_ally(cell, Color::White));
        assert!(board.try_get_opponent(cell, Color::Black).is_none());
        assert!(board.try_get_occupant(cell).is_none());
    }
}

#[test]
fn test_sliding_moves_stop_at_first_piece() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let board = random_board(&mut rng);
        for piece in board.active_pieces().filter(|p| p.piece_type().is_sliding()) {
            let from = piece.position();
            rule_cells(&board, piece.color(), from, MoveRule::for_piece(piece))
                .into_iter()
                .for_each(|to| {
                    let step = crate::game_repr::Direction::new((to.col - from.col).signum(), (to.row - from.row).signum());
                    let mut between = from + step;
                    while between != to {
                        assert!(board.is_empty(between), "slide from {} to {} passes {}", from, to, between);
                        between = between + step;
                    }
                });
        }
    }
}

fn rule_cells(board: &Board, color: Color, from: Cell, rule: MoveRule) -> Vec<Cell> {
    rule.legal_moves(board, color, from).iter().map(|mv| mv.to).collect()
}
