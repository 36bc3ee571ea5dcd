use crate::game_repr::board::BoardQuery;
use crate::game_repr::cell::{Cell, Direction};
use crate::game_repr::piece::{Color, Piece};

/// Capture one step along each direction. Never reports a quiet move.
pub fn diagonal_captures<'b, B, F>(
    board: &'b B,
    directions: &[Direction],
    color: Color,
    current: Cell,
    on_found: &mut F,
) where
    B: BoardQuery + ?Sized,
    F: FnMut(Cell, Option<&'b Piece>),
{
    for &direction in directions {
        let to = current + direction;
        if !to.is_inside_board() {
            continue;
        }
        if let Some(opponent) = board.try_get_opponent(to, color) {
            on_found(to, Some(opponent));
        }
    }
}
