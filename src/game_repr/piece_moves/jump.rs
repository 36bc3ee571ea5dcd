use crate::game_repr::board::BoardQuery;
use crate::game_repr::cell::{Cell, Direction};
use crate::game_repr::piece::{Color, Piece};

/// Knight and king moves: each offset is tried once, whatever lies in between.
pub fn jump_moves<'b, B, F>(
    board: &'b B,
    offsets: &[Direction],
    color: Color,
    current: Cell,
    on_found: &mut F,
) where
    B: BoardQuery + ?Sized,
    F: FnMut(Cell, Option<&'b Piece>),
{
    for &offset in offsets {
        let to = current + offset;
        if to.is_inside_board() && !board.has_ally(to, color) {
            on_found(to, board.try_get_opponent(to, color));
        }
    }
}
