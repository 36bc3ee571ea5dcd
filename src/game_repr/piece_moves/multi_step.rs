use crate::game_repr::board::BoardQuery;
use crate::game_repr::cell::{Cell, Direction};
use crate::game_repr::piece::{Color, Piece};

/// Walk each direction until the edge or the first piece.
///
/// Empty cells are quiet moves and the walk continues; an opponent is a capture and
/// ends the walk; an ally ends it without a move. Each direction is exhausted before
/// the next one starts.
pub fn sliding_moves<'b, B, F>(
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
        if direction.is_zero() {
            continue;
        }

        let mut to = current + direction;
        while to.is_inside_board() {
            if board.is_empty(to) {
                on_found(to, None);
                to = to + direction;
            } else {
                if let Some(opponent) = board.try_get_opponent(to, color) {
                    on_found(to, Some(opponent));
                }
                break;
            }
        }
    }
}
