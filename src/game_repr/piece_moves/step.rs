use crate::game_repr::board::BoardQuery;
use crate::game_repr::cell::{Cell, Direction};
use crate::game_repr::piece::Piece;

/// Quiet move one step along `direction`, if that cell is empty.
pub fn single_step<'b, B, F>(board: &'b B, direction: Direction, current: Cell, on_found: &mut F)
where
    B: BoardQuery + ?Sized,
    F: FnMut(Cell, Option<&'b Piece>),
{
    let to = current + direction;
    if to.is_inside_board() && board.is_empty(to) {
        on_found(to, None);
    }
}

/// Quiet moves one and two steps along `direction`.
///
/// The second cell is only reachable through an empty first cell.
pub fn double_step<'b, B, F>(board: &'b B, direction: Direction, current: Cell, on_found: &mut F)
where
    B: BoardQuery + ?Sized,
    F: FnMut(Cell, Option<&'b Piece>),
{
    let one_step = current + direction;
    let two_step = current + direction * 2;

    if one_step.is_inside_board() && board.is_empty(one_step) {
        on_found(one_step, None);

        if two_step.is_inside_board() && board.is_empty(two_step) {
            on_found(two_step, None);
        }
    }
}
