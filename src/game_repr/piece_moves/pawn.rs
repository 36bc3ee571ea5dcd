use crate::game_repr::board::BoardQuery;
use crate::game_repr::cell::{Cell, Direction};
use crate::game_repr::directions::{UP, UP_LEFT, UP_RIGHT};
use crate::game_repr::piece::{BoardSide, Color, Piece};

use super::{diagonal_capture, step};

/// Pawn: a forward mover plus diagonal captures, oriented by the team's side.
///
/// The forward mover is a double step until the pawn has moved and a single step
/// afterwards. `has_moved` comes from the piece; this value is rebuilt per query
/// and holds no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PawnMove {
    side: BoardSide,
    has_moved: bool,
}

impl PawnMove {
    pub fn new(side: BoardSide, has_moved: bool) -> Self {
        Self { side, has_moved }
    }

    pub fn side(&self) -> BoardSide {
        self.side
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub fn forward(&self) -> Direction {
        UP * self.side.sign()
    }

    /// Forward-left and forward-right, relative to the side.
    pub fn capture_directions(&self) -> [Direction; 2] {
        [UP_LEFT * self.side.sign(), UP_RIGHT * self.side.sign()]
    }

    pub fn calculate_legal_moves<'b, B, F>(&self, board: &'b B, color: Color, current: Cell, on_found: &mut F)
    where
        B: BoardQuery + ?Sized,
        F: FnMut(Cell, Option<&'b Piece>),
    {
        // Without a side there is no forward.
        if self.side == BoardSide::None {
            return;
        }

        if self.has_moved {
            step::single_step(board, self.forward(), current, on_found);
        } else {
            step::double_step(board, self.forward(), current, on_found);
        }
        diagonal_capture::diagonal_captures(board, &self.capture_directions(), color, current, on_found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::directions::{DOWN, DOWN_LEFT, DOWN_RIGHT};

    #[test]
    fn test_orientation_follows_side() {
        let up = PawnMove::new(BoardSide::Up, false);
        assert_eq!(up.forward(), UP);
        assert_eq!(up.capture_directions(), [UP_LEFT, UP_RIGHT]);

        let down = PawnMove::new(BoardSide::Down, false);
        assert_eq!(down.forward(), DOWN);
        assert_eq!(down.capture_directions(), [DOWN_RIGHT, DOWN_LEFT]);
    }
}
