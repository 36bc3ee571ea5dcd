//! Move rules: one variant per movement pattern.
//!
//! A rule never touches the board's mutation side. It only asks the [`BoardQuery`]
//! questions and reports each destination to a callback, in the order of the
//! direction tables.

pub mod diagonal_capture;
pub mod jump;
pub mod multi_step;
pub mod pawn;
pub mod step;

pub use pawn::PawnMove;

use smallvec::SmallVec;

use super::board::BoardQuery;
use super::cell::{Cell, Direction};
use super::directions::{DIAGONALS, EIGHT_DIRECTIONS, KING_MOVES, KNIGHT_MOVES, ORTHOGONALS};
use super::moves::LegalMove;
use super::piece::{BoardSide, Color, Piece, Type};

/// Buffer type for collected moves. A queen in the open has 27, the most of any piece.
pub type MoveList = SmallVec<[LegalMove; 32]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRule {
    /// One step onto an empty cell.
    SingleStep(Direction),
    /// One or two steps onto empty cells.
    DoubleStep(Direction),
    /// Captures only, one step along either direction.
    DiagonalCapture([Direction; 2]),
    /// Slide along each direction until blocked.
    MultiStep(&'static [Direction]),
    /// Fixed offsets that ignore what lies between.
    Jump(&'static [Direction]),
    Pawn(PawnMove),
}

impl MoveRule {
    pub fn rook() -> Self {
        MoveRule::MultiStep(&ORTHOGONALS)
    }

    pub fn bishop() -> Self {
        MoveRule::MultiStep(&DIAGONALS)
    }

    pub fn queen() -> Self {
        MoveRule::MultiStep(&EIGHT_DIRECTIONS)
    }

    pub fn knight() -> Self {
        MoveRule::Jump(&KNIGHT_MOVES)
    }

    pub fn king() -> Self {
        MoveRule::Jump(&KING_MOVES)
    }

    pub fn pawn(side: BoardSide, has_moved: bool) -> Self {
        MoveRule::Pawn(PawnMove::new(side, has_moved))
    }

    /// The rule governing `piece` right now. For pawns this depends on whether its
    /// first move has been committed.
    pub fn for_piece(piece: &Piece) -> Self {
        match piece.piece_type() {
            Type::Pawn => Self::pawn(piece.side(), piece.has_moved()),
            Type::Knight => Self::knight(),
            Type::Bishop => Self::bishop(),
            Type::Rook => Self::rook(),
            Type::Queen => Self::queen(),
            Type::King => Self::king(),
        }
    }

    /// Report every destination reachable from `current` by a piece of `color`.
    ///
    /// `on_found` receives the destination and, for captures, the opponent standing
    /// there. The rule assumes `current` really holds the moving piece; it does not
    /// check.
    pub fn calculate_legal_moves<'b, B, F>(&self, board: &'b B, color: Color, current: Cell, mut on_found: F)
    where
        B: BoardQuery + ?Sized,
        F: FnMut(Cell, Option<&'b Piece>),
    {
        match *self {
            MoveRule::SingleStep(direction) => step::single_step(board, direction, current, &mut on_found),
            MoveRule::DoubleStep(direction) => step::double_step(board, direction, current, &mut on_found),
            MoveRule::DiagonalCapture(directions) => {
                diagonal_capture::diagonal_captures(board, &directions, color, current, &mut on_found)
            }
            MoveRule::MultiStep(directions) => {
                multi_step::sliding_moves(board, directions, color, current, &mut on_found)
            }
            MoveRule::Jump(offsets) => jump::jump_moves(board, offsets, color, current, &mut on_found),
            MoveRule::Pawn(pawn) => pawn.calculate_legal_moves(board, color, current, &mut on_found),
        }
    }

    /// Collect the destinations into a buffer instead of streaming them.
    pub fn legal_moves<B>(&self, board: &B, color: Color, current: Cell) -> MoveList
    where
        B: BoardQuery + ?Sized,
    {
        let mut moves = MoveList::new();
        self.calculate_legal_moves(board, color, current, |to, captured| {
            moves.push(LegalMove {
                to,
                captured: captured.map(Piece::id),
            });
        });
        moves
    }
}
