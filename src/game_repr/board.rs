use std::fmt;

use thiserror::Error;

use super::cell::{Cell, BOARD_SIZE};
use super::piece::{Color, Piece, PieceData, PieceId};
use super::setup::Setup;

const SIZE: usize = BOARD_SIZE as usize;

/// Read-only view of the board handed to move rules.
///
/// Every query accepts any [`Cell`]; cells off the board answer `false` / `None`.
pub trait BoardQuery {
    /// True iff the cell is on the board and unoccupied.
    fn is_empty(&self, cell: Cell) -> bool;

    /// True iff the cell is occupied by a piece of `color`.
    fn has_ally(&self, cell: Cell, color: Color) -> bool;

    /// The occupant of `cell` if it belongs to the other team.
    fn try_get_opponent(&self, cell: Cell, color: Color) -> Option<&Piece>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cell {0} is outside the board")]
    OutOfBounds(Cell),
    #[error("no piece on {0}")]
    EmptySource(Cell),
}

/// Occupancy grid plus the pieces it owns.
///
/// Pieces live in an arena indexed by [`PieceId`]; the grid stores ids. Captured pieces
/// stay in the arena (inactive) so callers holding an id can still inspect them.
///
/// # Usage
///
/// ```rust,ignore
/// let mut board = Board::from_setup(&Setup::standard());
///
/// // Read side, as seen by move rules
/// assert!(board.has_ally(Cell::new(0, 0), Color::White));
///
/// // Write side, used by the game loop only
/// let captured = board.try_capture(Cell::new(3, 6), Color::White);
/// board.move_piece(Cell::new(3, 1), Cell::new(3, 3))?;
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    grid: [[Option<PieceId>; SIZE]; SIZE],
    pieces: Vec<Piece>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            grid: [[None; SIZE]; SIZE],
            pieces: Vec::new(),
        }
    }

    /// Build a board from the two teams' starting sets.
    ///
    /// Pieces declared on an invalid or already taken cell are logged and skipped;
    /// the rest of the set is still registered.
    pub fn new<W, B>(white: W, black: B) -> Self
    where
        W: IntoIterator<Item = (PieceData, Cell)>,
        B: IntoIterator<Item = (PieceData, Cell)>,
    {
        let mut board = Self::empty();
        board.register_pieces(white);
        board.register_pieces(black);
        board
    }

    pub fn from_setup(setup: &Setup) -> Self {
        Self::new(setup.white.iter().copied(), setup.black.iter().copied())
    }

    fn register_pieces<I: IntoIterator<Item = (PieceData, Cell)>>(&mut self, pieces: I) {
        for (data, cell) in pieces {
            self.register(data, cell);
        }
    }

    /// Put a new piece on the board.
    ///
    /// # Returns
    ///
    /// The id of the new piece, or `None` if `cell` is off the board or occupied.
    pub fn register(&mut self, data: PieceData, cell: Cell) -> Option<PieceId> {
        let Some((col, row)) = slot(cell) else {
            log::warn!("Rejecting {:?} {:?}: start cell {} is outside the board", data.color, data.piece_type, cell);
            return None;
        };
        if let Some(existing) = self.grid[row][col] {
            log::warn!(
                "Rejecting {:?} {:?}: start cell {} already holds {:?}",
                data.color, data.piece_type, cell, self.pieces[existing.0].data()
            );
            return None;
        }

        let id = PieceId(self.pieces.len());
        self.pieces.push(Piece::new(id, data, cell));
        self.grid[row][col] = Some(id);
        Some(id)
    }

    // ===========================
    // Lookups
    // ===========================

    /// The id recorded on `cell`, if any.
    pub fn get_occupant(&self, cell: Cell) -> Option<PieceId> {
        let (col, row) = slot(cell)?;
        self.grid[row][col]
    }

    /// The piece standing on `cell`, if any.
    pub fn try_get_occupant(&self, cell: Cell) -> Option<&Piece> {
        self.get_occupant(cell).map(|id| &self.pieces[id.0])
    }

    /// Any piece ever registered, captured ones included.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    pub fn active_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| p.is_active())
    }

    // ===========================
    // Mutation (game loop only)
    // ===========================

    /// Overwrite the occupant record of `cell`.
    ///
    /// Placing a piece moves its record: its previous cell is cleared and its position
    /// updated. Whatever else stood on `cell` is taken off the board and deactivated.
    /// Invalid cells and unknown ids are logged and ignored.
    pub fn set(&mut self, cell: Cell, occupant: Option<PieceId>) {
        let Some((col, row)) = slot(cell) else {
            log::warn!("Ignoring set on {}: outside the board", cell);
            return;
        };
        if let Some(id) = occupant {
            if id.0 >= self.pieces.len() {
                log::warn!("Ignoring set on {}: unknown piece {:?}", cell, id);
                return;
            }
        }

        if let Some(old) = self.grid[row][col].filter(|&old| Some(old) != occupant) {
            self.pieces[old.0].set_active(false);
        }

        if let Some(id) = occupant {
            let previous = self.pieces[id.0].position();
            if previous != cell && self.get_occupant(previous) == Some(id) {
                self.clear_slot(previous);
            }
            let piece = &mut self.pieces[id.0];
            piece.set_position(cell);
            piece.set_active(true);
        }
        self.grid[row][col] = occupant;
    }

    /// Capture the opponent of `color` standing on `cell`.
    ///
    /// The piece is deactivated and its cell cleared in one step. Returns `None` and
    /// leaves the board untouched if the cell is empty, off the board, or holds an ally.
    pub fn try_capture(&mut self, cell: Cell, color: Color) -> Option<PieceId> {
        let id = self.try_get_opponent(cell, color)?.id();
        self.pieces[id.0].set_active(false);
        self.clear_slot(cell);
        log::debug!("Captured {:?} on {}", self.pieces[id.0].data(), cell);
        Some(id)
    }

    /// Move the piece on `from` to `to`.
    ///
    /// Any piece already on `to` is removed from play and returned. No rule checking is
    /// done here; that is the caller's job.
    pub fn move_piece(&mut self, from: Cell, to: Cell) -> Result<Option<PieceId>, MoveError> {
        if !from.is_inside_board() {
            return Err(MoveError::OutOfBounds(from));
        }
        if !to.is_inside_board() {
            return Err(MoveError::OutOfBounds(to));
        }
        let id = self.get_occupant(from).ok_or(MoveError::EmptySource(from))?;
        if from == to {
            return Ok(None);
        }

        let displaced = self.get_occupant(to);
        self.set(to, Some(id));
        Ok(displaced)
    }

    /// Record that `id` has made its first move. Only the first call has an effect.
    pub fn mark_moved(&mut self, id: PieceId) {
        if let Some(piece) = self.pieces.get_mut(id.0) {
            if piece.mark_moved() {
                log::debug!("{:?} {:?} on {} has now moved", piece.color(), piece.piece_type(), piece.position());
            }
        }
    }

    fn clear_slot(&mut self, cell: Cell) {
        if let Some((col, row)) = slot(cell) {
            self.grid[row][col] = None;
        }
    }
}

/// The one place a cell is turned into storage indices.
fn slot(cell: Cell) -> Option<(usize, usize)> {
    cell.is_inside_board()
        .then(|| (cell.col as usize, cell.row as usize))
}

impl BoardQuery for Board {
    fn is_empty(&self, cell: Cell) -> bool {
        match slot(cell) {
            Some((col, row)) => self.grid[row][col].is_none(),
            None => false,
        }
    }

    fn has_ally(&self, cell: Cell, color: Color) -> bool {
        self.try_get_occupant(cell).is_some_and(|p| p.is(color))
    }

    fn try_get_opponent(&self, cell: Cell, color: Color) -> Option<&Piece> {
        self.try_get_occupant(cell).filter(|p| !p.is(color))
    }
}

impl fmt::Display for Board {
    /// Top row first, `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            let line: String = (0..BOARD_SIZE)
                .map(|col| match self.try_get_occupant(Cell::new(col, row)) {
                    Some(piece) => piece.data().to_char(),
                    None => '.',
                })
                .collect();
            writeln!(f, "{} {}", row + 1, line)?;
        }
        write!(f, "  abcdefgh")
    }
}
