//! Move execution: the only writer of the [`Board`].
//!
//! `Game` asks the move rules for destinations, turns them into highlights, and commits
//! chosen moves. Turn order is not enforced; any piece may be selected and moved.

use smallvec::SmallVec;
use thiserror::Error;

use crate::config::GameConfig;
use crate::game_repr::{Board, Cell, LegalMove, MoveError, MoveList, MoveRule, PieceId, SetupError};
use crate::highlight::{HighlightChannel, HighlightKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no piece on {0}")]
    NoPiece(Cell),
    #[error("{to} is not reachable from {from}")]
    IllegalMove { from: Cell, to: Cell },
    #[error(transparent)]
    Board(#[from] MoveError),
}

/// What a committed move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub piece: PieceId,
    pub from: Cell,
    pub to: Cell,
    pub captured: Option<PieceId>,
}

/// Result of [`Game::handle_click`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece was selected and its destinations highlighted.
    Selected(Cell),
    /// The click completed a move.
    Moved(MoveOutcome),
    /// The click cleared the selection.
    Deselected,
    /// Nothing was selected and nothing selectable was clicked.
    Ignored,
}

/// The game loop around a board.
///
/// # Usage
///
/// ```rust,ignore
/// let grid = Rc::new(RefCell::new(HighlightGrid::new()));
/// let mut channel = HighlightChannel::new();
/// channel.subscribe(grid.clone());
///
/// let mut game = Game::new(Board::from_setup(&Setup::standard()), channel);
/// game.select(Cell::new(4, 1));             // e2: highlights e3 and e4
/// game.commit_move(Cell::new(4, 1), Cell::new(4, 3))?;
/// ```
#[derive(Debug)]
pub struct Game {
    board: Board,
    channel: HighlightChannel,

    /// Cell whose piece is currently selected
    selected: Option<Cell>,

    /// Legal moves of the selected piece, filled by `select`
    legal_moves_cache: MoveList,

    /// Cells we have highlighted and must clear again
    highlighted: SmallVec<[Cell; 32]>,
}

impl Game {
    pub fn new(board: Board, channel: HighlightChannel) -> Self {
        Self {
            board,
            channel,
            selected: None,
            legal_moves_cache: MoveList::new(),
            highlighted: SmallVec::new(),
        }
    }

    /// Build the board described by `config` and wrap it in a game.
    pub fn from_config(config: &GameConfig, channel: HighlightChannel) -> Result<Self, SetupError> {
        let setup = config.setup()?;
        Ok(Self::new(Board::from_setup(&setup), channel))
    }

    /// Read-only access to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn channel(&self) -> &HighlightChannel {
        &self.channel
    }

    /// Mutable access to the channel, for subscribing and unsubscribing sinks.
    pub fn channel_mut(&mut self) -> &mut HighlightChannel {
        &mut self.channel
    }

    pub fn selected(&self) -> Option<Cell> {
        self.selected
    }

    /// Cached legal moves of the selected piece. Empty when nothing is selected.
    pub fn legal_moves_for_selection(&self) -> &[LegalMove] {
        &self.legal_moves_cache
    }

    /// Every destination of the piece on `cell`.
    ///
    /// # Returns
    ///
    /// The moves in rule order, or an empty list if `cell` is empty or off the board.
    pub fn legal_moves(&self, cell: Cell) -> MoveList {
        match self.board.try_get_occupant(cell) {
            Some(piece) => MoveRule::for_piece(piece).legal_moves(&self.board, piece.color(), cell),
            None => MoveList::new(),
        }
    }

    /// Select the piece on `cell` and highlight it and its destinations.
    ///
    /// Any previous selection is cleared first. Selecting an empty cell just clears.
    ///
    /// # Returns
    ///
    /// The destinations of the selected piece.
    pub fn select(&mut self, cell: Cell) -> &[LegalMove] {
        self.deselect();
        if self.board.try_get_occupant(cell).is_none() {
            return &self.legal_moves_cache;
        }

        self.legal_moves_cache = self.legal_moves(cell);
        self.selected = Some(cell);
        log::trace!("Selected {} with {} destination(s)", cell, self.legal_moves_cache.len());

        self.channel.highlight(cell, HighlightKind::Selected);
        self.highlighted.push(cell);
        for mv in &self.legal_moves_cache {
            let kind = if mv.is_capture() { HighlightKind::Capture } else { HighlightKind::Move };
            self.channel.highlight(mv.to, kind);
            self.highlighted.push(mv.to);
        }

        &self.legal_moves_cache
    }

    /// Clear the selection and every highlight this game published.
    pub fn deselect(&mut self) {
        for cell in self.highlighted.drain(..) {
            self.channel.unhighlight(cell);
        }
        self.selected = None;
        self.legal_moves_cache.clear();
    }

    /// Move the piece on `from` to `to` if its rule allows it.
    ///
    /// An opponent on `to` is captured. The piece is marked as moved, which ends a pawn's
    /// double step for good. The selection and its highlights are cleared.
    ///
    /// # Errors
    ///
    /// * [`GameError::NoPiece`] if `from` is empty or off the board
    /// * [`GameError::IllegalMove`] if `to` is not among the piece's destinations
    pub fn commit_move(&mut self, from: Cell, to: Cell) -> Result<MoveOutcome, GameError> {
        let piece = self.board.try_get_occupant(from).ok_or(GameError::NoPiece(from))?;
        let (id, color) = (piece.id(), piece.color());

        let legal = self
            .legal_moves(from)
            .into_iter()
            .find(|mv| mv.to == to)
            .ok_or(GameError::IllegalMove { from, to })?;

        let captured = match legal.captured {
            Some(_) => self.board.try_capture(to, color),
            None => None,
        };
        self.board.move_piece(from, to)?;
        self.board.mark_moved(id);
        self.deselect();

        log::debug!("Moved {:?} from {} to {} (captured: {:?})", id, from, to, captured);
        Ok(MoveOutcome { piece: id, from, to, captured })
    }

    /// React to a click on `cell`.
    ///
    /// - nothing selected: select the clicked piece, if any
    /// - a destination of the selection: commit that move
    /// - another piece: select it instead
    /// - anything else: deselect
    pub fn handle_click(&mut self, cell: Cell) -> Result<ClickOutcome, GameError> {
        let Some(from) = self.selected else {
            if self.board.try_get_occupant(cell).is_some() {
                self.select(cell);
                return Ok(ClickOutcome::Selected(cell));
            }
            return Ok(ClickOutcome::Ignored);
        };

        if self.legal_moves_cache.iter().any(|mv| mv.to == cell) {
            return self.commit_move(from, cell).map(ClickOutcome::Moved);
        }

        if cell != from && self.board.try_get_occupant(cell).is_some() {
            self.select(cell);
            return Ok(ClickOutcome::Selected(cell));
        }

        self.deselect();
        Ok(ClickOutcome::Deselected)
    }
}
