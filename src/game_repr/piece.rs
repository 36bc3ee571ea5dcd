use super::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Type {
    /// Sliding pieces move any number of cells along a line until blocked.
    pub fn is_sliding(&self) -> bool {
        matches!(self, Type::Rook | Type::Bishop | Type::Queen)
    }

    pub fn to_char(&self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

/// Which way "forward" points for a team. Only pawns care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoardSide {
    #[default]
    None = 0,
    Up = 1,
    Down = -1,
}

impl BoardSide {
    pub fn sign(&self) -> i32 {
        *self as i32
    }

    pub fn opposite(&self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// Defining characteristics of a piece, independent of where it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceData {
    pub piece_type: Type,
    pub color: Color,
    pub side: BoardSide,
}

impl PieceData {
    pub fn new(piece_type: Type, color: Color, side: BoardSide) -> Self {
        Self { piece_type, color, side }
    }

    /// Decode a placement letter: upper case is white, lower case is black.
    /// The side is left as [`BoardSide::None`] for the caller to fill in.
    pub fn from_char(c: char) -> Option<Self> {
        let piece_type = match c.to_ascii_lowercase() {
            'p' => Type::Pawn,
            'n' => Type::Knight,
            'b' => Type::Bishop,
            'r' => Type::Rook,
            'q' => Type::Queen,
            'k' => Type::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Self::new(piece_type, color, BoardSide::None))
    }

    pub fn to_char(&self) -> char {
        match self.color {
            Color::White => self.piece_type.to_char(),
            Color::Black => self.piece_type.to_char().to_ascii_lowercase(),
        }
    }
}

/// Handle of a piece registered on a [`Board`](super::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A piece owned by the board.
///
/// `position` and `active` are only written by the board, which keeps them in
/// agreement with its grid: a piece is active exactly while the grid records it at
/// `position`. Once captured it keeps its last position but is no longer active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    data: PieceData,
    position: Cell,
    active: bool,
    has_moved: bool,
}

impl Piece {
    pub(crate) fn new(id: PieceId, data: PieceData, position: Cell) -> Self {
        Self {
            id,
            data,
            position,
            active: true,
            has_moved: false,
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn data(&self) -> PieceData {
        self.data
    }

    pub fn piece_type(&self) -> Type {
        self.data.piece_type
    }

    pub fn color(&self) -> Color {
        self.data.color
    }

    pub fn side(&self) -> BoardSide {
        self.data.side
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the first move of this piece has been committed.
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub fn is(&self, color: Color) -> bool {
        self.data.color == color
    }

    pub(crate) fn set_position(&mut self, position: Cell) {
        self.position = position;
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Returns `true` only for the call that performs the NotMoved -> Moved transition.
    pub(crate) fn mark_moved(&mut self) -> bool {
        !std::mem::replace(&mut self.has_moved, true)
    }
}
