use super::cell::Cell;
use super::piece::PieceId;

/// A destination reported by a move rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMove {
    pub to: Cell,
    /// The opponent standing on `to`, if the move captures.
    pub captured: Option<PieceId>,
}

impl LegalMove {
    pub fn quiet(to: Cell) -> Self {
        Self { to, captured: None }
    }

    pub fn capture(to: Cell, captured: PieceId) -> Self {
        Self { to, captured: Some(captured) }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}
