//! Game configuration.
//!
//! A [`GameConfig`] says which pieces start where and which way white advances. It is
//! turned into the two starting sets by [`GameConfig::setup`].

use crate::game_repr::{BoardSide, Setup, SetupError, STANDARD_PLACEMENT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Piece placement as seen from white's seat, top rank first
    pub placement: String,
    /// Forward direction of white's pawns; black faces the opposite way
    pub white_side: BoardSide,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl GameConfig {
    /// Standard layout, white at the bottom.
    pub fn standard() -> Self {
        Self {
            placement: STANDARD_PLACEMENT.to_string(),
            white_side: BoardSide::Up,
        }
    }

    /// Standard layout, white at the top.
    pub fn flipped() -> Self {
        Self {
            white_side: BoardSide::Down,
            ..Self::standard()
        }
    }

    pub fn with_placement(mut self, placement: impl Into<String>) -> Self {
        self.placement = placement.into();
        self
    }

    pub fn black_side(&self) -> BoardSide {
        self.white_side.opposite()
    }

    pub fn setup(&self) -> Result<Setup, SetupError> {
        Setup::from_placement(&self.placement, self.white_side)
    }
}
