use thiserror::Error;

use super::cell::{Cell, BOARD_SIZE};
use super::piece::{BoardSide, Color, PieceData};

pub const STANDARD_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("unknown piece character '{0}'")]
    InvalidPiece(char),
    #[error("expected {expected} ranks, found {found}")]
    RankCount { expected: usize, found: usize },
    #[error("rank {rank} describes {width} cells instead of 8")]
    RankWidth { rank: usize, width: i32 },
    #[error("white must face up or down for pawns to move")]
    NoForwardSide,
}

/// The two starting sets consumed by [`Board::new`](super::Board::new).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Setup {
    pub white: Vec<(PieceData, Cell)>,
    pub black: Vec<(PieceData, Cell)>,
}

impl Setup {
    /// Standard chess layout with white at the bottom facing up.
    pub fn standard() -> Self {
        // The standard placement is a known-good constant.
        Self::from_placement(STANDARD_PLACEMENT, BoardSide::Up).unwrap_or_default()
    }

    /// Parse a piece-placement string (ranks from the top, `/` separated, digits for
    /// runs of empty cells) as seen from white's seat.
    ///
    /// # Arguments
    ///
    /// * `placement` - e.g. `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`
    /// * `white_side` - the way white's pawns advance. With [`BoardSide::Down`] white sits
    ///   at the top, so the ranks are mirrored onto the grid.
    pub fn from_placement(placement: &str, white_side: BoardSide) -> Result<Self, SetupError> {
        if white_side == BoardSide::None {
            return Err(SetupError::NoForwardSide);
        }

        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != BOARD_SIZE as usize {
            return Err(SetupError::RankCount {
                expected: BOARD_SIZE as usize,
                found: ranks.len(),
            });
        }

        let mut setup = Setup::default();
        for (i, rank) in ranks.iter().enumerate() {
            let row = BOARD_SIZE - 1 - i as i32;
            let mut col = 0;
            for c in rank.chars() {
                if let Some(run) = c.to_digit(10) {
                    col += run as i32;
                    continue;
                }

                let mut data = PieceData::from_char(c).ok_or(SetupError::InvalidPiece(c))?;
                let mut cell = Cell::new(col, row);
                data.side = match data.color {
                    Color::White => white_side,
                    Color::Black => white_side.opposite(),
                };
                if white_side == BoardSide::Down {
                    cell = cell.flipped();
                }
                match data.color {
                    Color::White => setup.white.push((data, cell)),
                    Color::Black => setup.black.push((data, cell)),
                }
                col += 1;
            }

            if col != BOARD_SIZE {
                return Err(SetupError::RankWidth { rank: i + 1, width: col });
            }
        }

        Ok(setup)
    }

    pub fn len(&self) -> usize {
        self.white.len() + self.black.len()
    }

    pub fn is_empty(&self) -> bool {
        self.white.is_empty() && self.black.is_empty()
    }
}
