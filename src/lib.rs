//! Rules core of a two-player grid board game: which piece stands where, and where
//! each piece may go from its cell.

pub mod config;
pub mod game;
pub mod game_repr;
pub mod highlight;
