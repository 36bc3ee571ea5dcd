mod board;
mod cell;
pub mod directions;
mod moves;
mod piece;
mod piece_moves;
mod setup;

#[cfg(test)]
mod tests;

pub use board::*;
pub use cell::*;
pub use moves::*;
pub use piece::*;
pub use piece_moves::*;
pub use setup::*;
