//! Offset vectors shared by every move rule.
//!
//! The order of the tables is fixed: move rules report destinations in table order,
//! so changing it changes the order callers observe.

use super::cell::Direction;

pub const UP: Direction = Direction::new(0, 1);
pub const DOWN: Direction = Direction::new(0, -1);
pub const LEFT: Direction = Direction::new(-1, 0);
pub const RIGHT: Direction = Direction::new(1, 0);

pub const UP_LEFT: Direction = Direction::new(-1, 1);
pub const UP_RIGHT: Direction = Direction::new(1, 1);
pub const DOWN_LEFT: Direction = Direction::new(-1, -1);
pub const DOWN_RIGHT: Direction = Direction::new(1, -1);

pub const ORTHOGONALS: [Direction; 4] = [UP, DOWN, LEFT, RIGHT];

pub const DIAGONALS: [Direction; 4] = [UP_LEFT, UP_RIGHT, DOWN_LEFT, DOWN_RIGHT];

/// Diagonals first, then orthogonals.
pub const EIGHT_DIRECTIONS: [Direction; 8] = [
    UP_LEFT, UP_RIGHT, DOWN_LEFT, DOWN_RIGHT,
    UP, DOWN, LEFT, RIGHT,
];

/// Clockwise from (1, 2).
pub const KNIGHT_MOVES: [Direction; 8] = [
    Direction::new(1, 2), Direction::new(2, 1),
    Direction::new(2, -1), Direction::new(1, -2),
    Direction::new(-1, -2), Direction::new(-2, -1),
    Direction::new(-2, 1), Direction::new(-1, 2),
];

pub const KING_MOVES: [Direction; 8] = EIGHT_DIRECTIONS;
