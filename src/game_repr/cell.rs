use std::fmt;
use std::ops::{Add, Mul, Neg};

/// Number of cells along each side of the board.
pub const BOARD_SIZE: i32 = 8;

/// Offset between two cells, e.g. one step up or a knight jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub const fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

impl Mul<i32> for Direction {
    type Output = Direction;

    fn mul(self, rhs: i32) -> Direction {
        Direction::new(self.dx.saturating_mul(rhs), self.dy.saturating_mul(rhs))
    }
}

impl Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Direction {
        self * -1
    }
}

impl Add for Direction {
    type Output = Direction;

    fn add(self, rhs: Direction) -> Direction {
        Direction::new(self.dx.saturating_add(rhs.dx), self.dy.saturating_add(rhs.dy))
    }
}

/// A board coordinate. `col` grows to the right (file a..h), `row` grows upwards (rank 1..8).
///
/// A `Cell` may hold any coordinates; whether it lies on the board is answered by
/// [`Cell::is_inside_board`], which every board access goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub const fn is_inside_board(&self) -> bool {
        self.col >= 0 && self.col < BOARD_SIZE && self.row >= 0 && self.row < BOARD_SIZE
    }

    /// Mirror the cell vertically (row 0 <-> row 7), used when white sits at the top.
    pub const fn flipped(&self) -> Self {
        Self::new(self.col, BOARD_SIZE - 1 - self.row)
    }

    /// Parse algebraic notation such as `"e4"`.
    ///
    /// # Returns
    ///
    /// `None` unless the input is exactly a file letter `a..=h` followed by a rank digit `1..=8`.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        let cell = Cell::new(
            (file as i32) - ('a' as i32),
            rank.to_digit(10)? as i32 - 1,
        );
        cell.is_inside_board().then_some(cell)
    }

    /// Algebraic name of the cell, or `None` when it lies off the board.
    pub fn to_algebraic(&self) -> Option<String> {
        if !self.is_inside_board() {
            return None;
        }
        let file = (b'a' + self.col as u8) as char;
        Some(format!("{}{}", file, self.row + 1))
    }

    /// Iterate over every on-board cell, row by row from the bottom.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Cell::new(col, row)))
    }
}

impl Add<Direction> for Cell {
    type Output = Cell;

    fn add(self, rhs: Direction) -> Cell {
        Cell::new(self.col.saturating_add(rhs.dx), self.row.saturating_add(rhs.dy))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "({}, {})", self.col, self.row),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Cell::new(0, 0).is_inside_board());
        assert!(Cell::new(7, 7).is_inside_board());
        assert!(!Cell::new(-1, 0).is_inside_board());
        assert!(!Cell::new(0, 8).is_inside_board());
        assert!(!Cell::new(8, 3).is_inside_board());
        assert!(!Cell::new(i32::MIN, i32::MAX).is_inside_board());
    }

    #[test]
    fn test_algebraic() {
        assert_eq!(Cell::from_algebraic("a1"), Some(Cell::new(0, 0)));
        assert_eq!(Cell::from_algebraic("h8"), Some(Cell::new(7, 7)));
        assert_eq!(Cell::from_algebraic("e4"), Some(Cell::new(4, 3)));
        assert_eq!(Cell::from_algebraic("i1"), None);
        assert_eq!(Cell::from_algebraic("a9"), None);
        assert_eq!(Cell::from_algebraic("a10"), None);
        assert_eq!(Cell::from_algebraic(""), None);

        assert_eq!(Cell::new(1, 2).to_algebraic().as_deref(), Some("b3"));
        assert_eq!(Cell::new(-1, 2).to_algebraic(), None);
        assert_eq!(Cell::new(9, 9).to_string(), "(9, 9)");
    }

    #[test]
    fn test_offsets_do_not_overflow() {
        let far = Cell::new(i32::MAX, i32::MIN) + Direction::new(1, -1) * 7;
        assert!(!far.is_inside_board());
        assert_eq!(Cell::new(3, 3) + Direction::new(1, 2), Cell::new(4, 5));
        assert_eq!(-Direction::new(1, -2), Direction::new(-1, 2));
    }

    #[test]
    fn test_all_cells() {
        let cells: Vec<Cell> = Cell::all().collect();
        assert_eq!(cells.len(), 64);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[8], Cell::new(0, 1));
        assert!(cells.iter().all(Cell::is_inside_board));
        assert_eq!(Cell::new(2, 0).flipped(), Cell::new(2, 7));
    }
}
