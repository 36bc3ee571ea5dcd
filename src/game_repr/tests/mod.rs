use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create an empty board
pub fn empty_board() -> Board {
    Board::empty()
}

/// Helper function to place a piece; white faces up, black faces down
pub fn place(board: &mut Board, piece_type: Type, color: Color, cell: Cell) -> PieceId {
    let side = match color {
        Color::White => BoardSide::Up,
        Color::Black => BoardSide::Down,
    };
    board
        .register(PieceData::new(piece_type, color, side), cell)
        .expect("test piece must land on a free cell")
}

/// Helper function to run a rule and collect `(destination, captured)` pairs in emission order
pub fn collect(rule: MoveRule, board: &Board, color: Color, from: Cell) -> Vec<(Cell, Option<PieceId>)> {
    let mut found = Vec::new();
    rule.calculate_legal_moves(board, color, from, |to, captured| {
        found.push((to, captured.map(|p| p.id())));
    });
    found
}

/// Helper function to collect just the destinations, sorted
pub fn destinations(rule: MoveRule, board: &Board, color: Color, from: Cell) -> Vec<Cell> {
    let mut cells: Vec<Cell> = collect(rule, board, color, from).into_iter().map(|(c, _)| c).collect();
    cells.sort();
    cells
}

/// Helper function to build a sorted cell list from `(col, row)` pairs
pub fn cells(coords: &[(i32, i32)]) -> Vec<Cell> {
    let mut cells: Vec<Cell> = coords.iter().map(|&(c, r)| Cell::new(c, r)).collect();
    cells.sort();
    cells
}

// ==================== TEST MODULES ====================

mod primitives;
mod properties;
