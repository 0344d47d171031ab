//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the type of
//! the piece that was locked there. Uses a flat array for cache locality and
//! zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).

use crate::piece::Piece;
use crate::types::{Cell, PieceType, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Board contents as cell codes (0 = empty, 1..=7 = piece type), row-major
pub type U8Grid = [[u8; WIDTH]; HEIGHT];

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Build a board from cell codes; unknown codes are treated as empty
    pub fn from_rows(rows: &U8Grid) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                board.cells[y * WIDTH + x] = PieceType::from_cell_code(code);
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True when (x, y) is outside the grid or holds a locked mino
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        !matches!(self.get(x, y), Some(None))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// Whether every mino of `piece` lands on an empty in-bounds cell
    pub fn fits(&self, piece: &Piece) -> bool {
        piece.cells().all(|(x, y)| !self.is_occupied(x, y))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove row `y`, shift every row above it down by one and empty the top row
    /// Returns the number of rows removed (1 or 0)
    pub fn clear_row(&mut self, y: usize) -> usize {
        if y >= HEIGHT {
            return 0;
        }

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * WIDTH;
            self.cells
                .copy_within(src_start..src_start + WIDTH, row * WIDTH);
        }

        for cell in &mut self.cells[0..WIDTH] {
            *cell = None;
        }

        1
    }

    /// Clear all full rows, scanning bottom to top, and return how many were removed
    ///
    /// After a row is removed the rows above have shifted into its index, so
    /// the same index is examined again before moving up.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = HEIGHT;

        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                cleared += self.clear_row(row);
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Write the piece's type under every mino of its mask
    ///
    /// Minos outside the grid are skipped; callers validate placement first.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.kind()));
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }

    /// Export cell codes into an existing grid without allocating
    pub fn write_u8_grid(&self, out: &mut U8Grid) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, code) in row.iter_mut().enumerate() {
                *code = self.cells[y * WIDTH + x].map_or(0, |kind| kind.cell_code());
            }
        }
    }

    pub fn to_u8_grid(&self) -> U8Grid {
        let mut grid = [[0u8; WIDTH]; HEIGHT];
        self.write_u8_grid(&mut grid);
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Orientation;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();
        board.set(0, 0, Some(PieceType::I));
        board.set(5, 10, Some(PieceType::T));

        assert_eq!(board.cells[0], Some(PieceType::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceType::T));
    }

    #[test]
    fn test_lock_skips_out_of_bounds_minos() {
        let mut board = Board::new();
        // I piece facing East hanging two rows below the floor
        let mut piece = Piece::new(PieceType::I, 0, 18);
        piece.set_orientation(Orientation::East);

        board.lock(&piece);

        assert_eq!(board.get(2, 18), Some(Some(PieceType::I)));
        assert_eq!(board.get(2, 19), Some(Some(PieceType::I)));
        let filled = board.cells().iter().filter(|c| c.is_some()).count();
        assert_eq!(filled, 2);
    }

    #[test]
    fn test_rescan_handles_adjacent_full_rows() {
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 17, Some(PieceType::Z));
            board.set(x, 18, Some(PieceType::S));
            board.set(x, 19, Some(PieceType::O));
        }
        board.set(4, 16, Some(PieceType::J));

        assert_eq!(board.clear_full_rows(), 3);
        assert_eq!(board.get(4, 19), Some(Some(PieceType::J)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
    }

    #[test]
    fn test_u8_grid_roundtrip() {
        let mut rows = [[0u8; 10]; 20];
        rows[5][3] = 2;
        rows[19][9] = 7;
        let board = Board::from_rows(&rows);
        assert_eq!(board.get(3, 5), Some(Some(PieceType::O)));
        assert_eq!(board.to_u8_grid(), rows);
    }
}
