//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)
//!
//! Placement, merging and line clearing never mutate the receiver; they return a new board.

use crate::shape::{Matrix, Piece};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
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

    /// Build a board from rows, top row first.
    ///
    /// Returns `None` unless there are exactly 20 rows of exactly 10 cells.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Option<Self> {
        if rows.len() != HEIGHT || rows.iter().any(|row| row.len() != WIDTH) {
            return None;
        }
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            board.cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
        }
        Some(board)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
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

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether `matrix` anchored at (x, y) fits.
    ///
    /// Every occupied matrix cell must land inside the board on an empty cell.
    /// Unoccupied cells may hang off any edge.
    pub fn is_valid_placement(&self, matrix: &Matrix, x: i8, y: i8) -> bool {
        matrix
            .cells()
            .iter()
            .all(|&(c, r)| self.is_empty_at(x + c, y + r))
    }

    /// Copy of this board with the piece's in-bounds cells filled with its kind.
    pub fn merge(&self, piece: &Piece) -> Board {
        let mut out = self.clone();
        out.stamp(piece);
        out
    }

    /// Fill the piece's in-bounds cells in place.
    pub(crate) fn stamp(&mut self, piece: &Piece) {
        let kind = piece.kind();
        for (x, y) in piece.board_cells() {
            self.set(x, y, Some(kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Copy of this board with every full row removed and empty rows added on top.
    ///
    /// Returns the new board and the number of rows removed.
    pub fn clear_full_rows(&self) -> (Board, usize) {
        let mut out = self.clone();
        let cleared = out.collapse_full_rows();
        (out, cleared)
    }

    /// Two-pointer compaction: scan bottom-up, copy surviving rows down, blank the top.
    fn collapse_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * WIDTH;
                    self.cells
                        .copy_within(src_start..src_start + WIDTH, write_y * WIDTH);
                }
            }
        }

        self.cells[..write_y * WIDTH].fill(None);
        cleared
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Fill a whole row with `kind`, leaving the listed columns empty.
    pub fn fill_row_except(&mut self, y: i8, kind: PieceKind, holes: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            let cell = if holes.contains(&x) { None } else { Some(kind) };
            self.set(x, y, cell);
        }
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
    use crate::shape::spawn_shape;

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

        board.set(0, 0, Some(PieceKind::I));
        board.set(5, 10, Some(PieceKind::T));

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_overhanging_empty_matrix_cells_are_allowed() {
        let board = Board::new();
        // I occupies only its second matrix row; the first row hangs above the board.
        let i = spawn_shape(PieceKind::I).matrix;
        assert!(board.is_valid_placement(&i, 0, -1));
        assert!(!board.is_valid_placement(&i, 0, -2));
        // O's right column can't pass the right wall.
        let o = spawn_shape(PieceKind::O).matrix;
        assert!(board.is_valid_placement(&o, 8, 0));
        assert!(!board.is_valid_placement(&o, 9, 0));
    }

    #[test]
    fn test_collapse_keeps_order_of_surviving_rows() {
        let mut board = Board::new();
        board.set(0, 15, Some(PieceKind::S));
        board.fill_row_except(16, PieceKind::I, &[]);
        board.set(1, 17, Some(PieceKind::Z));
        board.fill_row_except(18, PieceKind::I, &[]);
        board.set(2, 19, Some(PieceKind::T));

        let (cleared, n) = board.clear_full_rows();
        assert_eq!(n, 2);
        assert_eq!(cleared.get(0, 17), Some(Some(PieceKind::S)));
        assert_eq!(cleared.get(1, 18), Some(Some(PieceKind::Z)));
        assert_eq!(cleared.get(2, 19), Some(Some(PieceKind::T)));
        assert_eq!(cleared.filled_count(), 3);
    }
}
