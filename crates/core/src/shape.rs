//! Shape catalog - tetromino matrices and matrix rotation
//!
//! Every kind is a square 0/1 matrix (2x2, 3x3 or 4x4). Rotation is a pure
//! 90° clockwise transform of the matrix; there are no kick offsets, so a
//! rotation either fits at the current anchor or is rejected.

use arrayvec::ArrayVec;

use crate::rng::Randomizer;
use crate::types::{PieceKind, MAX_SHAPE_SIZE, SPAWN_X, SPAWN_Y};

/// Offset of an occupied matrix cell: (column, row).
pub type CellOffset = (i8, i8);

/// Occupied offsets of a matrix. At most 16 for a 4x4 matrix.
pub type CellOffsets = ArrayVec<CellOffset, { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// Square occupancy matrix stored in a fixed 4x4 array.
///
/// Only the top-left `size` x `size` block is meaningful; the rest is always
/// unoccupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    size: u8,
    rows: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Matrix {
    /// Build a matrix from 0/1 rows. Rows must be square and at most 4 wide.
    pub const fn from_bits<const N: usize>(bits: [[u8; N]; N]) -> Self {
        assert!(N > 0 && N <= MAX_SHAPE_SIZE);
        let mut rows = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < N {
            let mut c = 0;
            while c < N {
                rows[r][c] = bits[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            size: N as u8,
            rows,
        }
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether the cell at (row, col) is occupied. Out of range is unoccupied.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.size() && col < self.size() && self.rows[row][col]
    }

    /// Occupied cells as (col, row) offsets, row-major.
    pub fn cells(&self) -> CellOffsets {
        let mut out = CellOffsets::new();
        for row in 0..self.size() {
            for col in 0..self.size() {
                if self.rows[row][col] {
                    out.push((col as i8, row as i8));
                }
            }
        }
        out
    }

    /// Rows as 0/1 vectors, for display and tests.
    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        (0..self.size())
            .map(|r| (0..self.size()).map(|c| self.rows[r][c] as u8).collect())
            .collect()
    }
}

/// Rotate a matrix 90° clockwise: `rotated[i][j] = m[N-1-j][i]`.
pub fn rotate_matrix(m: &Matrix) -> Matrix {
    let n = m.size();
    let mut rows = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
    for (i, row) in rows.iter_mut().enumerate().take(n) {
        for (j, cell) in row.iter_mut().enumerate().take(n) {
            *cell = m.rows[n - 1 - j][i];
        }
    }
    Matrix { size: m.size, rows }
}

/// A matrix paired with the kind it was drawn from (its color tag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub kind: PieceKind,
    pub matrix: Matrix,
}

impl Shape {
    /// The shape rotated clockwise. The receiver is left untouched.
    pub fn rotated(&self) -> Self {
        Self {
            kind: self.kind,
            matrix: rotate_matrix(&self.matrix),
        }
    }
}

/// A shape placed on the board.
///
/// `(x, y)` is the board position of the matrix's top-left cell. It may be
/// negative or overhang the board as long as no occupied cell does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A piece of `kind` in catalog orientation at the spawn anchor.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            shape: spawn_shape(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.shape.kind
    }

    pub fn matrix(&self) -> &Matrix {
        &self.shape.matrix
    }

    /// Same piece moved to (x, y).
    pub fn at(self, x: i8, y: i8) -> Self {
        Self { x, y, ..self }
    }

    /// Same shape (rotation kept) moved back to the spawn anchor.
    pub fn respawned(self) -> Self {
        self.at(SPAWN_X, SPAWN_Y)
    }

    /// Board coordinates of every occupied cell, possibly out of bounds.
    pub fn board_cells(&self) -> CellOffsets {
        self.matrix()
            .cells()
            .into_iter()
            .map(|(c, r)| (self.x + c, self.y + r))
            .collect()
    }
}

const I_MATRIX: Matrix = Matrix::from_bits([
    [0, 0, 0, 0],
    [1, 1, 1, 1],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);
const O_MATRIX: Matrix = Matrix::from_bits([[1, 1], [1, 1]]);
const T_MATRIX: Matrix = Matrix::from_bits([[0, 1, 0], [1, 1, 1], [0, 0, 0]]);
const L_MATRIX: Matrix = Matrix::from_bits([[0, 0, 1], [1, 1, 1], [0, 0, 0]]);
const J_MATRIX: Matrix = Matrix::from_bits([[1, 0, 0], [1, 1, 1], [0, 0, 0]]);
const S_MATRIX: Matrix = Matrix::from_bits([[0, 1, 1], [1, 1, 0], [0, 0, 0]]);
const Z_MATRIX: Matrix = Matrix::from_bits([[1, 1, 0], [0, 1, 1], [0, 0, 0]]);

/// Catalog entry for a kind.
pub fn spawn_shape(kind: PieceKind) -> Shape {
    let matrix = match kind {
        PieceKind::I => I_MATRIX,
        PieceKind::O => O_MATRIX,
        PieceKind::T => T_MATRIX,
        PieceKind::L => L_MATRIX,
        PieceKind::J => J_MATRIX,
        PieceKind::S => S_MATRIX,
        PieceKind::Z => Z_MATRIX,
    };
    Shape { kind, matrix }
}

/// Draw a uniformly random kind and place it at the spawn anchor.
pub fn random_piece(rng: &mut Randomizer) -> Piece {
    Piece::new(rng.draw())
}
