//! Pieces module - tetromino shape matrices and bounding-box rotation
//!
//! Each shape is a boolean matrix inside a 4x4 bounding box with explicit
//! row/column dimensions. Rotation is the plain 90-degree clockwise matrix
//! transform around the bounding box; there are no wall kicks, so a rotation
//! that does not fit at the current anchor is rejected by the caller.

use crate::types::ShapeKind;

/// Maximum extent of a shape matrix in either dimension
pub const MAX_SHAPE_DIM: usize = 4;

/// A tetromino in one orientation: occupied cells within an RxC bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    rows: usize,
    cols: usize,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// The canonical (spawn) orientation for a piece kind
    pub fn canonical(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::I => Self::from_rows([[1, 1, 1, 1]]),
            ShapeKind::O => Self::from_rows([[1, 1], [1, 1]]),
            ShapeKind::T => Self::from_rows([[1, 1, 1], [0, 1, 0]]),
            ShapeKind::L => Self::from_rows([[1, 1, 1], [1, 0, 0]]),
            ShapeKind::J => Self::from_rows([[1, 1, 1], [0, 0, 1]]),
            ShapeKind::S => Self::from_rows([[0, 1, 1], [1, 1, 0]]),
            ShapeKind::Z => Self::from_rows([[1, 1, 0], [0, 1, 1]]),
        }
    }

    fn from_rows<const R: usize, const C: usize>(rows: [[u8; C]; R]) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                cells[r][c] = value != 0;
            }
        }
        Self {
            rows: R,
            cols: C,
            cells,
        }
    }

    /// Number of rows in the bounding box
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the bounding box
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix cell at (row, col) is occupied
    /// Out-of-box coordinates read as empty
    pub fn cell(&self, r: usize, c: usize) -> bool {
        r < self.rows && c < self.cols && self.cells[r][c]
    }

    /// Rotate 90 degrees clockwise: an RxC matrix becomes CxR, with
    /// `out[c][R - 1 - r] = in[r][c]`
    ///
    /// The O shape maps to itself; the I shape alternates between its two
    /// orientations; four rotations return any shape to canonical form.
    pub fn rotated_cw(&self) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for r in 0..self.rows {
            for c in 0..self.cols {
                cells[c][self.rows - 1 - r] = self.cells[r][c];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Offsets of the four occupied cells as (dx, dy) = (column, row)
    /// within the bounding box, scanned row-major
    pub fn offsets(&self) -> [(i8, i8); 4] {
        let mut out = [(0i8, 0i8); 4];
        let mut n = 0;
        for r in 0..self.rows {
            for c in 0..self.cols {
                if self.cells[r][c] && n < out.len() {
                    out[n] = (c as i8, r as i8);
                    n += 1;
                }
            }
        }
        out
    }
}
