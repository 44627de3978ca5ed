//! Board module - manages the play field grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of
//! the piece that locked there. Uses a flat array for cache locality and
//! zero-allocation row operations.
//! Coordinates: (x, y) with x in 0..9 (left to right), y in 0..19 (top to
//! bottom). The board stores locked cells only; the falling piece lives in
//! the game state and may extend above y = 0.

use arrayvec::ArrayVec;

use crate::types::{Cell, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The play field - 10 columns x 20 rows using flat array storage
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

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
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

    /// Check if position is occupied (within bounds and filled)
    /// Out-of-bounds positions, including y < 0, read as unoccupied
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Row indices of all currently full rows, scanned top to bottom
    ///
    /// The result is the snapshot a lock cycle clears; a single lock can
    /// complete at most four rows.
    pub fn full_rows(&self) -> ArrayVec<usize, 4> {
        let mut rows = ArrayVec::new();
        for y in 0..BOARD_HEIGHT as usize {
            if self.is_row_full(y) {
                if rows.is_full() {
                    break;
                }
                rows.push(y);
            }
        }
        rows
    }

    /// Remove exactly the given rows, shifting everything above each removed
    /// row down one and leaving fresh empty rows at the top
    ///
    /// Takes the pre-scanned row set rather than re-deriving it, so rows
    /// that only fill up mid-compaction are never cleared. Uses a
    /// two-pointer pass with `copy_within` (no allocation). Total row count
    /// is unchanged.
    pub fn clear_rows(&mut self, rows: &[usize]) {
        if rows.is_empty() {
            return;
        }

        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Walk bottom to top, compacting surviving rows downward
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if rows.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                let dst_start = write_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, dst_start);
            }
        }

        // Blank the rows that opened up at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }
    }

    /// Write a piece's occupied cells onto the board
    ///
    /// Cells with board row < 0 (above the top edge) are dropped rather
    /// than written; a piece locking at a blocked spawn leaves the visible
    /// board unchanged above y = 0.
    pub fn lock_piece(&mut self, offsets: &[(i8, i8)], x: i8, y: i8, kind: ShapeKind) {
        for &(dx, dy) in offsets {
            let py = y + dy;
            if py >= 0 {
                self.set(x + dx, py, Some(kind));
            }
        }
    }

    /// Project cells to the u8 palette encoding used by the render model
    /// (0 = empty, 1..=7 = color index of the locked kind)
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                out[y][x] = match self.cells[y * BOARD_WIDTH as usize + x] {
                    Some(kind) => kind.color_index(),
                    None => 0,
                };
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
