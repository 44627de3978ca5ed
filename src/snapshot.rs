//! Snapshot module - the per-step render model handed to presentation code
//!
//! The engine owns no rendering. Each step publishes a complete view of the
//! session - locked cells, the active and lookahead pieces, score, level,
//! game over flag - that a renderer can draw without further engine
//! queries. The model serializes with serde for consumers that forward it
//! over a wire instead of drawing directly.

use serde::Serialize;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// One piece as a renderer sees it: four cells plus a palette color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceView {
    /// Four (x, y) cells. Absolute board coordinates for the active piece
    /// (y may be negative while it protrudes above the top edge);
    /// shape-local coordinates for the lookahead preview.
    pub cells: [(i8, i8); 4],
    /// Palette index (1..=7)
    pub color: u8,
}

impl PieceView {
    fn empty() -> Self {
        Self {
            cells: [(0, 0); 4],
            color: 0,
        }
    }
}

/// Complete view of one engine step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderModel {
    /// Locked cells only: 0 = empty, 1..=7 = color index of the locked kind
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    /// The active piece, absolute board coordinates
    pub current: PieceView,
    /// The lookahead piece, shape-local coordinates
    pub next: PieceView,
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
}

impl RenderModel {
    /// Reset to the empty-session shape (for reuse with `snapshot_into`)
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.current = PieceView::empty();
        self.next = PieceView::empty();
        self.score = 0;
        self.level = 1;
        self.game_over = false;
    }
}

impl Default for RenderModel {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: PieceView::empty(),
            next: PieceView::empty(),
            score: 0,
            level: 1,
            game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_is_cleared() {
        let model = RenderModel::default();
        assert!(model.board.iter().all(|row| row.iter().all(|&c| c == 0)));
        assert_eq!(model.score, 0);
        assert_eq!(model.level, 1);
        assert!(!model.game_over);
    }

    #[test]
    fn test_clear_resets_model() {
        let mut model = RenderModel::default();
        model.board[19][0] = 3;
        model.score = 500;
        model.level = 4;
        model.game_over = true;

        model.clear();
        assert_eq!(model, RenderModel::default());
    }
}
