//! Scoring module - line clear points, drop bonuses, and level pacing
//!
//! Line clears score quadratically: 1 -> 100, 2 -> 400, 3 -> 900, 4 -> 1600.
//! The level is derived from total score (one level per 1000 points) and
//! shortens the gravity interval as it rises. Score and level never
//! decrease within a session.

use crate::types::{BASE_FALL_MS, LEVEL_SCORE_STEP, LINE_CLEAR_BASE};

/// Calculate line clear score: cleared^2 x 100
/// lines: number of rows cleared by one lock (0-4)
pub fn calculate_line_score(lines: usize) -> u32 {
    let lines = lines as u32;
    lines * lines * LINE_CLEAR_BASE
}

/// Calculate drop score
/// soft drop: +1 per cell
/// hard drop: +2 per cell
pub fn calculate_drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells * 2
    } else {
        cells
    }
}

/// Level for a total score: one level per 1000 points, starting at 1
pub fn calculate_level(score: u32) -> u32 {
    score / LEVEL_SCORE_STEP + 1
}

/// Gravity interval for a level (in milliseconds)
///
/// The base interval shrinks by the factor 1 + 0.2 x (level - 1); in
/// integer arithmetic that is 5 x base / (level + 4), giving 1000, 833,
/// 714, 625, ... for levels 1, 2, 3, 4, ...
pub fn get_fall_interval_ms(level: u32) -> u32 {
    let level = level.max(1);
    BASE_FALL_MS * 5 / (level + 4)
}
