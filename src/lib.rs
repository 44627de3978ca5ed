//! Falling-block puzzle engine - pure, deterministic, and headless
//!
//! This crate contains the complete game rules and state management for a
//! classic falling-block session: a 10x20 board, seven tetromino shapes,
//! gravity that scales with level, line clears, and quadratic scoring. It
//! has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces an identical session
//! - **Testable**: every rule is reachable through the public API
//! - **Portable**: any shell can drive it (terminal, GUI, headless)
//! - **Fast**: zero-allocation hot paths for stepping and line clears
//!
//! # Module Structure
//!
//! - [`board`]: the 10x20 play field with row scanning and compaction
//! - [`pieces`]: shape matrices and the clockwise bounding-box rotation
//! - [`game_state`]: the engine - commands, gravity, lock/clear/spawn cycle
//! - [`rng`]: seedable LCG and the uniform piece source
//! - [`scoring`]: line scores, drop bonuses, level and gravity pacing
//! - [`snapshot`]: the render model published after every step
//! - [`types`]: board dimensions, piece kinds, and player commands
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each piece is an independent uniform draw
//!   (no bag balancing)
//! - **Bounding-box rotation**: plain 90-degree clockwise matrix turns
//!   with no wall kicks; a rotation that does not fit is rejected
//! - **One-piece lookahead**: the next piece is always visible
//! - **Scoring**: clearing k rows at once scores k^2 x 100; soft drops
//!   award 1 point per row, hard drops 2
//! - **Leveling**: one level per 1000 points; each level divides the
//!   gravity interval by 1 + 0.2 x (level - 1)
//! - **Hard drop**: falls to the floor and locks within the same step
//! - **Game over**: a freshly spawned piece that overlaps locked cells
//!   ends the session; only `Reset` revives it
//!
//! # Example
//!
//! ```
//! use blockfall::{Command, GameState};
//!
//! // Create a session with a fixed seed
//! let mut game = GameState::new(12345);
//!
//! // One frame: move right, then advance the gravity clock by 16 ms
//! let model = game.step(16, &[Command::MoveRight]);
//! assert!(!model.game_over);
//! assert_eq!(model.level, 1);
//!
//! // Hard drops lock immediately and award points per row fallen
//! let model = game.step(16, &[Command::HardDrop]);
//! assert!(model.score > 0);
//! ```
//!
//! # Timing
//!
//! The engine is clocked externally: call
//! [`GameState::step`](game_state::GameState::step) once per frame with the
//! elapsed milliseconds and the frame's commands. Gravity starts at 1000 ms
//! per row on level 1 and fires at most one forced row per step, so a
//! stalled caller never teleports a piece.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, Piece};
pub use pieces::Shape;
pub use rng::{PieceSource, SimpleRng};
pub use scoring::{
    calculate_drop_score, calculate_level, calculate_line_score, get_fall_interval_ms,
};
pub use snapshot::{PieceView, RenderModel};
pub use types::{Cell, Command, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
