//! Game state module - the engine behind each session
//!
//! Ties together board, shapes, RNG, and scoring. Each step consumes
//! elapsed wall-clock time plus an ordered command batch, advances the
//! gravity clock, and publishes a render model. Every operation is total:
//! impossible moves and commands after game over are no-ops, never errors.

use crate::board::Board;
use crate::pieces::Shape;
use crate::rng::PieceSource;
use crate::scoring::{
    calculate_drop_score, calculate_level, calculate_line_score, get_fall_interval_ms,
};
use crate::snapshot::{PieceView, RenderModel};
use crate::types::{Command, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Active falling piece: a shape in its current orientation plus the board
/// position of the shape's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at its spawn anchor: horizontally centered on the top
    /// row, `x = width/2 - shape_cols/2`
    pub fn spawn(kind: ShapeKind) -> Self {
        let shape = Shape::canonical(kind);
        let x = BOARD_WIDTH as i8 / 2 - shape.cols() as i8 / 2;
        Self {
            kind,
            shape,
            x,
            y: 0,
        }
    }

    /// Absolute board cells occupied by this piece
    pub fn cells(&self) -> [(i8, i8); 4] {
        let mut cells = self.shape.offsets();
        for cell in &mut cells {
            cell.0 += self.x;
            cell.1 += self.y;
        }
        cells
    }

    /// Collision test against the side walls, the floor, and locked cells
    ///
    /// Cells above the top edge (y < 0) never collide on their own; a piece
    /// may legally protrude above the board.
    pub fn collides(&self, board: &Board) -> bool {
        self.cells().iter().any(|&(x, y)| {
            x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 || board.is_occupied(x, y)
        })
    }

    /// Palette index of this piece's kind
    pub fn color(&self) -> u8 {
        self.kind.color_index()
    }
}

/// Complete engine state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Piece,
    /// Exactly one piece of lookahead, already positioned at its spawn anchor
    next: Piece,
    source: PieceSource,
    score: u32,
    level: u32,
    /// Cached gravity interval; recomputed only when the level changes
    fall_interval_ms: u32,
    /// Gravity accumulator, reset whenever a forced fall fires or a piece locks
    fall_timer_ms: u32,
    game_over: bool,
}

impl GameState {
    /// Create a new session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut source = PieceSource::new(seed);
        let current = Piece::spawn(source.draw());
        let next = Piece::spawn(source.draw());

        let mut state = Self {
            board: Board::new(),
            current,
            next,
            source,
            score: 0,
            level: 1,
            fall_interval_ms: get_fall_interval_ms(1),
            fall_timer_ms: 0,
            game_over: false,
        };
        state.game_over = state.current.collides(&state.board);
        state
    }

    /// Rebuild the session in place: fresh board, score, level, timers, and
    /// two freshly drawn pieces
    ///
    /// The piece source keeps its state, so the kind sequence continues
    /// rather than replaying the seed. Reproducible sequences come from
    /// constructing a new `GameState` with a chosen seed.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = Piece::spawn(self.source.draw());
        self.next = Piece::spawn(self.source.draw());
        self.score = 0;
        self.level = 1;
        self.fall_interval_ms = get_fall_interval_ms(1);
        self.fall_timer_ms = 0;
        self.game_over = self.current.collides(&self.board);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current gravity interval in milliseconds
    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn next_piece(&self) -> Piece {
        self.next
    }

    /// Advance the session by one frame: apply the command batch in order,
    /// then run the gravity clock for the elapsed time, then publish the
    /// render model
    ///
    /// While the session is over, commands other than `Reset` are ignored
    /// and gravity does not run; the terminal snapshot is still returned.
    pub fn step(&mut self, elapsed_ms: u32, commands: &[Command]) -> RenderModel {
        for &command in commands {
            self.apply_command(command);
        }
        self.advance_gravity(elapsed_ms);
        self.snapshot()
    }

    /// Apply one command immediately. Returns whether any state changed.
    pub fn apply_command(&mut self, command: Command) -> bool {
        if self.game_over && command != Command::Reset {
            return false;
        }

        match command {
            Command::MoveLeft => self.try_shift(-1, 0),
            Command::MoveRight => self.try_shift(1, 0),
            Command::SoftDrop => {
                let moved = self.try_shift(0, 1);
                if moved {
                    self.score += calculate_drop_score(1, false);
                }
                moved
            }
            Command::Rotate => self.try_rotate(),
            Command::HardDrop => {
                self.hard_drop();
                true
            }
            Command::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Fill a caller-owned render model without allocating
    pub fn snapshot_into(&self, out: &mut RenderModel) {
        self.board.write_u8_grid(&mut out.board);
        out.current = PieceView {
            cells: self.current.cells(),
            color: self.current.color(),
        };
        out.next = PieceView {
            cells: self.next.shape.offsets(),
            color: self.next.color(),
        };
        out.score = self.score;
        out.level = self.level;
        out.game_over = self.game_over;
    }

    /// Build a fresh render model for the current state
    pub fn snapshot(&self) -> RenderModel {
        let mut model = RenderModel::default();
        self.snapshot_into(&mut model);
        model
    }

    /// Translate the active piece provisionally: the move commits only when
    /// the shifted piece collides with nothing
    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let moved = Piece {
            x: self.current.x + dx,
            y: self.current.y + dy,
            ..self.current
        };
        if moved.collides(&self.board) {
            return false;
        }
        self.current = moved;
        true
    }

    /// Rotate the active piece clockwise in place, provisionally
    ///
    /// No wall kicks: when the rotated shape does not fit at the unchanged
    /// anchor the rotation is discarded. The O shape rotates onto itself
    /// and therefore always commits.
    fn try_rotate(&mut self) -> bool {
        let rotated = Piece {
            shape: self.current.shape.rotated_cw(),
            ..self.current
        };
        if rotated.collides(&self.board) {
            return false;
        }
        self.current = rotated;
        true
    }

    /// Drop the active piece to the floor, award 2 points per row fallen,
    /// and lock it within this same call
    fn hard_drop(&mut self) {
        let mut distance: u32 = 0;
        while self.try_shift(0, 1) {
            distance += 1;
        }
        self.score += calculate_drop_score(distance, true);
        self.lock_and_advance();
    }

    /// Advance the gravity clock. When the accumulator reaches the fall
    /// interval the piece is forced down one row, or locked when the row
    /// below is blocked; either way the accumulator restarts at zero.
    /// At most one forced row per call.
    fn advance_gravity(&mut self, elapsed_ms: u32) {
        if self.game_over {
            return;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.fall_interval_ms {
            return;
        }

        self.fall_timer_ms = 0;
        if !self.try_shift(0, 1) {
            self.lock_and_advance();
        }
    }

    /// The lock cycle: write the piece onto the board, clear the full-row
    /// snapshot, apply scoring and leveling, then promote the lookahead
    ///
    /// A promoted piece that collides at its spawn anchor ends the session;
    /// it stays visible but the board keeps only the just-locked cells.
    fn lock_and_advance(&mut self) {
        self.board.lock_piece(
            &self.current.shape.offsets(),
            self.current.x,
            self.current.y,
            self.current.kind,
        );

        let full = self.board.full_rows();
        if !full.is_empty() {
            self.board.clear_rows(&full);
            self.score += calculate_line_score(full.len());
        }

        let level = calculate_level(self.score);
        if level != self.level {
            self.level = level;
            self.fall_interval_ms = get_fall_interval_ms(level);
        }

        self.fall_timer_ms = 0;

        self.current = self.next;
        self.next = Piece::spawn(self.source.draw());
        if self.current.collides(&self.board) {
            self.game_over = true;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
