//! Core types shared across the engine
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity base interval at level 1 (in milliseconds)
pub const BASE_FALL_MS: u32 = 1000;

/// Scoring constants: clearing k rows scores k^2 * LINE_CLEAR_BASE,
/// and every LEVEL_SCORE_STEP points raise the level by one
pub const LINE_CLEAR_BASE: u32 = 100;
pub const LEVEL_SCORE_STEP: u32 = 1000;

/// Tetromino piece kinds, in palette order (color index = discriminant + 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl ShapeKind {
    /// All seven kinds, in color-index order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Palette index reported to renderers (1..=7; 0 means an empty cell)
    pub fn color_index(&self) -> u8 {
        *self as u8 + 1
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
        }
    }
}

/// Player commands consumed by the engine step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    Reset,
}

impl Command {
    /// Parse command from string (case-insensitive)
    ///
    /// Unrecognized strings yield `None`; callers drop them silently, so an
    /// unknown input never reaches the engine as a command.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            "harddrop" => Some(Command::HardDrop),
            "reset" => Some(Command::Reset),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
            Command::HardDrop => "hardDrop",
            Command::Reset => "reset",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<ShapeKind>;
