//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board dimensions
pub const DEFAULT_WIDTH: u8 = 10;
pub const DEFAULT_HEIGHT: u8 = 20;

/// Largest board edge the coordinate arithmetic supports
pub const MAX_BOARD_DIM: u8 = 64;

/// Default piece size (2 blocks = the domino game)
pub const DEFAULT_ARITY: u8 = 2;

/// Gravity interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 100;

/// Upper bound on blocks per piece across the whole catalog
pub const MAX_BLOCKS: usize = 4;

/// Integer grid coordinate. x grows rightward, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Component-wise addition
    pub fn translate(self, offset: Coord) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
        }
    }

    /// Quarter turn about the local origin: (x, y) -> (y, -x)
    pub fn rotated(self) -> Self {
        Self {
            x: self.y,
            y: -self.x,
        }
    }
}

/// Unit steps used by the transition functions
pub const LEFT: Coord = Coord::new(-1, 0);
pub const RIGHT: Coord = Coord::new(1, 0);
pub const DOWN: Coord = Coord::new(0, 1);

/// Identity of a catalog shape (1-based variant index)
///
/// Gameplay treats this as opaque; the terminal view maps it to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(u8);

impl ShapeId {
    pub fn new(id: u8) -> Self {
        debug_assert!(id > 0, "shape identities are 1-based");
        Self(id)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Cell on the board (None = empty, Some = settled block's shape identity)
pub type Cell = Option<ShapeId>;

/// Player intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Left,
    Right,
    Rotate,
    SoftDrop,
}

impl Intent {
    /// Parse intent from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Intent::Left),
            "right" => Some(Intent::Right),
            "rotate" => Some(Intent::Rotate),
            "softdrop" => Some(Intent::SoftDrop),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Left => "left",
            Intent::Right => "right",
            Intent::Rotate => "rotate",
            Intent::SoftDrop => "softDrop",
        }
    }
}

/// Per-game configuration, fixed for the life of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    /// Blocks per piece; selects the shape catalog
    pub arity: u8,
    /// Gravity interval for the adapter clock (the core itself is untimed)
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            arity: DEFAULT_ARITY,
            tick_ms: TICK_INTERVAL_MS,
        }
    }
}
