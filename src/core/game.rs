//! Game module - the deterministic transition core
//!
//! The whole game is two pure functions over an immutable state value: a
//! gravity tick and a player input. Each returns a fresh `GameState`; a
//! transition that would collide returns the prior state unchanged, so the
//! adapter detects "something happened" by comparing states. Rejection is
//! normal play (holding left against the wall), not an error.

use std::fmt;

use crate::core::board::Board;
use crate::core::catalog::{self, Variant};
use crate::core::piece::{Blocks, Piece};
use crate::core::rng::SimpleRng;
use crate::types::{Coord, GameConfig, Intent, ShapeId, DOWN, LEFT, MAX_BOARD_DIM, RIGHT};

/// Construction-time failures. Runtime move and rotation rejection is not an
/// error and never surfaces here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Width or height of zero, or beyond what the coordinate math supports
    InvalidDimensions { width: u8, height: u8 },
    /// No shape catalog entry for the requested blocks-per-piece
    UnsupportedArity(u8),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidDimensions { width, height } => {
                write!(f, "invalid board dimensions {}x{} (limit {})", width, height, MAX_BOARD_DIM)
            }
            GameError::UnsupportedArity(arity) => {
                write!(f, "no shape catalog for arity {}", arity)
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Complete game state. Cheap to clone and compare; two states are equal
/// exactly when every observable (board, pieces, score, over flag) and the
/// RNG stream position agree.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    config: GameConfig,
    variants: &'static [Variant],
    board: Board,
    active: Piece,
    next: Piece,
    score: u32,
    game_over: bool,
    rng: SimpleRng,
}

impl GameState {
    /// Create a fresh game: empty board, active and next pieces drawn from
    /// the shape catalog for the configured arity.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, GameError> {
        if config.width == 0
            || config.height == 0
            || config.width > MAX_BOARD_DIM
            || config.height > MAX_BOARD_DIM
        {
            return Err(GameError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }
        let variants =
            catalog::variants(config.arity).ok_or(GameError::UnsupportedArity(config.arity))?;

        let spawn = spawn_position(config.width);
        let mut rng = SimpleRng::new(seed);
        let active = draw_piece(variants, spawn, &mut rng);
        let next = draw_piece(variants, spawn, &mut rng);

        Ok(Self {
            config,
            variants,
            board: Board::new(config.width, config.height),
            active,
            next,
            score: 0,
            game_over: false,
            rng,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The falling piece
    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// The piece that will fall after the active one locks
    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Cell of the settled stack under a coordinate (empty for the active
    /// piece's cells; rendering overlays the piece separately)
    pub fn cell_at(&self, coord: Coord) -> Option<ShapeId> {
        self.board.cell(coord)
    }

    /// True when a settled block or the floor sits directly below any cell
    /// of the active piece.
    pub fn grounded(&self) -> bool {
        self.active
            .cells()
            .any(|cell| self.board.is_filled(cell.translate(DOWN)))
    }

    /// Advance one gravity step: fall while airborne, otherwise lock the
    /// piece, clear full rows, bank the score, and promote the next piece.
    pub fn apply_tick(&self) -> GameState {
        if self.game_over {
            return self.clone();
        }
        if !self.grounded() {
            // Cannot collide when airborne, but goes through the same
            // checked path as player movement.
            return self.with_active(self.active.moved(DOWN));
        }
        self.lock_and_respawn()
    }

    /// Apply one player intent. An impossible move or rotation returns the
    /// state unchanged.
    pub fn apply_input(&self, intent: Intent) -> GameState {
        if self.game_over {
            return self.clone();
        }
        match intent {
            Intent::Left => self.with_active(self.active.moved(LEFT)),
            Intent::Right => self.with_active(self.active.moved(RIGHT)),
            Intent::SoftDrop => self.with_active(self.active.moved(DOWN)),
            Intent::Rotate => self.with_active(self.active.rotated()),
        }
    }

    /// Accept `candidate` as the active piece only if it fits the board
    fn with_active(&self, candidate: Piece) -> GameState {
        if candidate.collides(&self.board) {
            return self.clone();
        }
        GameState {
            active: candidate,
            ..self.clone()
        }
    }

    /// Lock, sweep, score, and spawn as one atomic transition
    fn lock_and_respawn(&self) -> GameState {
        let mut next = self.clone();
        next.board = self.board.stamp(&self.active);

        // Single top-to-bottom sweep. Removing row y drops only rows that
        // were already scanned (and found not full) into the scanned region,
        // so one pass catches every full row, adjacent ones included.
        let mut rows_cleared = 0u32;
        for y in 0..next.board.height() {
            if next.board.is_row_full(y) {
                next.board.remove_row(y);
                rows_cleared += 1;
            }
        }
        next.score += rows_cleared * (rows_cleared + 1) / 2;

        next.active = self.next.clone();
        next.next = draw_piece(self.variants, spawn_position(self.config.width), &mut next.rng);

        // A replacement piece that already overlaps the stack ends the game.
        // The overlapping piece stays visible where it spawned.
        if next.active.collides(&next.board) {
            next.game_over = true;
        }
        next
    }
}

/// Spawn reference position: top row, horizontal middle
fn spawn_position(width: u8) -> Coord {
    Coord::new((width / 2) as i8, 0)
}

/// Draw a piece uniformly from the shape variants. The shape identity is the
/// 1-based variant index, which is what settled cells carry.
fn draw_piece(variants: &'static [Variant], spawn: Coord, rng: &mut SimpleRng) -> Piece {
    let index = rng.next_range(variants.len() as u32) as usize;
    let blocks: Blocks = variants[index]
        .iter()
        .map(|&(x, y)| Coord::new(x, y))
        .collect();
    Piece::new(ShapeId::new(index as u8 + 1), spawn, blocks)
}
