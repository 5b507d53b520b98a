//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules and state transitions. It has
//! zero dependencies on UI, timing, or I/O, and it never mutates in place:
//! every transition returns a fresh [`GameState`].
//!
//! - [`board`]: settled-block grid with the shared fill predicate and row removal
//! - [`catalog`]: shape variant tables indexed by piece size
//! - [`piece`]: the falling piece and its move/rotate transforms
//! - [`game`]: the tick and input transition functions
//! - [`rng`]: deterministic piece selection

pub mod board;
pub mod catalog;
pub mod game;
pub mod piece;
pub mod rng;

// Re-export commonly used types
pub use board::Board;
pub use game::{GameError, GameState};
pub use piece::Piece;
pub use rng::SimpleRng;
