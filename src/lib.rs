//! ntris - a falling-block puzzle generalized over piece size
//!
//! One game, one parameter: pieces are made of `arity` blocks. Arity 1 drops
//! single cells, arity 2 is the domino game, arity 4 is the familiar one.
//! The [`core`] module is a pure, deterministic state machine driven by two
//! kinds of events (gravity ticks and player intents); [`term`] paints a
//! state into a terminal glyph surface and [`input`] maps key events to
//! intents. The binary wires a clock and a keyboard to those pieces.
//!
//! States are immutable values: applying an event returns a new state, and
//! an event that cannot apply (a move into the wall, a rotation into the
//! stack) returns the previous state unchanged. Adapters repaint exactly
//! when the returned state differs from the one on screen.
//!
//! # Example
//!
//! ```
//! use ntris::core::GameState;
//! use ntris::types::{GameConfig, Intent};
//!
//! let game = GameState::new(GameConfig::default(), 12345)?;
//!
//! // Gravity pulls the piece down one row.
//! let stepped = game.apply_tick();
//! assert_ne!(stepped, game);
//!
//! // Rejected inputs leave the state untouched.
//! let mut walled = stepped.clone();
//! for _ in 0..20 {
//!     walled = walled.apply_input(Intent::Left);
//! }
//! assert_eq!(walled.apply_input(Intent::Left), walled);
//! # Ok::<(), ntris::core::GameError>(())
//! ```

pub mod core;
pub mod input;
pub mod term;
pub mod types;
