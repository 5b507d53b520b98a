//! Terminal rendering layer.
//!
//! A small, game-oriented stack: the view draws one game state into a plain
//! glyph surface, and the screen flushes that to the terminal. No widget or
//! layout framework; the surface keeps drawing code pure and testable while
//! the screen owns the escape-sequence plumbing.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Glyph, Rgb, Style, Surface, Weight};
pub use game_view::{title, GameView, Viewport};
pub use renderer::Screen;
