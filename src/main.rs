//! Terminal runner (default binary).
//!
//! Owns the two event sources the core is driven by: a fixed-interval
//! gravity clock and the keyboard. Events are applied one at a time, in
//! arrival order, and the screen repaints exactly when the returned state
//! differs from the one already shown.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use ntris::core::GameState;
use ntris::input::{is_restart, map_key, should_quit};
use ntris::term::{GameView, Screen, Viewport};
use ntris::types::GameConfig;

fn main() -> Result<()> {
    let config = parse_config()?;
    // Construct before touching the terminal so a bad arity prints a plain
    // error instead of dying inside the alternate screen.
    let game = GameState::new(config, seed_from_clock())?;

    let mut screen = Screen::new();
    screen.open()?;

    let result = run(&mut screen, game);

    // Always try to restore terminal state.
    let _ = screen.close();
    result
}

/// Optional single argument: blocks per piece (defaults to dominoes).
fn parse_config() -> Result<GameConfig> {
    let mut config = GameConfig::default();
    if let Some(raw) = std::env::args().nth(1) {
        config.arity = raw
            .parse()
            .with_context(|| format!("blocks per piece must be a small integer, got {raw:?}"))?;
    }
    Ok(config)
}

/// Seed from the wall clock; any value works, this just varies runs.
fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(screen: &mut Screen, mut game: GameState) -> Result<()> {
    let view = GameView::default();
    let tick_duration = Duration::from_millis(game.config().tick_ms);

    let mut last_tick = Instant::now();
    let mut shown: Option<GameState> = None;

    loop {
        // Repaint only when the state changed since the last draw.
        if shown.as_ref() != Some(&game) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let surface = view.render(&game, Viewport::new(w, h));
            screen.present(&surface)?;
            shown = Some(game.clone());
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    // Terminal auto-repeat stands in for held keys, so
                    // repeats count as presses here.
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_restart(key) {
                        game = GameState::new(game.config(), seed_from_clock())?;
                    } else if let Some(intent) = map_key(key) {
                        game = game.apply_input(intent);
                    }
                }
                Event::Resize(_, _) => {
                    shown = None;
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game = game.apply_tick();
        }
    }
}
