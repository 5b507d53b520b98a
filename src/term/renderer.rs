//! Screen: owns the real terminal and flushes surfaces to it.
//!
//! Every present is a full repaint; the caller already skips frames whose
//! game state did not change, which bounds repaints by the tick rate. Each
//! row is printed as maximal same-style runs, so a frame costs a handful of
//! escape sequences per row rather than one per character.

use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::term::fb::{Glyph, Rgb, Style, Surface, Weight};

pub struct Screen {
    out: Stdout,
}

impl Screen {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    /// Switch to a raw-mode alternate screen with the cursor hidden.
    pub fn open(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        queue!(
            self.out,
            EnterAlternateScreen,
            Hide,
            terminal::DisableLineWrap
        )?;
        self.out.flush()?;
        Ok(())
    }

    /// Undo everything `open` did. Safe to call on every exit path.
    pub fn close(&mut self) -> Result<()> {
        queue!(
            self.out,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            Show,
            LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint the whole terminal from a surface.
    pub fn present(&mut self, surface: &Surface) -> Result<()> {
        queue!(self.out, terminal::Clear(terminal::ClearType::All))?;

        for (y, row) in surface.rows().enumerate() {
            queue!(self.out, MoveTo(0, y as u16))?;
            for (run, style) in style_runs(row) {
                self.emit(&run, style)?;
            }
        }

        queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))?;
        self.out.flush()?;
        Ok(())
    }

    /// Print one same-style run of characters.
    fn emit(&mut self, run: &str, style: Style) -> Result<()> {
        // The attribute reset clears colors too, so it goes first.
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(color(style.fg)),
            SetBackgroundColor(color(style.bg))
        )?;
        match style.weight {
            Weight::Bold => queue!(self.out, SetAttribute(Attribute::Bold))?,
            Weight::Dim => queue!(self.out, SetAttribute(Attribute::Dim))?,
            Weight::Normal => {}
        }
        queue!(self.out, Print(run))?;
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

fn color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

/// Split a row into maximal runs of glyphs sharing one style.
fn style_runs(row: &[Glyph]) -> Vec<(String, Style)> {
    let mut runs: Vec<(String, Style)> = Vec::new();
    for glyph in row {
        match runs.last_mut() {
            Some((run, style)) if *style == glyph.style => run.push(glyph.ch),
            _ => runs.push((glyph.ch.to_string(), glyph.style)),
        }
    }
    runs
}
