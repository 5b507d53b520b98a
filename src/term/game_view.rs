//! Pure view: draws one game state onto a surface.
//!
//! No I/O here; tests inspect the produced glyphs directly.

use std::iter;

use crate::core::GameState;
use crate::term::fb::{Rgb, Style, Surface};
use crate::types::{Coord, ShapeId};

/// Game title for a piece size, matching the classic naming ladder.
pub fn title(arity: u8) -> &'static str {
    match arity {
        1 => "Monotris",
        2 => "Ditris",
        3 => "Tritris",
        4 => "Tetris",
        5 => "Pentris",
        6 => "Hextris",
        7 => "Heptis",
        8 => "Octris",
        9 => "Nontris",
        10 => "Decatris",
        _ => "N-tris",
    }
}

/// Terminal dimensions the view may draw into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WELL_BG: Rgb = Rgb(30, 30, 40);
const PANEL_BG: Rgb = Rgb(0, 0, 0);

/// Placement of the bordered well inside the viewport.
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Scales board cells onto the character grid and lays out the side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the game state into a fresh surface.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> Surface {
        let mut surface = Surface::new(viewport.width, viewport.height);

        let well_w = state.board().width() as u16 * self.cell_w;
        let well_h = state.board().height() as u16 * self.cell_h;
        let frame = Frame {
            x: viewport.width.saturating_sub(well_w + 2) / 2,
            y: viewport.height.saturating_sub(well_h + 2) / 2,
            w: well_w + 2,
            h: well_h + 2,
        };

        self.draw_title(&mut surface, state, &frame);
        self.draw_border(&mut surface, &frame);
        self.draw_cells(&mut surface, state, &frame);
        self.draw_panel(&mut surface, state, viewport, &frame);
        if state.game_over() {
            self.draw_banner(&mut surface, &frame, "GAME OVER");
        }

        surface
    }

    /// Title above the frame, when there is a spare row for it.
    fn draw_title(&self, surface: &mut Surface, state: &GameState, frame: &Frame) {
        if frame.y == 0 {
            return;
        }
        let text = title(state.config().arity);
        let x = frame.x + frame.w.saturating_sub(text.chars().count() as u16) / 2;
        surface.text(x, frame.y - 1, text, Style::default().bold());
    }

    fn draw_border(&self, surface: &mut Surface, frame: &Frame) {
        if frame.w < 2 || frame.h < 2 {
            return;
        }
        let style = Style::plain(Rgb(200, 200, 200), PANEL_BG);
        let bar: String = iter::repeat('─').take(frame.w as usize - 2).collect();

        surface.text(frame.x, frame.y, &format!("┌{bar}┐"), style);
        surface.text(frame.x, frame.y + frame.h - 1, &format!("└{bar}┘"), style);
        for dy in 1..frame.h - 1 {
            surface.put(frame.x, frame.y + dy, '│', style);
            surface.put(frame.x + frame.w - 1, frame.y + dy, '│', style);
        }
    }

    /// Settled cells with grid dots for empty ones, then the active piece
    /// painted over the top.
    fn draw_cells(&self, surface: &mut Surface, state: &GameState, frame: &Frame) {
        let dot = Style::plain(Rgb(90, 90, 100), WELL_BG).dim();

        for y in 0..state.board().height() {
            for x in 0..state.board().width() {
                match state.cell_at(Coord::new(x as i8, y as i8)) {
                    Some(shape) => {
                        let block = Style::plain(shape_color(shape), WELL_BG).bold();
                        self.paint_cell(surface, frame, x as u16, y as u16, '█', block);
                    }
                    None => self.paint_cell(surface, frame, x as u16, y as u16, '·', dot),
                }
            }
        }

        let block = Style::plain(shape_color(state.active().shape()), WELL_BG).bold();
        for cell in state.active().cells() {
            if state.board().contains(cell) {
                self.paint_cell(surface, frame, cell.x as u16, cell.y as u16, '█', block);
            }
        }
    }

    /// Fill the character rectangle one board cell maps to.
    fn paint_cell(
        &self,
        surface: &mut Surface,
        frame: &Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: Style,
    ) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y * self.cell_h;
        surface.fill(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Score readout and next-piece preview to the right of the well.
    fn draw_panel(
        &self,
        surface: &mut Surface,
        state: &GameState,
        viewport: Viewport,
        frame: &Frame,
    ) {
        let x = frame.x.saturating_add(frame.w).saturating_add(2);
        if viewport.width.saturating_sub(x) < 12 {
            return;
        }
        let label = Style::plain(Rgb(220, 220, 220), PANEL_BG).bold();
        let value = Style::plain(Rgb(200, 200, 200), PANEL_BG);

        surface.text(x, frame.y, "SCORE", label);
        surface.text(x, frame.y + 1, &state.score().to_string(), value);

        surface.text(x, frame.y + 3, "NEXT", label);
        self.draw_preview(surface, state, x, frame.y + 4);
    }

    /// The next piece, its offsets normalized into a small box.
    fn draw_preview(&self, surface: &mut Surface, state: &GameState, x: u16, y: u16) {
        let piece = state.next_piece();
        let min_x = piece.blocks().iter().map(|b| b.x).min().unwrap_or(0);
        let min_y = piece.blocks().iter().map(|b| b.y).min().unwrap_or(0);
        let style = Style::plain(shape_color(piece.shape()), PANEL_BG).bold();

        for block in piece.blocks() {
            let px = x + (block.x - min_x) as u16 * self.cell_w;
            let py = y + (block.y - min_y) as u16 * self.cell_h;
            surface.fill(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_banner(&self, surface: &mut Surface, frame: &Frame, text: &str) {
        let x = frame.x + frame.w.saturating_sub(text.chars().count() as u16) / 2;
        let y = frame.y + frame.h / 2;
        surface.text(x, y, text, Style::plain(Rgb(255, 255, 255), PANEL_BG).bold());
    }
}

/// Fixed palette, cycled for catalogs with more than seven shapes.
fn shape_color(shape: ShapeId) -> Rgb {
    const PALETTE: [Rgb; 7] = [
        Rgb(80, 220, 220),
        Rgb(240, 220, 80),
        Rgb(200, 120, 220),
        Rgb(100, 220, 120),
        Rgb(220, 80, 80),
        Rgb(80, 120, 220),
        Rgb(255, 165, 0),
    ];
    PALETTE[(shape.get() as usize - 1) % PALETTE.len()]
}
