//! Styled character surface the game view draws into.
//!
//! The view writes glyphs here and the screen flushes them to the terminal,
//! which keeps every drawing decision testable without one.

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Stroke weight of a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weight {
    #[default]
    Normal,
    Bold,
    Dim,
}

/// Foreground, background, and weight of one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub weight: Weight,
}

impl Style {
    pub const fn plain(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            weight: Weight::Normal,
        }
    }

    pub const fn bold(self) -> Self {
        Self {
            weight: Weight::Bold,
            fg: self.fg,
            bg: self.bg,
        }
    }

    pub const fn dim(self) -> Self {
        Self {
            weight: Weight::Dim,
            fg: self.fg,
            bg: self.bg,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::plain(Rgb(220, 220, 220), Rgb(0, 0, 0))
    }
}

/// One character cell of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

/// Rectangular glyph grid, blank on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl Surface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Rows of the surface, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Glyph]> {
        self.glyphs.chunks(self.width.max(1) as usize)
    }

    pub fn glyph_at(&self, x: u16, y: u16) -> Option<Glyph> {
        if x < self.width && y < self.height {
            Some(self.glyphs[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Write one glyph. Writes outside the surface are dropped.
    pub fn put(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if x < self.width && y < self.height {
            self.glyphs[y as usize * self.width as usize + x as usize] = Glyph { ch, style };
        }
    }

    /// Write a string left to right, clipping at the right edge.
    pub fn text(&mut self, x: u16, y: u16, s: &str, style: Style) {
        for (i, ch) in s.chars().enumerate() {
            self.put(x.saturating_add(i as u16), y, ch, style);
        }
    }

    /// Fill a rectangle with one repeated glyph.
    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: Style) {
        for dy in 0..h {
            for dx in 0..w {
                self.put(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_is_blank() {
        let surface = Surface::new(3, 2);
        assert_eq!(surface.width(), 3);
        assert_eq!(surface.height(), 2);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(surface.glyph_at(x, y), Some(Glyph::default()));
            }
        }
    }

    #[test]
    fn test_rows_cover_the_grid_in_order() {
        let mut surface = Surface::new(2, 2);
        surface.put(0, 0, 'a', Style::default());
        surface.put(1, 1, 'b', Style::default());

        let rows: Vec<String> = surface
            .rows()
            .map(|row| row.iter().map(|g| g.ch).collect())
            .collect();
        assert_eq!(rows, vec!["a ".to_string(), " b".to_string()]);
    }

    #[test]
    fn test_writes_outside_the_surface_are_dropped() {
        let mut surface = Surface::new(3, 2);
        surface.put(3, 0, 'X', Style::default());
        surface.put(0, 2, 'X', Style::default());
        assert_eq!(surface.glyph_at(3, 0), None);
        assert_eq!(surface.glyph_at(0, 0).map(|g| g.ch), Some(' '));
    }

    #[test]
    fn test_text_clips_at_the_right_edge() {
        let mut surface = Surface::new(4, 1);
        surface.text(2, 0, "ABCD", Style::default());
        assert_eq!(surface.glyph_at(2, 0).unwrap().ch, 'A');
        assert_eq!(surface.glyph_at(3, 0).unwrap().ch, 'B');
        assert_eq!(surface.glyph_at(0, 0).unwrap().ch, ' ');
    }

    #[test]
    fn test_fill_covers_exactly_the_rectangle() {
        let mut surface = Surface::new(4, 3);
        surface.fill(1, 1, 2, 2, '#', Style::default());
        assert_eq!(surface.glyph_at(1, 1).unwrap().ch, '#');
        assert_eq!(surface.glyph_at(2, 2).unwrap().ch, '#');
        assert_eq!(surface.glyph_at(0, 0).unwrap().ch, ' ');
        assert_eq!(surface.glyph_at(3, 1).unwrap().ch, ' ');
    }

    #[test]
    fn test_style_builders_set_the_weight() {
        let base = Style::plain(Rgb(1, 2, 3), Rgb(4, 5, 6));
        assert_eq!(base.weight, Weight::Normal);
        assert_eq!(base.bold().weight, Weight::Bold);
        assert_eq!(base.dim().weight, Weight::Dim);
        assert_eq!(base.bold().fg, Rgb(1, 2, 3));
    }
}
