//! Board module - manages the settled-block grid
//!
//! The board is a `width x height` grid where each cell is empty or holds the
//! shape identity of the piece that settled there. Uses flat row-major storage.
//! Coordinates: (x, y) with x growing left to right and y growing top to bottom,
//! so y = 0 is the top row and y = height - 1 sits on the floor.

use crate::core::piece::Piece;
use crate::types::{Cell, Coord};

/// The settled-block grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(&self, coord: Coord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        Some(coord.y as usize * self.width as usize + coord.x as usize)
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Check if a coordinate lies inside the grid
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u8) < self.width
            && (coord.y as u8) < self.height
    }

    /// Get cell at a coordinate; out of bounds reads as empty
    pub fn cell(&self, coord: Coord) -> Cell {
        self.index(coord).and_then(|idx| self.cells[idx])
    }

    /// Set cell at a coordinate
    /// Returns false if out of bounds
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        match self.index(coord) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// The collision predicate: occupied cells and everything outside the
    /// grid count as filled, so walls, floor, and settled blocks all reject
    /// a piece through the same test.
    pub fn is_filled(&self, coord: Coord) -> bool {
        match self.index(coord) {
            Some(idx) => self.cells[idx].is_some(),
            None => true,
        }
    }

    /// Return a new board with the piece's cells written as its shape
    /// identity. Occupancy is not re-checked; callers reach this through the
    /// collision-checked transition path.
    pub fn stamp(&self, piece: &Piece) -> Board {
        let mut stamped = self.clone();
        for cell in piece.cells() {
            stamped.set(cell, Some(piece.shape()));
        }
        stamped
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: u8) -> bool {
        if y >= self.height {
            return false;
        }
        let start = y as usize * self.width as usize;
        let end = start + self.width as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`: shift every row above it down by one and insert an
    /// empty row at the top. The cell count is preserved.
    pub fn remove_row(&mut self, y: u8) {
        if y >= self.height {
            return;
        }
        let width = self.width as usize;

        // Shift rows 0..y down by one, bottom-up so the copies do not clobber.
        for row in (1..=y as usize).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        // Clear the top row
        for cell in &mut self.cells[..width] {
            *cell = None;
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Count of occupied cells (for tests and assertions)
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
