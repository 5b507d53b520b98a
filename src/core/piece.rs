//! Piece module - the falling shape
//!
//! A piece is a shape identity, a reference position on the board, and an
//! ordered list of block offsets. Movement and rotation are pure transforms
//! returning new pieces; whether a transform sticks is decided upstream
//! against the board's fill predicate.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::types::{Coord, ShapeId, MAX_BLOCKS};

/// Block offsets of a falling piece, bounded by the largest catalog shape
pub type Blocks = ArrayVec<Coord, MAX_BLOCKS>;

/// The falling piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    shape: ShapeId,
    position: Coord,
    blocks: Blocks,
}

impl Piece {
    pub fn new(shape: ShapeId, position: Coord, blocks: Blocks) -> Self {
        debug_assert!(!blocks.is_empty());
        Self {
            shape,
            position,
            blocks,
        }
    }

    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    /// Block offsets relative to the position
    pub fn blocks(&self) -> &[Coord] {
        &self.blocks
    }

    /// Absolute occupied cells, in block order
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.blocks.iter().map(move |&block| self.position.translate(block))
    }

    /// New piece translated by `offset`; block offsets unchanged
    pub fn moved(&self, offset: Coord) -> Piece {
        Piece {
            position: self.position.translate(offset),
            ..self.clone()
        }
    }

    /// New piece with every block offset turned a quarter turn about the
    /// local origin; position unchanged
    pub fn rotated(&self) -> Piece {
        let blocks = self.blocks.iter().map(|block| block.rotated()).collect();
        Piece {
            blocks,
            ..self.clone()
        }
    }

    /// True if any occupied cell is filled (wall, floor, or settled block)
    pub fn collides(&self, board: &Board) -> bool {
        self.cells().any(|cell| board.is_filled(cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domino_at(x: i8, y: i8) -> Piece {
        let blocks: Blocks = [Coord::new(0, 0), Coord::new(1, 0)].into_iter().collect();
        Piece::new(ShapeId::new(1), Coord::new(x, y), blocks)
    }

    #[test]
    fn test_cells_are_position_plus_offsets() {
        let piece = domino_at(5, 3);
        let cells: Vec<Coord> = piece.cells().collect();
        assert_eq!(cells, vec![Coord::new(5, 3), Coord::new(6, 3)]);
    }

    #[test]
    fn test_moved_shifts_position_only() {
        let piece = domino_at(5, 3);
        let moved = piece.moved(Coord::new(-1, 1));
        assert_eq!(moved.position(), Coord::new(4, 4));
        assert_eq!(moved.blocks(), piece.blocks());
        assert_eq!(moved.shape(), piece.shape());
    }

    #[test]
    fn test_rotated_keeps_position() {
        let piece = domino_at(5, 3);
        let rotated = piece.rotated();
        assert_eq!(rotated.position(), Coord::new(5, 3));
        assert_eq!(rotated.blocks(), &[Coord::new(0, 0), Coord::new(0, -1)]);
    }

    #[test]
    fn test_four_rotations_restore_blocks() {
        let piece = domino_at(5, 3);
        let back = piece.rotated().rotated().rotated().rotated();
        assert_eq!(back, piece);
    }

    #[test]
    fn test_collides_against_walls_and_blocks() {
        let board = Board::new(10, 20);
        assert!(!domino_at(5, 3).collides(&board));
        // Right block at x = 10 is outside.
        assert!(domino_at(9, 3).collides(&board));
        assert!(domino_at(-1, 3).collides(&board));
        assert!(domino_at(5, 20).collides(&board));

        let occupied = board.stamp(&domino_at(4, 10));
        assert!(domino_at(5, 10).collides(&occupied));
        assert!(!domino_at(5, 9).collides(&occupied));
    }
}
