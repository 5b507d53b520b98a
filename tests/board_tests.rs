//! Board tests - grid reads, the fill predicate, stamping, row removal

use ntris::core::{Board, Piece};
use ntris::types::{Coord, ShapeId};

fn coord(x: i8, y: i8) -> Coord {
    Coord::new(x, y)
}

fn cell(id: u8) -> Option<ShapeId> {
    Some(ShapeId::new(id))
}

fn monomino(id: u8, x: i8, y: i8) -> Piece {
    Piece::new(
        ShapeId::new(id),
        coord(x, y),
        [coord(0, 0)].into_iter().collect(),
    )
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(10, 20);
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);

    // All cells should be empty
    for y in 0..20 {
        for x in 0..10 {
            assert_eq!(board.cell(coord(x, y)), None);
            assert!(!board.is_filled(coord(x, y)));
        }
    }
}

#[test]
fn test_board_out_of_bounds_counts_as_filled() {
    let board = Board::new(10, 20);

    // Left and right walls
    assert!(board.is_filled(coord(-1, 5)));
    assert!(board.is_filled(coord(10, 5)));
    // Above the top and below the floor
    assert!(board.is_filled(coord(5, -1)));
    assert!(board.is_filled(coord(5, 20)));
    // Far out
    assert!(board.is_filled(coord(-100, -100)));
}

#[test]
fn test_board_set_and_cell() {
    let mut board = Board::new(10, 20);

    assert!(board.set(coord(5, 10), cell(3)));
    assert_eq!(board.cell(coord(5, 10)), cell(3));
    assert!(board.is_filled(coord(5, 10)));

    assert!(board.set(coord(5, 10), None));
    assert_eq!(board.cell(coord(5, 10)), None);

    // Out of bounds writes are refused
    assert!(!board.set(coord(-1, 0), cell(1)));
    assert!(!board.set(coord(0, 20), cell(1)));
}

#[test]
fn test_stamp_returns_new_board() {
    let board = Board::new(10, 20);
    let piece = monomino(2, 4, 18);

    let stamped = board.stamp(&piece);

    // Original untouched, copy carries the shape identity.
    assert_eq!(board.cell(coord(4, 18)), None);
    assert_eq!(stamped.cell(coord(4, 18)), cell(2));
    assert_eq!(stamped.occupied_count(), 1);
}

#[test]
fn test_stamp_writes_every_piece_cell() {
    let board = Board::new(10, 20);
    let domino = Piece::new(
        ShapeId::new(1),
        coord(3, 7),
        [coord(0, 0), coord(1, 0)].into_iter().collect(),
    );

    let stamped = board.stamp(&domino);

    assert_eq!(stamped.cell(coord(3, 7)), cell(1));
    assert_eq!(stamped.cell(coord(4, 7)), cell(1));
    assert_eq!(stamped.occupied_count(), 2);
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new(10, 20);

    assert!(!board.is_row_full(5));

    for x in 0..10 {
        board.set(coord(x, 5), cell(1));
    }
    assert!(board.is_row_full(5));

    // One gap keeps the row open
    board.set(coord(7, 5), None);
    assert!(!board.is_row_full(5));
}

#[test]
fn test_remove_row_two_by_three_fixture() {
    // Rows top to bottom: full, empty, occupied.
    let mut board = Board::new(2, 3);
    board.set(coord(0, 0), cell(1));
    board.set(coord(1, 0), cell(1));
    board.set(coord(0, 2), cell(2));
    board.set(coord(1, 2), cell(2));

    board.remove_row(0);

    // Same cell count, top rows empty, bottom row untouched.
    assert_eq!(board.cells().len(), 6);
    assert_eq!(board.occupied_count(), 2);
    assert_eq!(board.cell(coord(0, 0)), None);
    assert_eq!(board.cell(coord(1, 1)), None);
    assert_eq!(board.cell(coord(0, 2)), cell(2));
    assert_eq!(board.cell(coord(1, 2)), cell(2));
}

#[test]
fn test_remove_row_shifts_markers_down() {
    let mut board = Board::new(10, 20);

    for x in 0..10 {
        board.set(coord(x, 5), cell(1));
    }
    board.set(coord(0, 3), cell(2));
    board.set(coord(1, 4), cell(3));

    board.remove_row(5);

    // Rows above the removed one drop by exactly one.
    assert_eq!(board.cell(coord(1, 5)), cell(3));
    assert_eq!(board.cell(coord(0, 4)), cell(2));
    assert_eq!(board.cell(coord(0, 3)), None);
    // Rows below are untouched and the top is empty.
    assert!(!board.is_row_full(5));
    for x in 0..10 {
        assert_eq!(board.cell(coord(x, 0)), None);
    }
}

#[test]
fn test_remove_bottom_row() {
    let mut board = Board::new(4, 6);
    for x in 0..4 {
        board.set(coord(x, 5), cell(1));
    }
    board.set(coord(2, 4), cell(2));

    board.remove_row(5);

    assert_eq!(board.cell(coord(2, 5)), cell(2));
    assert_eq!(board.cell(coord(2, 4)), None);
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_top_to_bottom_sweep_catches_adjacent_full_rows() {
    // Two stacked full rows with a marker above them.
    let mut board = Board::new(4, 6);
    for x in 0..4 {
        board.set(coord(x, 4), cell(1));
        board.set(coord(x, 5), cell(1));
    }
    board.set(coord(0, 3), cell(2));

    // The sweep the lock step performs: scan downward, removing as found.
    let mut removed = 0;
    for y in 0..board.height() {
        if board.is_row_full(y) {
            board.remove_row(y);
            removed += 1;
        }
    }

    assert_eq!(removed, 2);
    assert_eq!(board.occupied_count(), 1);
    assert_eq!(board.cell(coord(0, 5)), cell(2));
}
