//! Board tests - legality, merging, and line compaction

use blockfall::core::{shape_of, Board, Tetromino};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(PieceKind::I));
    }
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert!(board.cells().iter().all(|cell| cell.is_none()));
}

#[test]
fn test_fits_is_false_outside_walls_regardless_of_content() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let shape = shape_of(kind);
        let size = shape.size();
        // Far enough left/right/down that some occupied cell must exit.
        assert!(!board.piece_fits(&shape, -(size), 5), "{:?} left", kind);
        assert!(
            !board.piece_fits(&shape, BOARD_WIDTH as i8, 5),
            "{:?} right",
            kind
        );
        assert!(
            !board.piece_fits(&shape, 3, BOARD_HEIGHT as i8),
            "{:?} floor",
            kind
        );
    }
}

#[test]
fn test_fits_above_the_top_is_legal() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let shape = shape_of(kind);
        // Only the side walls and floor bind above the board.
        assert!(board.piece_fits(&shape, 3, -1), "{:?}", kind);
    }
}

#[test]
fn test_fits_rejects_occupied_cells() {
    let mut board = Board::new();
    board.set(4, 10, Some(PieceKind::S));

    let shape = shape_of(PieceKind::O);
    assert!(!board.piece_fits(&shape, 3, 9));
    assert!(board.piece_fits(&shape, 5, 9));
}

#[test]
fn test_rotated_shape_can_become_illegal_at_a_wall() {
    let board = Board::new();
    // Vertical I hugging the left wall is fine; the horizontal rotation of
    // the same piece at the same position is not. The caller rejects it.
    let vertical = shape_of(PieceKind::I).rotated();
    assert!(board.piece_fits(&vertical, -2, 0));
    assert!(!board.piece_fits(&vertical.rotated(), -2, 0));
}

#[test]
fn test_merge_does_not_mutate_input() {
    let mut board = Board::new();
    board.set(0, 19, Some(PieceKind::Z));
    let before = board;

    let piece = Tetromino {
        kind: PieceKind::T,
        shape: shape_of(PieceKind::T),
        x: 3,
        y: 17,
    };
    let merged = board.merged(&piece);

    assert_eq!(board, before);
    assert_ne!(merged, before);
    assert_eq!(merged.get(4, 17), Some(Some(PieceKind::T)));
    assert_eq!(merged.get(0, 19), Some(Some(PieceKind::Z)));
}

#[test]
fn test_merge_writes_the_piece_kind_token() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let merged = board.merged(&Tetromino {
            kind,
            shape: shape_of(kind),
            x: 3,
            y: 10,
        });
        let stamped: Vec<_> = merged.cells().iter().flatten().collect();
        assert_eq!(stamped.len(), 4);
        assert!(stamped.iter().all(|&&k| k == kind));
    }
}

#[test]
fn test_clear_lines_zero_full_rows_returns_identical_board() {
    let mut board = Board::new();
    board.set(1, 19, Some(PieceKind::L));
    board.set(8, 3, Some(PieceKind::J));

    let (after, count) = board.clear_full_rows();

    assert_eq!(count, 0);
    assert_eq!(after, board);
}

#[test]
fn test_clear_lines_removes_k_rows_and_prepends_k_empty() {
    let mut board = Board::new();
    fill_row(&mut board, 18);
    fill_row(&mut board, 19);
    board.set(0, 17, Some(PieceKind::T));

    let (after, count) = board.clear_full_rows();

    assert_eq!(count, 2);
    assert_eq!(after.width(), BOARD_WIDTH);
    assert_eq!(after.height(), BOARD_HEIGHT);
    // k empty rows on top, survivor pushed down by k.
    for y in 0..2 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(after.get(x, y), Some(None));
        }
    }
    assert_eq!(after.get(0, 19), Some(Some(PieceKind::T)));
}

#[test]
fn test_clear_lines_four_at_once() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y);
    }

    let (after, count) = board.clear_full_rows();

    assert_eq!(count, 4);
    assert!(after.cells().iter().all(|cell| cell.is_none()));
}
