//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of
//! the piece that locked there. Uses a flat array for cache locality and
//! zero allocation. Coordinates: (x, y) with x in 0..9 left to right and
//! y in 0..19 top to bottom.
//!
//! Operations that change cell contents (`merged`, `clear_full_rows`)
//! return a new board rather than mutating in place; the session replaces
//! its copy wholesale. Rows above the visible area do not exist as storage:
//! a piece may overhang the top while spawning, and those cells are dropped
//! at merge time.

use arrayvec::ArrayVec;

use crate::core::pieces::{Shape, Tetromino};
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Legality of placing `shape` with its top-left corner at (x, y).
    ///
    /// A placement is illegal when any occupied shape cell would land
    /// outside the side walls, at or below the floor, or on a filled cell.
    /// Cells with a board row above 0 are exempt from the filled-cell
    /// check: pieces may legally overhang the top of the board while
    /// spawning or rotating. There is no upper-bound check on y itself.
    pub fn piece_fits(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.cells().iter().all(|&(dx, dy)| {
            let bx = x + dx;
            let by = y + dy;
            if bx < 0 || bx >= BOARD_WIDTH as i8 || by >= BOARD_HEIGHT as i8 {
                return false;
            }
            by < 0 || !self.is_occupied(bx, by)
        })
    }

    /// New board with the piece stamped in at its current position.
    ///
    /// Shape cells above row 0 are silently dropped. The input board is
    /// left untouched.
    pub fn merged(&self, piece: &Tetromino) -> Board {
        let mut out = *self;
        for &(dx, dy) in piece.shape.cells().iter() {
            let by = piece.y + dy;
            if by >= 0 {
                out.set(piece.x + dx, by, Some(piece.kind));
            }
        }
        out
    }

    /// Remove every full row and prepend that many empty rows at the top.
    ///
    /// Surviving rows keep their relative order and slide down by the
    /// number of cleared rows above them. Returns the compacted board and
    /// the count of rows removed; with no full rows the board comes back
    /// unchanged and the count is 0.
    pub fn clear_full_rows(&self) -> (Board, usize) {
        let mut kept: ArrayVec<usize, { BOARD_HEIGHT as usize }> = ArrayVec::new();
        for y in 0..BOARD_HEIGHT as usize {
            if !self.is_row_full(y) {
                kept.push(y);
            }
        }

        let cleared = BOARD_HEIGHT as usize - kept.len();
        if cleared == 0 {
            return (*self, 0);
        }

        let width = BOARD_WIDTH as usize;
        let mut out = Board::new();
        for (i, &src_y) in kept.iter().enumerate() {
            let src = src_y * width;
            let dst = (cleared + i) * width;
            out.cells[dst..dst + width].copy_from_slice(&self.cells[src..src + width]);
        }
        (out, cleared)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
