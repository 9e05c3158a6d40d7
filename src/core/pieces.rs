//! Pieces module - tetromino catalog, rotation, and spawning
//!
//! Shapes are square boolean occupancy matrices (2x2, 3x3, 4x4) in their
//! catalog orientation. Rotation is the plain matrix transform (transpose,
//! then reverse each row): it knows nothing about the board, and an illegal
//! result is discarded whole by the caller rather than nudged into place.
//! There are no wall kicks.

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::types::{PieceKind, SPAWN_X};

/// Largest shape matrix edge (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// A square occupancy matrix for one piece orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    size: u8,
    grid: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        let mut grid = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, v) in row.iter().enumerate() {
                grid[y][x] = *v != 0;
            }
        }
        Self {
            size: N as u8,
            grid,
        }
    }

    /// Matrix edge length.
    pub fn size(&self) -> i8 {
        self.size as i8
    }

    pub fn filled(&self, x: usize, y: usize) -> bool {
        x < self.size as usize && y < self.size as usize && self.grid[y][x]
    }

    /// Occupied cells as (x, y) offsets from the matrix's top-left corner.
    pub fn cells(&self) -> ArrayVec<(i8, i8), 16> {
        let mut out = ArrayVec::new();
        for y in 0..self.size as usize {
            for x in 0..self.size as usize {
                if self.grid[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// 90 degree clockwise rotation: transpose, then reverse each row.
    pub fn rotated(&self) -> Shape {
        let n = self.size as usize;
        let mut grid = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for y in 0..n {
            for x in 0..n {
                grid[y][x] = self.grid[n - 1 - x][y];
            }
        }
        Shape {
            size: self.size,
            grid,
        }
    }
}

/// Catalog orientation for a piece kind.
pub fn shape_of(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows([
            [0, 0, 0, 0],
            [1, 1, 1, 1],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]),
        PieceKind::O => Shape::from_rows([
            [1, 1], //
            [1, 1],
        ]),
        PieceKind::T => Shape::from_rows([
            [0, 1, 0], //
            [1, 1, 1],
            [0, 0, 0],
        ]),
        PieceKind::S => Shape::from_rows([
            [0, 1, 1], //
            [1, 1, 0],
            [0, 0, 0],
        ]),
        PieceKind::Z => Shape::from_rows([
            [1, 1, 0], //
            [0, 1, 1],
            [0, 0, 0],
        ]),
        PieceKind::J => Shape::from_rows([
            [1, 0, 0], //
            [1, 1, 1],
            [0, 0, 0],
        ]),
        PieceKind::L => Shape::from_rows([
            [0, 0, 1], //
            [1, 1, 1],
            [0, 0, 0],
        ]),
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Occupancy matrix for the current rotation.
    pub shape: Shape,
    /// Top-left of the shape matrix, in board coordinates.
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a piece of the given kind at the spawn position.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: shape_of(kind),
            x: SPAWN_X,
            y: 0,
        }
    }

    /// Create a piece of a uniformly random kind at the spawn position.
    pub fn spawn_random(rng: &mut SimpleRng) -> Self {
        Self::spawn(rng.next_kind())
    }
}
