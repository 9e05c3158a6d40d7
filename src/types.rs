//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn column for new pieces: `width / 2 - 1`, the same for every kind.
/// Shapes of different widths are not re-centered beyond this rule.
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// Gravity cadence (milliseconds). The core never owns a clock; the driver
/// derives its tick interval from these via `scoring::fall_interval_ms`.
pub const FALL_BASE_MS: u64 = 1000;
pub const FALL_DECREASE_PER_LEVEL_MS: u64 = 50;
pub const FALL_FLOOR_MS: u64 = 100;
pub const FAST_FALL_MS: u64 = 50;

/// Points by number of lines cleared in a single lock, before the level
/// multiplier.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Commands a driver can issue against a game session.
///
/// Soft drop is deliberately absent: holding soft drop only changes the
/// gravity cadence in the driver, it never reaches the engine as a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    MoveLeft,
    MoveRight,
    Rotate,
    HardDrop,
    TogglePause,
    /// One gravity step, equivalent to `move(0, 1)`.
    Gravity,
}
