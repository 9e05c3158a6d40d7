//! Core module - pure game logic with no external dependencies
//!
//! Game rules, state management, and scoring. Zero dependencies on UI,
//! timing, or I/O: drivers feed commands in and read state out, and the
//! only clock-adjacent thing here is the pure `fall_interval_ms` formula.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;

// Re-export commonly used types
pub use board::Board;
pub use game_state::{GameState, LockEvent};
pub use pieces::{shape_of, Shape, Tetromino};
pub use rng::{seed_from_clock, SimpleRng};
pub use scoring::{fall_interval_ms, level_for, score_delta};
