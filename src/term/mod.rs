//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: `view` maps a game session to
//! queued terminal commands over any writer (pure, unit-testable), and
//! `screen` owns the real terminal lifecycle (raw mode, alternate screen)
//! and flushing.

pub mod screen;
pub mod view;

pub use screen::TerminalScreen;
pub use view::GameView;
