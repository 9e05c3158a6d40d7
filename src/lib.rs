//! Blockfall: a terminal falling-block puzzle game.
//!
//! `core` is the pure simulation (no clock, no I/O). `input`, `term`, and
//! `highscore` are the thin collaborators around it; the binary wires them
//! together into a playable loop.

pub mod core;
pub mod highscore;
pub mod input;
pub mod term;
pub mod types;
